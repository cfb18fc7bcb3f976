//! Tax reconciliation.
//!
//! Output tax is what the hotel collected from guests (invoice line taxes
//! plus service-charge tax); input tax is what it paid suppliers. Both
//! sides are grouped by tax-rate key, and the net liability is collected
//! minus paid (positive means payable, negative means refundable).

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::DataIntegrityWarning;
use crate::documents::{GuestInvoice, SupplierInvoice};
use crate::fiscal::DateRange;

/// Key used for the service-charge tax group.
const SERVICE_CHARGE_KEY: &str = "service-charge";

/// One tax-rate group on either side of the reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLine {
    /// Rate key (e.g., "10%", or "service-charge").
    pub rate_key: String,
    /// Base amount the tax was computed on.
    pub taxable_amount: Decimal,
    /// Tax amount in the group.
    pub tax_amount: Decimal,
}

/// The tax reconciliation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxReconciliation {
    /// The reporting period.
    pub period: DateRange,
    /// Tax collected from guests, grouped by rate.
    pub output_tax: Vec<TaxLine>,
    /// Total tax collected.
    pub total_collected: Decimal,
    /// Tax paid to suppliers, grouped by rate.
    pub input_tax: Vec<TaxLine>,
    /// Total tax paid.
    pub total_paid: Decimal,
    /// Collected minus paid.
    pub net_tax_liability: Decimal,
    /// Non-fatal findings.
    pub warnings: Vec<DataIntegrityWarning>,
}

/// Builds the tax reconciliation for `period`.
#[must_use]
pub fn build(
    guest_invoices: &[GuestInvoice],
    supplier_invoices: &[SupplierInvoice],
    period: DateRange,
) -> TaxReconciliation {
    let mut output: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for invoice in guest_invoices {
        if !period.contains(invoice.invoice_date) {
            continue;
        }
        for line in &invoice.line_items {
            let group = output.entry(rate_key(line.tax_rate)).or_default();
            group.0 += line.amount;
            group.1 += line.tax_amount;
        }
        if !invoice.service_charge.is_zero() || !invoice.service_charge_tax.is_zero() {
            let group = output.entry(SERVICE_CHARGE_KEY.to_string()).or_default();
            group.0 += invoice.service_charge;
            group.1 += invoice.service_charge_tax;
        }
    }

    let mut input: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for invoice in supplier_invoices {
        if !period.contains(invoice.invoice_date) {
            continue;
        }
        let group = input.entry(rate_key(invoice.tax_rate)).or_default();
        group.0 += invoice.amount;
        group.1 += invoice.tax_amount;
    }

    let output_tax = to_lines(output);
    let input_tax = to_lines(input);
    let total_collected: Decimal = output_tax.iter().map(|l| l.tax_amount).sum();
    let total_paid: Decimal = input_tax.iter().map(|l| l.tax_amount).sum();

    let mut warnings = Vec::new();
    if output_tax.is_empty() && input_tax.is_empty() {
        warnings.push(DataIntegrityWarning::EmptyPeriod {
            report: "tax_reconciliation".to_string(),
        });
    }

    TaxReconciliation {
        period,
        output_tax,
        total_collected,
        input_tax,
        total_paid,
        net_tax_liability: total_collected - total_paid,
        warnings,
    }
}

fn rate_key(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}

fn to_lines(groups: BTreeMap<String, (Decimal, Decimal)>) -> Vec<TaxLine> {
    groups
        .into_iter()
        .map(|(rate_key, (taxable_amount, tax_amount))| TaxLine {
            rate_key,
            taxable_amount,
            tax_amount,
        })
        .collect()
}

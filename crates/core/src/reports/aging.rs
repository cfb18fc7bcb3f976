//! AR and AP aging schedules.
//!
//! Outstanding invoices are bucketed by how overdue they are relative to
//! an injected "today": due date for payables, invoice date for
//! receivables. The buckets partition the schedule; every outstanding
//! invoice lands in exactly one.

use std::collections::HashMap;

use chrono::NaiveDate;
use folio_shared::ReportingConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::DataIntegrityWarning;
use crate::documents::{GuestInvoice, SupplierInvoice};

/// Day-range classification of an overdue balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgingBucket {
    /// Not yet overdue (0 or fewer days).
    Current,
    /// 1 to 30 days overdue.
    Days1To30,
    /// 31 to 60 days overdue.
    Days31To60,
    /// 61 to 90 days overdue.
    Days61To90,
    /// More than 90 days overdue.
    Over90,
}

impl AgingBucket {
    /// All buckets in schedule order.
    pub const ALL: [Self; 5] = [
        Self::Current,
        Self::Days1To30,
        Self::Days31To60,
        Self::Days61To90,
        Self::Over90,
    ];

    /// Classifies a days-overdue count.
    #[must_use]
    pub const fn for_days_overdue(days: i64) -> Self {
        match days {
            i64::MIN..=0 => Self::Current,
            1..=30 => Self::Days1To30,
            31..=60 => Self::Days31To60,
            61..=90 => Self::Days61To90,
            _ => Self::Over90,
        }
    }

    /// Display label for the bucket.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Days1To30 => "1-30 Days",
            Self::Days31To60 => "31-60 Days",
            Self::Days61To90 => "61-90 Days",
            Self::Over90 => "90+ Days",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Current => 0,
            Self::Days1To30 => 1,
            Self::Days31To60 => 2,
            Self::Days61To90 => 3,
            Self::Over90 => 4,
        }
    }
}

/// One outstanding invoice placed in the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgedInvoice {
    /// Invoice number.
    pub invoice_number: String,
    /// Supplier or guest name (placeholder when missing).
    pub counterparty: String,
    /// Outstanding balance.
    pub balance: Decimal,
    /// The date aging is measured from.
    pub reference_date: NaiveDate,
    /// Whole days overdue (negative or zero means not yet due).
    pub days_overdue: i64,
}

/// Totals for one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSummary {
    /// The bucket.
    pub bucket: AgingBucket,
    /// Number of invoices in the bucket.
    pub count: usize,
    /// Sum of outstanding balances.
    pub total: Decimal,
    /// The invoices, in input order.
    pub invoices: Vec<AgedInvoice>,
}

/// Per-counterparty breakdown across buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterpartyAging {
    /// Supplier or guest name.
    pub name: String,
    /// Total outstanding across all buckets.
    pub total_due: Decimal,
    /// Outstanding per bucket, in schedule order.
    pub by_bucket: [Decimal; 5],
}

/// An AR or AP aging schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingReport {
    /// The "today" the schedule was aged against.
    pub as_of: NaiveDate,
    /// One summary per bucket, in schedule order (all five always present).
    pub buckets: Vec<BucketSummary>,
    /// Counterparties sorted by descending total due.
    pub counterparties: Vec<CounterpartyAging>,
    /// Total outstanding across the schedule.
    pub total_outstanding: Decimal,
    /// Non-fatal findings.
    pub warnings: Vec<DataIntegrityWarning>,
}

/// Builds the accounts-payable aging schedule, aged by due date.
#[must_use]
pub fn accounts_payable(
    invoices: &[SupplierInvoice],
    today: NaiveDate,
    config: &ReportingConfig,
) -> AgingReport {
    let items = invoices.iter().filter(|i| i.is_outstanding()).map(|i| {
        (
            i.invoice_number.clone(),
            i.supplier_name
                .clone()
                .unwrap_or_else(|| config.unknown_supplier_label.clone()),
            i.balance,
            i.due_date,
        )
    });
    build_schedule(items, today, "accounts_payable_aging")
}

/// Builds the accounts-receivable aging schedule, aged by invoice date.
#[must_use]
pub fn accounts_receivable(
    invoices: &[GuestInvoice],
    today: NaiveDate,
    config: &ReportingConfig,
) -> AgingReport {
    let items = invoices.iter().filter(|i| i.is_outstanding()).map(|i| {
        (
            i.invoice_number.clone(),
            i.guest_name
                .clone()
                .unwrap_or_else(|| config.unknown_guest_label.clone()),
            i.balance,
            i.invoice_date,
        )
    });
    build_schedule(items, today, "accounts_receivable_aging")
}

fn build_schedule(
    items: impl Iterator<Item = (String, String, Decimal, NaiveDate)>,
    today: NaiveDate,
    report_name: &str,
) -> AgingReport {
    let mut buckets: Vec<BucketSummary> = AgingBucket::ALL
        .into_iter()
        .map(|bucket| BucketSummary {
            bucket,
            count: 0,
            total: Decimal::ZERO,
            invoices: Vec::new(),
        })
        .collect();
    let mut by_counterparty: HashMap<String, [Decimal; 5]> = HashMap::new();
    let mut total_outstanding = Decimal::ZERO;

    for (invoice_number, counterparty, balance, reference_date) in items {
        let days_overdue = (today - reference_date).num_days();
        let bucket = AgingBucket::for_days_overdue(days_overdue);

        let summary = &mut buckets[bucket.index()];
        summary.count += 1;
        summary.total += balance;
        summary.invoices.push(AgedInvoice {
            invoice_number,
            counterparty: counterparty.clone(),
            balance,
            reference_date,
            days_overdue,
        });

        by_counterparty.entry(counterparty).or_default()[bucket.index()] += balance;
        total_outstanding += balance;
    }

    let mut counterparties: Vec<CounterpartyAging> = by_counterparty
        .into_iter()
        .map(|(name, by_bucket)| CounterpartyAging {
            name,
            total_due: by_bucket.iter().copied().sum(),
            by_bucket,
        })
        .collect();
    // Descending total due; name breaks ties so output is deterministic.
    counterparties.sort_by(|a, b| b.total_due.cmp(&a.total_due).then(a.name.cmp(&b.name)));

    let mut warnings = Vec::new();
    if total_outstanding.is_zero() && counterparties.is_empty() {
        warnings.push(DataIntegrityWarning::EmptyPeriod {
            report: report_name.to_string(),
        });
    }

    AgingReport {
        as_of: today,
        buckets,
        counterparties,
        total_outstanding,
        warnings,
    }
}

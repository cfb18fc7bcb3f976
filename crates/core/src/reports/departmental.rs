//! Departmental profit and loss.
//!
//! Attributes revenue from the hotel's operational feeds (folio charges,
//! outlet orders, guest invoice lines) and from departmental GL postings
//! in the revenue code range, then nets departmental costs to produce a
//! P&L per department.

use std::collections::BTreeMap;

use folio_shared::types::percent_of;
use folio_shared::ReportingConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::DataIntegrityWarning;
use crate::accounts::{AccountSubtype, ChartOfAccounts};
use crate::documents::{Expense, ExpenseCategory, ExpenseStatus, FolioCharge, GuestInvoice, Order};
use crate::fiscal::DateRange;
use crate::journal::GlEntry;

/// The P&L of a single department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentPl {
    /// Department name.
    pub department: String,
    /// Revenue attributed to the department.
    pub revenue: Decimal,
    /// Cost of sales.
    pub cost_of_sales: Decimal,
    /// Revenue minus cost of sales.
    pub gross_profit: Decimal,
    /// Gross profit as a percentage of revenue (0 when revenue is 0).
    pub gross_margin_percent: Decimal,
    /// Operating expenses.
    pub operating_expenses: Decimal,
    /// Gross profit minus operating expenses.
    pub operating_income: Decimal,
    /// Operating income as a percentage of revenue.
    pub operating_margin_percent: Decimal,
    /// Departmental bottom line (no non-operating items are attributed).
    pub net_income: Decimal,
    /// Net income as a percentage of revenue.
    pub net_margin_percent: Decimal,
}

/// The departmental P&L report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentalReport {
    /// The reporting period.
    pub period: DateRange,
    /// Departments sorted by descending revenue.
    pub departments: Vec<DepartmentPl>,
    /// Revenue across all departments.
    pub total_revenue: Decimal,
    /// Net income across all departments.
    pub total_net_income: Decimal,
    /// Non-fatal findings.
    pub warnings: Vec<DataIntegrityWarning>,
}

/// Operational inputs to the departmental P&L.
#[derive(Debug, Clone, Copy)]
pub struct DepartmentalInputs<'a> {
    /// Folio charges from the front office.
    pub folio_charges: &'a [FolioCharge],
    /// Outlet orders from the point of sale.
    pub orders: &'a [Order],
    /// Guest invoices (their line items carry departments).
    pub guest_invoices: &'a [GuestInvoice],
    /// Expense records.
    pub expenses: &'a [Expense],
    /// The GL log.
    pub gl: &'a [GlEntry],
}

#[derive(Default)]
struct Tally {
    revenue: Decimal,
    cost_of_sales: Decimal,
    operating_expenses: Decimal,
}

/// Builds the departmental P&L for `period`.
#[must_use]
pub fn build(
    inputs: DepartmentalInputs<'_>,
    chart: &ChartOfAccounts,
    period: DateRange,
    config: &ReportingConfig,
) -> DepartmentalReport {
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();

    for charge in inputs.folio_charges {
        if period.contains(charge.charge_date) {
            tallies.entry(charge.department.clone()).or_default().revenue += charge.amount;
        }
    }
    for order in inputs.orders {
        if period.contains(order.order_date) && order.earns_revenue() {
            tallies.entry(order.department.clone()).or_default().revenue += order.amount;
        }
    }
    for invoice in inputs.guest_invoices {
        if !period.contains(invoice.invoice_date) {
            continue;
        }
        for line in &invoice.line_items {
            if let Some(department) = &line.department {
                tallies.entry(department.clone()).or_default().revenue += line.amount;
            }
        }
    }
    for entry in inputs.gl {
        let Some(department) = &entry.department else {
            continue;
        };
        if !period.contains(entry.transaction_date) {
            continue;
        }
        let account = chart.get_by_code(&entry.account_code);
        let in_revenue_range = account
            .and_then(|a| a.numeric_code())
            .is_some_and(|code| config.is_revenue_code(code));
        if in_revenue_range {
            tallies.entry(department.clone()).or_default().revenue += entry.credit - entry.debit;
        } else if let Some(account) = account {
            let tally = tallies.entry(department.clone()).or_default();
            match account.subtype {
                Some(AccountSubtype::CostOfSales) => {
                    tally.cost_of_sales += entry.debit - entry.credit;
                }
                Some(AccountSubtype::OperatingExpense) => {
                    tally.operating_expenses += entry.debit - entry.credit;
                }
                _ => {}
            }
        }
    }
    for exp in inputs.expenses {
        let Some(department) = &exp.department else {
            continue;
        };
        if !period.contains(exp.expense_date) || exp.status == ExpenseStatus::Rejected {
            continue;
        }
        let tally = tallies.entry(department.clone()).or_default();
        // Supplies are direct costs; everything else is overhead.
        if exp.category == ExpenseCategory::Supplies {
            tally.cost_of_sales += exp.amount;
        } else {
            tally.operating_expenses += exp.amount;
        }
    }

    let mut departments: Vec<DepartmentPl> = tallies
        .into_iter()
        .map(|(department, tally)| {
            let gross_profit = tally.revenue - tally.cost_of_sales;
            let operating_income = gross_profit - tally.operating_expenses;
            let net_income = operating_income;
            DepartmentPl {
                department,
                revenue: tally.revenue,
                cost_of_sales: tally.cost_of_sales,
                gross_profit,
                gross_margin_percent: percent_of(gross_profit, tally.revenue),
                operating_expenses: tally.operating_expenses,
                operating_income,
                operating_margin_percent: percent_of(operating_income, tally.revenue),
                net_income,
                net_margin_percent: percent_of(net_income, tally.revenue),
            }
        })
        .collect();
    departments.sort_by(|a, b| {
        b.revenue
            .cmp(&a.revenue)
            .then(a.department.cmp(&b.department))
    });

    let total_revenue = departments.iter().map(|d| d.revenue).sum();
    let total_net_income = departments.iter().map(|d| d.net_income).sum();

    let mut warnings = Vec::new();
    if departments.is_empty() {
        warnings.push(DataIntegrityWarning::EmptyPeriod {
            report: "departmental_pl".to_string(),
        });
    }

    DepartmentalReport {
        period,
        departments,
        total_revenue,
        total_net_income,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{Account, AccountType};
    use crate::documents::{GuestInvoiceLine, GuestInvoiceStatus, OrderStatus, PaymentMethod};
    use chrono::NaiveDate;
    use folio_shared::types::{AccountId, ExpenseId, GlEntryId, GuestInvoiceId, JournalEntryId};
    use rust_decimal_macros::dec;

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    fn period() -> DateRange {
        DateRange::new(march(1), march(31))
    }

    fn chart() -> ChartOfAccounts {
        let revenue = Account {
            id: AccountId::new(),
            code: "4100".to_string(),
            name: "Banquet Revenue".to_string(),
            account_type: AccountType::Revenue,
            normal_balance: AccountType::Revenue.conventional_normal_balance(),
            subtype: None,
            current_balance: Decimal::ZERO,
            is_active: true,
        };
        let cos = Account {
            id: AccountId::new(),
            code: "5100".to_string(),
            name: "Banquet Food Cost".to_string(),
            account_type: AccountType::Expense,
            normal_balance: AccountType::Expense.conventional_normal_balance(),
            subtype: Some(AccountSubtype::CostOfSales),
            current_balance: Decimal::ZERO,
            is_active: true,
        };
        ChartOfAccounts::new(vec![revenue, cos])
    }

    fn inputs<'a>(
        folio_charges: &'a [FolioCharge],
        orders: &'a [Order],
        guest_invoices: &'a [GuestInvoice],
        expenses: &'a [Expense],
        gl: &'a [GlEntry],
    ) -> DepartmentalInputs<'a> {
        DepartmentalInputs {
            folio_charges,
            orders,
            guest_invoices,
            expenses,
            gl,
        }
    }

    #[test]
    fn test_revenue_from_all_feeds() {
        let charges = vec![FolioCharge {
            charge_date: march(5),
            department: "Rooms".to_string(),
            amount: dec!(1000),
            description: "Room night".to_string(),
        }];
        let orders = vec![
            Order {
                order_date: march(6),
                department: "F&B".to_string(),
                amount: dec!(300),
                status: OrderStatus::Completed,
            },
            Order {
                order_date: march(6),
                department: "F&B".to_string(),
                amount: dec!(999),
                status: OrderStatus::Cancelled,
            },
        ];
        let invoices = vec![GuestInvoice {
            id: GuestInvoiceId::new(),
            invoice_number: "GI-1".to_string(),
            guest_name: None,
            invoice_date: march(7),
            line_items: vec![GuestInvoiceLine {
                description: "Spa treatment".to_string(),
                department: Some("Spa".to_string()),
                amount: dec!(200),
                tax_rate: dec!(10),
                tax_amount: dec!(20),
            }],
            service_charge: dec!(0),
            service_charge_tax: dec!(0),
            balance: dec!(220),
            status: GuestInvoiceStatus::Open,
        }];
        let gl = vec![GlEntry {
            id: GlEntryId::new(),
            journal_entry_id: JournalEntryId::new(),
            account_code: "4100".to_string(),
            debit: dec!(0),
            credit: dec!(500),
            transaction_date: march(8),
            department: Some("Events".to_string()),
            description: "Banquet".to_string(),
            source_document: "JE-2026-0001".to_string(),
        }];

        let report = build(
            inputs(&charges, &orders, &invoices, &[], &gl),
            &chart(),
            period(),
            &ReportingConfig::default(),
        );

        assert_eq!(report.total_revenue, dec!(2000));
        assert_eq!(report.departments[0].department, "Rooms");
        let fnb = report.departments.iter().find(|d| d.department == "F&B").unwrap();
        assert_eq!(fnb.revenue, dec!(300));
        let events = report.departments.iter().find(|d| d.department == "Events").unwrap();
        assert_eq!(events.revenue, dec!(500));
    }

    #[test]
    fn test_margins_and_zero_revenue_department() {
        let expenses = vec![
            Expense {
                id: ExpenseId::new(),
                expense_date: march(10),
                category: ExpenseCategory::Supplies,
                department: Some("F&B".to_string()),
                amount: dec!(120),
                payment_method: PaymentMethod::Cash,
                status: ExpenseStatus::Paid,
                description: "produce".to_string(),
            },
            Expense {
                id: ExpenseId::new(),
                expense_date: march(11),
                category: ExpenseCategory::Utilities,
                department: Some("F&B".to_string()),
                amount: dec!(80),
                payment_method: PaymentMethod::Cash,
                status: ExpenseStatus::Paid,
                description: "gas".to_string(),
            },
            // Department with costs but no revenue.
            Expense {
                id: ExpenseId::new(),
                expense_date: march(12),
                category: ExpenseCategory::Maintenance,
                department: Some("Engineering".to_string()),
                amount: dec!(50),
                payment_method: PaymentMethod::Cash,
                status: ExpenseStatus::Paid,
                description: "repairs".to_string(),
            },
        ];
        let orders = vec![Order {
            order_date: march(6),
            department: "F&B".to_string(),
            amount: dec!(400),
            status: OrderStatus::Completed,
        }];

        let report = build(
            inputs(&[], &orders, &[], &expenses, &[]),
            &chart(),
            period(),
            &ReportingConfig::default(),
        );

        let fnb = report.departments.iter().find(|d| d.department == "F&B").unwrap();
        assert_eq!(fnb.cost_of_sales, dec!(120));
        assert_eq!(fnb.gross_profit, dec!(280));
        assert_eq!(fnb.gross_margin_percent, dec!(70.00));
        assert_eq!(fnb.operating_income, dec!(200));
        assert_eq!(fnb.net_margin_percent, dec!(50.00));

        let eng = report
            .departments
            .iter()
            .find(|d| d.department == "Engineering")
            .unwrap();
        assert_eq!(eng.revenue, dec!(0));
        assert_eq!(eng.net_income, dec!(-50));
        assert_eq!(eng.net_margin_percent, dec!(0));
    }

    #[test]
    fn test_empty_period_warns() {
        let report = build(
            inputs(&[], &[], &[], &[], &[]),
            &chart(),
            period(),
            &ReportingConfig::default(),
        );
        assert!(report.departments.is_empty());
        assert!(matches!(
            report.warnings[0],
            DataIntegrityWarning::EmptyPeriod { .. }
        ));
    }
}

//! Property-based tests for the statement builders.
//!
//! Validates the cross-cutting guarantees: builders are idempotent for a
//! fixed snapshot, the cash-flow reconciliation identity always holds, and
//! the aging buckets partition the outstanding invoices.

use chrono::NaiveDate;
use folio_shared::types::{AccountId, GlEntryId, JournalEntryId, SupplierInvoiceId};
use folio_shared::ReportingConfig;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::accounts::{Account, AccountSubtype, AccountType, ChartOfAccounts};
use crate::documents::{SupplierInvoice, SupplierInvoiceStatus};
use crate::fiscal::DateRange;
use crate::journal::GlEntry;
use crate::reports::{aging, cash_flow, trial_balance};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
}

fn period() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
    )
}

fn fixture_chart() -> ChartOfAccounts {
    let make = |code: &str, account_type: AccountType, subtype, balance| Account {
        id: AccountId::new(),
        code: code.to_string(),
        name: format!("Account {code}"),
        account_type,
        normal_balance: account_type.conventional_normal_balance(),
        subtype,
        current_balance: balance,
        is_active: true,
    };
    ChartOfAccounts::new(vec![
        make("1000", AccountType::Asset, Some(AccountSubtype::Cash), Decimal::new(10_000, 0)),
        make("1100", AccountType::Asset, Some(AccountSubtype::AccountsReceivable), Decimal::new(2_000, 0)),
        make("2000", AccountType::Liability, Some(AccountSubtype::AccountsPayable), Decimal::new(1_500, 0)),
        make("4000", AccountType::Revenue, None, Decimal::ZERO),
        make("6000", AccountType::Expense, Some(AccountSubtype::OperatingExpense), Decimal::ZERO),
    ])
}

/// Strategy for random positive two-decimal amounts.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for a GL log of balanced revenue postings inside the period.
fn arb_gl_log() -> impl Strategy<Value = Vec<GlEntry>> {
    prop::collection::vec((arb_amount(), 1u32..28), 0..10).prop_map(|pairs| {
        pairs
            .into_iter()
            .flat_map(|(amount, day)| {
                let date = NaiveDate::from_ymd_opt(2026, 6, day).unwrap();
                let journal_entry_id = JournalEntryId::new();
                [
                    gl_row(journal_entry_id, "1000", amount, Decimal::ZERO, date),
                    gl_row(journal_entry_id, "4000", Decimal::ZERO, amount, date),
                ]
            })
            .collect()
    })
}

fn gl_row(
    journal_entry_id: JournalEntryId,
    code: &str,
    debit: Decimal,
    credit: Decimal,
    date: NaiveDate,
) -> GlEntry {
    GlEntry {
        id: GlEntryId::new(),
        journal_entry_id,
        account_code: code.to_string(),
        debit,
        credit,
        transaction_date: date,
        department: None,
        description: "posting".to_string(),
        source_document: "JE-2026-0001".to_string(),
    }
}

/// Strategy for outstanding supplier invoices with arbitrary due dates.
fn arb_invoices() -> impl Strategy<Value = Vec<SupplierInvoice>> {
    prop::collection::vec((arb_amount(), -60i64..400), 0..20).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (balance, days_overdue))| SupplierInvoice {
                id: SupplierInvoiceId::new(),
                invoice_number: format!("SI-{i}"),
                supplier_name: Some(format!("Supplier {}", i % 3)),
                invoice_date: today() - chrono::Duration::days(days_overdue),
                due_date: today() - chrono::Duration::days(days_overdue),
                amount: balance,
                tax_rate: Decimal::ZERO,
                tax_amount: Decimal::ZERO,
                balance,
                status: SupplierInvoiceStatus::Received,
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Trial balance is idempotent for a fixed snapshot.
    #[test]
    fn prop_trial_balance_idempotent(gl in arb_gl_log()) {
        let chart = fixture_chart();
        let first = trial_balance::build(&gl, &chart, None);
        let second = trial_balance::build(&gl, &chart, None);
        prop_assert_eq!(first, second);
    }

    /// A GL log of balanced postings always balances the trial balance.
    #[test]
    fn prop_balanced_gl_balances_trial_balance(gl in arb_gl_log()) {
        let chart = fixture_chart();
        let report = trial_balance::build(&gl, &chart, None);
        prop_assert_eq!(report.total_debit_balances, report.total_credit_balances);
    }

    /// The cash-flow reconciliation identity holds for any input.
    #[test]
    fn prop_cash_flow_identity(gl in arb_gl_log()) {
        let chart = fixture_chart();
        let statement = cash_flow::build(
            &gl,
            &chart,
            &[],
            &[],
            period(),
            &ReportingConfig::default(),
        );
        prop_assert_eq!(
            statement.beginning_cash + statement.net_cash_flow,
            statement.ending_cash
        );
        prop_assert_eq!(
            statement.net_cash_flow,
            statement.operating.total + statement.investing.total + statement.financing.total
        );
    }

    /// Aging buckets partition the outstanding invoices: every invoice in
    /// exactly one bucket, totals adding up.
    #[test]
    fn prop_aging_buckets_partition(invoices in arb_invoices()) {
        let report = aging::accounts_payable(&invoices, today(), &ReportingConfig::default());

        let placed: usize = report.buckets.iter().map(|b| b.count).sum();
        prop_assert_eq!(placed, invoices.len());

        let bucket_total: Decimal = report.buckets.iter().map(|b| b.total).sum();
        prop_assert_eq!(bucket_total, report.total_outstanding);

        let counterparty_total: Decimal =
            report.counterparties.iter().map(|c| c.total_due).sum();
        prop_assert_eq!(counterparty_total, report.total_outstanding);
    }

    /// Aging is idempotent for a fixed snapshot and "today".
    #[test]
    fn prop_aging_idempotent(invoices in arb_invoices()) {
        let config = ReportingConfig::default();
        let first = aging::accounts_payable(&invoices, today(), &config);
        let second = aging::accounts_payable(&invoices, today(), &config);
        prop_assert_eq!(first, second);
    }
}

//! Property-based tests for the journal ledger and reversal engine.
//!
//! These tests validate the structural guarantees of posting and
//! reversal: posted entries balance, the GL mirrors posted lines, and a
//! reversal cancels its original account-for-account.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::accounts::{Account, AccountType, ChartOfAccounts};
use crate::journal::ledger::JournalLedger;
use crate::journal::reversal::ReversalEngine;
use crate::journal::types::{CreateJournalInput, JournalSource, JournalStatus, JournalType, LineInput};
use folio_shared::types::{AccountId, StaffId};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
}

fn make_account(code: &str, account_type: AccountType) -> Account {
    Account {
        id: AccountId::new(),
        code: code.to_string(),
        name: format!("Account {code}"),
        account_type,
        normal_balance: account_type.conventional_normal_balance(),
        subtype: None,
        current_balance: Decimal::ZERO,
        is_active: true,
    }
}

/// Strategy for random positive amounts with two decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for 1-5 balanced debit/credit amount pairs.
fn arb_amounts() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(arb_amount(), 1..5)
}

/// Builds a chart with one debit account and one credit account, and a
/// balanced entry posting `amounts` as pairs between them.
fn posted_fixture(amounts: &[Decimal]) -> (JournalLedger, ChartOfAccounts, StaffId, folio_shared::types::JournalEntryId) {
    let cash = make_account("1000", AccountType::Asset);
    let revenue = make_account("4000", AccountType::Revenue);
    let (cash_id, revenue_id) = (cash.id, revenue.id);
    let chart = ChartOfAccounts::new(vec![cash, revenue]);
    let actor = StaffId::new();
    let mut ledger = JournalLedger::new();

    let mut lines = Vec::new();
    for amount in amounts {
        lines.push(LineInput {
            account_id: cash_id,
            debit: *amount,
            credit: Decimal::ZERO,
            description: "debit side".to_string(),
        });
        lines.push(LineInput {
            account_id: revenue_id,
            debit: Decimal::ZERO,
            credit: *amount,
            description: "credit side".to_string(),
        });
    }

    let id = ledger.create(
        CreateJournalInput {
            journal_type: JournalType::Sales,
            source: JournalSource::FrontOffice,
            transaction_date: now().date_naive(),
            description: "property fixture".to_string(),
            department: None,
            lines,
        },
        actor,
        now(),
    );

    for target in [
        JournalStatus::PendingApproval,
        JournalStatus::Approved,
        JournalStatus::Posted,
    ] {
        ledger
            .transition(&chart, id, target, actor, now())
            .expect("fixture transitions are valid");
    }
    (ledger, chart, actor, id)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Posted entries always balance and mirror into the GL line-for-line.
    #[test]
    fn prop_posted_entry_balances_and_mirrors_gl(amounts in arb_amounts()) {
        let (ledger, _, _, id) = posted_fixture(&amounts);
        let entry = ledger.get(id).unwrap();

        prop_assert_eq!(entry.total_debit, entry.total_credit);
        prop_assert_eq!(ledger.gl_entries().len(), entry.lines.len());

        let gl_debit: Decimal = ledger.gl_entries().iter().map(|r| r.debit).sum();
        let gl_credit: Decimal = ledger.gl_entries().iter().map(|r| r.credit).sum();
        prop_assert_eq!(gl_debit, entry.total_debit);
        prop_assert_eq!(gl_credit, entry.total_credit);
    }

    /// A reversal swaps debit and credit per line and preserves accounts.
    #[test]
    fn prop_reversal_swaps_sides_per_line(amounts in arb_amounts()) {
        let (mut ledger, _, actor, id) = posted_fixture(&amounts);
        let reversal_id = ReversalEngine::reverse(&mut ledger, id, actor, now()).unwrap();

        let original = ledger.get(id).unwrap().clone();
        let reversal = ledger.get(reversal_id).unwrap();

        prop_assert_eq!(reversal.lines.len(), original.lines.len());
        for (orig, rev) in original.lines.iter().zip(reversal.lines.iter()) {
            prop_assert_eq!(orig.account_id, rev.account_id);
            prop_assert_eq!(orig.debit, rev.credit);
            prop_assert_eq!(orig.credit, rev.debit);
        }
    }

    /// After a reversal, every account's GL activity nets to zero.
    #[test]
    fn prop_reversal_cancels_original_per_account(amounts in arb_amounts()) {
        let (mut ledger, _, actor, id) = posted_fixture(&amounts);
        ReversalEngine::reverse(&mut ledger, id, actor, now()).unwrap();

        for code in ["1000", "4000"] {
            let net: Decimal = ledger
                .gl_entries()
                .iter()
                .filter(|r| r.account_code == code)
                .map(|r| r.debit - r.credit)
                .sum();
            prop_assert_eq!(net, Decimal::ZERO);
        }
    }

    /// Reversal links are symmetric and an entry reverses at most once.
    #[test]
    fn prop_reversal_links_are_symmetric(amounts in arb_amounts()) {
        let (mut ledger, _, actor, id) = posted_fixture(&amounts);
        let reversal_id = ReversalEngine::reverse(&mut ledger, id, actor, now()).unwrap();

        prop_assert_eq!(
            ledger.get(id).unwrap().reversed_by_entry_id,
            Some(reversal_id)
        );
        prop_assert_eq!(
            ledger.get(reversal_id).unwrap().reversal_of_entry_id,
            Some(id)
        );
        prop_assert!(ReversalEngine::reverse(&mut ledger, id, actor, now()).is_err());
    }
}

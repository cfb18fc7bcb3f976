//! Reversal of posted journal entries.
//!
//! Posted entries are immutable, so corrections happen by posting a mirror
//! entry: every line swaps debit and credit. The reversal skips the
//! approval workflow and lands directly in posted status, and both entries
//! are linked so an entry can be reversed at most once.

use chrono::{DateTime, Utc};
use folio_shared::types::{GlEntryId, JournalEntryId, StaffId};
use tracing::info;

use super::error::ReversalError;
use super::ledger::JournalLedger;
use super::types::{
    AuditAction, AuditRecord, GlEntry, JournalEntry, JournalLine, JournalSource, JournalStatus,
};

/// Creates reversal entries for posted journal entries.
#[derive(Debug, Default)]
pub struct ReversalEngine;

impl ReversalEngine {
    /// Reverses a posted entry, returning the ID of the new reversal entry.
    ///
    /// The reversal mirrors the original line-for-line with debit and
    /// credit swapped, carries the transaction date of the reversal itself,
    /// and is posted immediately. The original is marked as reversed.
    ///
    /// # Errors
    ///
    /// Returns `NotPosted` if the entry has not been posted, or
    /// `AlreadyReversed` if a reversal already exists.
    pub fn reverse(
        ledger: &mut JournalLedger,
        entry_id: JournalEntryId,
        actor: StaffId,
        now: DateTime<Utc>,
    ) -> Result<JournalEntryId, ReversalError> {
        let original = ledger
            .get(entry_id)
            .ok_or(ReversalError::EntryNotFound(entry_id))?;

        if original.status != JournalStatus::Posted {
            return Err(ReversalError::NotPosted {
                id: entry_id,
                status: original.status,
            });
        }
        if let Some(reversed_by) = original.reversed_by_entry_id {
            return Err(ReversalError::AlreadyReversed {
                id: entry_id,
                reversed_by,
            });
        }

        let reversal_date = now.date_naive();
        let description = format!(
            "Reversal of {}: {}",
            original.journal_number, original.description
        );

        let lines: Vec<JournalLine> = original
            .lines
            .iter()
            .map(|line| JournalLine {
                line_number: line.line_number,
                account_id: line.account_id,
                debit: line.credit,
                credit: line.debit,
                description: line.description.clone(),
            })
            .collect();

        // The original posted against the chart, so its GL rows already
        // carry resolved account codes; mirroring them keeps the reversal
        // total even if the chart changed since.
        let original_number = original.journal_number.clone();
        let journal_type = original.journal_type;
        let department = original.department.clone();
        let total_debit = original.total_credit;
        let total_credit = original.total_debit;

        let reversal_id = JournalEntryId::new();
        let year = crate::fiscal::fiscal_year(reversal_date);
        let journal_number = ledger.next_journal_number(year);

        let gl_rows: Vec<GlEntry> = ledger
            .gl_entries()
            .iter()
            .filter(|row| row.journal_entry_id == entry_id)
            .map(|row| GlEntry {
                id: GlEntryId::new(),
                journal_entry_id: reversal_id,
                account_code: row.account_code.clone(),
                debit: row.credit,
                credit: row.debit,
                transaction_date: reversal_date,
                department: row.department.clone(),
                description: row.description.clone(),
                source_document: journal_number.clone(),
            })
            .collect();

        let reversal = JournalEntry {
            id: reversal_id,
            journal_number: journal_number.clone(),
            journal_type,
            source: JournalSource::System,
            status: JournalStatus::Posted,
            transaction_date: reversal_date,
            posting_date: Some(reversal_date),
            fiscal_period: crate::fiscal::fiscal_period_key(reversal_date),
            fiscal_year: year,
            department,
            description,
            total_debit,
            total_credit,
            lines,
            is_reversal: true,
            reversal_of_entry_id: Some(entry_id),
            reversed_by_entry_id: None,
            audit_trail: vec![
                AuditRecord {
                    action: AuditAction::Created,
                    actor,
                    at: now,
                    note: Some(format!("reversal of {original_number}")),
                },
                AuditRecord {
                    action: AuditAction::Posted,
                    actor,
                    at: now,
                    note: None,
                },
            ],
        };

        ledger.insert_posted(reversal, gl_rows);

        if let Some(original) = ledger.get_mut(entry_id) {
            original.reversed_by_entry_id = Some(reversal_id);
            original.audit_trail.push(AuditRecord {
                action: AuditAction::Reversed,
                actor,
                at: now,
                note: Some(format!("reversed by {journal_number}")),
            });
        }

        info!(original = %original_number, reversal = %journal_number, "journal entry reversed");
        Ok(reversal_id)
    }
}

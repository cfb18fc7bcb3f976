//! The journal entry ledger.
//!
//! Holds the authoritative journal entries and the append-only general
//! ledger log. Mutations are expected to arrive sequentially from a single
//! caller; every report downstream is a fresh pure projection over
//! `gl_entries()`, never a cached field.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use folio_shared::types::{GlEntryId, JournalEntryId, StaffId};
use rust_decimal::Decimal;
use tracing::debug;

use super::error::JournalError;
use super::types::{
    AuditAction, AuditRecord, CreateJournalInput, GlEntry, JournalEntry, JournalLine,
    JournalStatus, LineInput,
};
use super::validation::{validate_entry, Violation};
use crate::accounts::ChartOfAccounts;
use crate::fiscal::{fiscal_period_key, fiscal_year};

/// In-memory double-entry ledger.
#[derive(Debug, Default)]
pub struct JournalLedger {
    entries: Vec<JournalEntry>,
    index: HashMap<JournalEntryId, usize>,
    gl: Vec<GlEntry>,
    sequences: HashMap<i32, u32>,
}

impl JournalLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all journal entries in creation order.
    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Returns the append-only general ledger log.
    #[must_use]
    pub fn gl_entries(&self) -> &[GlEntry] {
        &self.gl
    }

    /// Looks up an entry by ID.
    #[must_use]
    pub fn get(&self, id: JournalEntryId) -> Option<&JournalEntry> {
        self.index.get(&id).map(|&idx| &self.entries[idx])
    }

    /// Creates a new draft entry.
    ///
    /// Assigns a unique journal number, derives the fiscal period and year
    /// from the transaction date, and records the creation in the audit
    /// trail. Drafts are allowed to be incomplete; call [`Self::validate`]
    /// before submitting for approval.
    pub fn create(
        &mut self,
        input: CreateJournalInput,
        actor: StaffId,
        now: DateTime<Utc>,
    ) -> JournalEntryId {
        let year = fiscal_year(input.transaction_date);
        let journal_number = self.next_journal_number(year);
        let lines = number_lines(input.lines);
        let (total_debit, total_credit) = line_totals(&lines);

        let entry = JournalEntry {
            id: JournalEntryId::new(),
            journal_number,
            journal_type: input.journal_type,
            source: input.source,
            status: JournalStatus::Draft,
            transaction_date: input.transaction_date,
            posting_date: None,
            fiscal_period: fiscal_period_key(input.transaction_date),
            fiscal_year: year,
            department: input.department,
            description: input.description,
            lines,
            total_debit,
            total_credit,
            is_reversal: false,
            reversal_of_entry_id: None,
            reversed_by_entry_id: None,
            audit_trail: vec![AuditRecord {
                action: AuditAction::Created,
                actor,
                at: now,
                note: None,
            }],
        };

        let id = entry.id;
        debug!(journal_number = %entry.journal_number, "journal entry created");
        self.index.insert(id, self.entries.len());
        self.entries.push(entry);
        id
    }

    /// Validates an entry against the chart of accounts.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Validation` carrying every violation found,
    /// or `EntryNotFound` for an unknown ID.
    pub fn validate(
        &self,
        chart: &ChartOfAccounts,
        id: JournalEntryId,
    ) -> Result<(), JournalError> {
        let entry = self.get(id).ok_or(JournalError::EntryNotFound(id))?;
        let violations = validate_entry(&entry.description, &entry.lines, chart);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(JournalError::Validation(violations))
        }
    }

    /// Replaces the lines of a not-yet-posted entry.
    ///
    /// Lines are renumbered 1-based and totals recomputed. The entry stays
    /// in its current status; validation is a separate step.
    ///
    /// # Errors
    ///
    /// Returns `ImmutableEntry` if the entry has been posted, or
    /// `EntryNotFound` for an unknown ID.
    pub fn update_lines(
        &mut self,
        id: JournalEntryId,
        lines: Vec<LineInput>,
        actor: StaffId,
        now: DateTime<Utc>,
    ) -> Result<(), JournalError> {
        let idx = *self
            .index
            .get(&id)
            .ok_or(JournalError::EntryNotFound(id))?;
        let entry = &mut self.entries[idx];

        if entry.status.is_immutable() {
            return Err(JournalError::ImmutableEntry(id));
        }

        entry.lines = number_lines(lines);
        let (total_debit, total_credit) = line_totals(&entry.lines);
        entry.total_debit = total_debit;
        entry.total_credit = total_credit;
        entry.audit_trail.push(AuditRecord {
            action: AuditAction::LinesUpdated,
            actor,
            at: now,
            note: None,
        });
        Ok(())
    }

    /// Transitions an entry to a new workflow status.
    ///
    /// Posting is the only transition with side effects: it requires the
    /// entry to balance within tolerance, validates against the chart,
    /// materializes one GL posting per line, and freezes the entry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` for a disallowed move,
    /// `UnbalancedEntry` when posting an unbalanced entry, or
    /// `Validation` when posting an entry that no longer resolves against
    /// the chart. No partial mutation occurs on failure.
    pub fn transition(
        &mut self,
        chart: &ChartOfAccounts,
        id: JournalEntryId,
        target: JournalStatus,
        actor: StaffId,
        now: DateTime<Utc>,
    ) -> Result<(), JournalError> {
        let idx = *self
            .index
            .get(&id)
            .ok_or(JournalError::EntryNotFound(id))?;

        let gl_rows = {
            let entry = &self.entries[idx];
            if !entry.status.can_transition_to(target) {
                return Err(JournalError::InvalidTransition {
                    from: entry.status,
                    to: target,
                });
            }

            if target == JournalStatus::Posted {
                if !entry.is_balanced() {
                    return Err(JournalError::UnbalancedEntry {
                        debit: entry.total_debit,
                        credit: entry.total_credit,
                    });
                }
                let violations = validate_entry(&entry.description, &entry.lines, chart);
                if !violations.is_empty() {
                    return Err(JournalError::Validation(violations));
                }
                Some(materialize_gl(entry, chart)?)
            } else {
                None
            }
        };

        let entry = &mut self.entries[idx];
        entry.status = target;
        entry.audit_trail.push(AuditRecord {
            action: audit_action_for(target),
            actor,
            at: now,
            note: None,
        });

        if let Some(rows) = gl_rows {
            entry.posting_date = Some(now.date_naive());
            debug!(
                journal_number = %entry.journal_number,
                lines = rows.len(),
                "journal entry posted"
            );
            self.gl.extend(rows);
        }

        Ok(())
    }

    /// Issues the next journal number for a fiscal year ("JE-YYYY-NNNN").
    pub(crate) fn next_journal_number(&mut self, year: i32) -> String {
        let seq = self.sequences.entry(year).or_insert(0);
        *seq += 1;
        format!("JE-{year}-{seq:04}")
    }

    /// Inserts an already-posted entry together with its GL rows.
    ///
    /// Used by the reversal engine, whose entries are self-approving.
    pub(crate) fn insert_posted(&mut self, entry: JournalEntry, gl_rows: Vec<GlEntry>) {
        self.index.insert(entry.id, self.entries.len());
        self.entries.push(entry);
        self.gl.extend(gl_rows);
    }

    pub(crate) fn get_mut(&mut self, id: JournalEntryId) -> Option<&mut JournalEntry> {
        self.index
            .get(&id)
            .copied()
            .map(move |idx| &mut self.entries[idx])
    }
}

/// Assigns contiguous 1-based line numbers.
fn number_lines(inputs: Vec<LineInput>) -> Vec<JournalLine> {
    inputs
        .into_iter()
        .zip(1u32..)
        .map(|(input, line_number)| JournalLine {
            line_number,
            account_id: input.account_id,
            debit: input.debit,
            credit: input.credit,
            description: input.description,
        })
        .collect()
}

fn line_totals(lines: &[JournalLine]) -> (Decimal, Decimal) {
    let total_debit = lines.iter().map(|l| l.debit).sum();
    let total_credit = lines.iter().map(|l| l.credit).sum();
    (total_debit, total_credit)
}

/// Builds the GL rows for a posting entry without mutating anything.
fn materialize_gl(
    entry: &JournalEntry,
    chart: &ChartOfAccounts,
) -> Result<Vec<GlEntry>, JournalError> {
    entry
        .lines
        .iter()
        .map(|line| {
            let account = chart.get(line.account_id).ok_or_else(|| {
                JournalError::Validation(vec![Violation::UnknownAccount {
                    line: line.line_number,
                    account_id: line.account_id,
                }])
            })?;
            Ok(GlEntry {
                id: GlEntryId::new(),
                journal_entry_id: entry.id,
                account_code: account.code.clone(),
                debit: line.debit,
                credit: line.credit,
                transaction_date: entry.transaction_date,
                department: entry.department.clone(),
                description: line.description.clone(),
                source_document: entry.journal_number.clone(),
            })
        })
        .collect()
}

const fn audit_action_for(target: JournalStatus) -> AuditAction {
    match target {
        JournalStatus::PendingApproval => AuditAction::Submitted,
        JournalStatus::Approved => AuditAction::Approved,
        JournalStatus::Posted => AuditAction::Posted,
        JournalStatus::Rejected => AuditAction::Rejected,
        // Entries are created in draft; no transition leads back to it.
        JournalStatus::Draft => AuditAction::Created,
    }
}

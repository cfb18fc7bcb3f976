//! Chart of accounts registry.

use std::collections::HashMap;

use folio_shared::types::AccountId;

use super::types::{Account, AccountSubtype, AccountType};

/// Read-only registry over the host-supplied chart of accounts.
///
/// Indexes accounts by ID and code for the lookups journal validation and
/// the statement builders need.
#[derive(Debug, Clone, Default)]
pub struct ChartOfAccounts {
    accounts: Vec<Account>,
    by_id: HashMap<AccountId, usize>,
    by_code: HashMap<String, usize>,
}

impl ChartOfAccounts {
    /// Builds a registry from host-supplied accounts.
    ///
    /// Later duplicates of an ID or code shadow earlier ones, matching the
    /// host store's last-write-wins semantics.
    #[must_use]
    pub fn new(accounts: Vec<Account>) -> Self {
        let mut by_id = HashMap::with_capacity(accounts.len());
        let mut by_code = HashMap::with_capacity(accounts.len());
        for (idx, account) in accounts.iter().enumerate() {
            by_id.insert(account.id, idx);
            by_code.insert(account.code.clone(), idx);
        }
        Self {
            accounts,
            by_id,
            by_code,
        }
    }

    /// Looks up an account by ID.
    #[must_use]
    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.by_id.get(&id).map(|&idx| &self.accounts[idx])
    }

    /// Looks up an account by code.
    #[must_use]
    pub fn get_by_code(&self, code: &str) -> Option<&Account> {
        self.by_code.get(code).map(|&idx| &self.accounts[idx])
    }

    /// Iterates over all accounts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// Iterates over active accounts in insertion order.
    pub fn active(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter().filter(|a| a.is_active)
    }

    /// Iterates over accounts of the given type.
    pub fn of_type(&self, account_type: AccountType) -> impl Iterator<Item = &Account> {
        self.accounts
            .iter()
            .filter(move |a| a.account_type == account_type)
    }

    /// Iterates over accounts with the given subtype.
    pub fn of_subtype(&self, subtype: AccountSubtype) -> impl Iterator<Item = &Account> {
        self.accounts
            .iter()
            .filter(move |a| a.subtype == Some(subtype))
    }

    /// Returns the number of accounts in the chart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if the chart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

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

    #[test]
    fn test_lookup_by_id_and_code() {
        let account = make_account("1000", AccountType::Asset);
        let id = account.id;
        let chart = ChartOfAccounts::new(vec![account]);

        assert_eq!(chart.get(id).unwrap().code, "1000");
        assert_eq!(chart.get_by_code("1000").unwrap().id, id);
        assert!(chart.get(AccountId::new()).is_none());
        assert!(chart.get_by_code("9999").is_none());
    }

    #[test]
    fn test_of_type_filter() {
        let chart = ChartOfAccounts::new(vec![
            make_account("1000", AccountType::Asset),
            make_account("4000", AccountType::Revenue),
            make_account("4100", AccountType::Revenue),
        ]);

        assert_eq!(chart.of_type(AccountType::Revenue).count(), 2);
        assert_eq!(chart.of_type(AccountType::Expense).count(), 0);
    }

    #[test]
    fn test_active_filter() {
        let mut closed = make_account("1010", AccountType::Asset);
        closed.is_active = false;
        let chart = ChartOfAccounts::new(vec![make_account("1000", AccountType::Asset), closed]);

        let active: Vec<_> = chart.active().map(|a| a.code.as_str()).collect();
        assert_eq!(active, vec!["1000"]);
    }

    #[test]
    fn test_empty_chart() {
        let chart = ChartOfAccounts::new(vec![]);
        assert!(chart.is_empty());
        assert_eq!(chart.len(), 0);
    }
}

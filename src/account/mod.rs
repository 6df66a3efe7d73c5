//! # Account Module
//!
//! The account record shown by the selector, its category set, and the
//! formatting rules used to display it.
//!
//! ## Input Format
//!
//! Account lists are read from a JSON array:
//!
//! ```json
//! [
//!   { "id": "1", "type": "checking", "number": "5501", "balance": 32402.19 },
//!   { "id": "3", "type": "credit", "number": "1767", "balance": -2420.19 }
//! ]
//! ```
//!
//! `selected` is optional and defaults to `false`. Balances may be written as
//! JSON numbers or strings.

pub mod format;

pub use format::{capitalize, format_currency};

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// The closed set of account kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountCategory {
    Checking,
    Savings,
    Credit,
}

impl AccountCategory {
    /// Lowercase name, as it appears in input files
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountCategory::Checking => "checking",
            AccountCategory::Savings => "savings",
            AccountCategory::Credit => "credit",
        }
    }

    /// Display label with the first letter capitalized
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

impl fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One financial account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Account {
    pub id: String,
    #[serde(rename = "type", alias = "category")]
    pub category: AccountCategory,
    /// Display identifier, usually the last four digits
    pub number: String,
    /// Negative for debts such as credit card balances
    pub balance: Decimal,
    #[serde(default)]
    pub selected: bool,
}

impl Account {
    pub fn new(
        id: impl Into<String>,
        category: AccountCategory,
        number: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            number: number.into(),
            balance,
            selected: false,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.balance.is_sign_negative() && !self.balance.is_zero()
    }
}

/// Sum of every balance in the list
///
/// Panics if the sum overflows a `Decimal`. Lists accepted by
/// [`parse_accounts`] never do.
pub fn total_balance(accounts: &[Account]) -> Decimal {
    accounts.iter().map(|a| a.balance).sum()
}

/// Sum of every balance, or `None` if it overflows
pub fn checked_total_balance(accounts: &[Account]) -> Option<Decimal> {
    accounts
        .iter()
        .try_fold(Decimal::ZERO, |sum, a| sum.checked_add(a.balance))
}

/// The first id that appears more than once
pub fn find_duplicate_id(accounts: &[Account]) -> Option<&str> {
    let mut seen = HashSet::new();
    accounts
        .iter()
        .map(|a| a.id.as_str())
        .find(|id| !seen.insert(*id))
}

/// The account list used when no input file is given
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account::new(
            "1",
            AccountCategory::Checking,
            "5501",
            Decimal::new(3240219, 2),
        ),
        Account::new(
            "2",
            AccountCategory::Savings,
            "2399",
            Decimal::new(1000000, 2),
        ),
        Account::new(
            "3",
            AccountCategory::Credit,
            "1767",
            Decimal::new(-242019, 2),
        ),
    ]
}

/// Parse an account list from JSON text
///
/// Fails if two accounts share an id or the balances overflow when summed.
pub fn parse_accounts(content: &str) -> Result<Vec<Account>> {
    let accounts: Vec<Account> =
        serde_json::from_str(content).context("Failed to parse account list")?;

    if let Some(id) = find_duplicate_id(&accounts) {
        bail!("Duplicate account id: {}", id);
    }
    checked_total_balance(&accounts).context("Account balances overflow")?;

    Ok(accounts)
}

/// Read and parse an account list file
pub fn load_accounts(path: &Path) -> Result<Vec<Account>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read accounts file: {}", path.display()))?;

    let accounts = parse_accounts(&content)
        .with_context(|| format!("Invalid accounts file: {}", path.display()))?;

    tracing::debug!(count = accounts.len(), path = %path.display(), "loaded accounts");
    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_category_label() {
        assert_eq!(AccountCategory::Checking.label(), "Checking");
        assert_eq!(AccountCategory::Savings.label(), "Savings");
        assert_eq!(AccountCategory::Credit.label(), "Credit");
        assert_eq!(AccountCategory::Credit.to_string(), "credit");
    }

    #[test]
    fn test_demo_accounts_total() {
        let accounts = demo_accounts();
        assert_eq!(accounts.len(), 3);
        assert_eq!(total_balance(&accounts), Decimal::new(3998200, 2));
        assert!(accounts.iter().all(|a| !a.selected));
    }

    #[test]
    fn test_is_negative() {
        let accounts = demo_accounts();
        assert!(!accounts[0].is_negative());
        assert!(accounts[2].is_negative());
        let zero = Account::new("z", AccountCategory::Savings, "0000", Decimal::ZERO);
        assert!(!zero.is_negative());
    }

    #[test]
    fn test_parse_accounts_numbers_and_strings() {
        let json = r#"[
            {"id": "1", "type": "checking", "number": "5501", "balance": 32402.19},
            {"id": "2", "type": "savings", "number": "2399", "balance": "10000.00", "selected": true}
        ]"#;
        let accounts = parse_accounts(json).expect("parse");
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].balance, Decimal::new(3240219, 2));
        assert!(!accounts[0].selected);
        assert_eq!(accounts[1].category, AccountCategory::Savings);
        assert!(accounts[1].selected);
    }

    #[test]
    fn test_parse_accounts_category_alias() {
        let json = r#"[{"id": "9", "category": "credit", "number": "1767", "balance": -5}]"#;
        let accounts = parse_accounts(json).expect("parse");
        assert_eq!(accounts[0].category, AccountCategory::Credit);
        assert!(accounts[0].is_negative());
    }

    #[test]
    fn test_parse_accounts_rejects_unknown_category() {
        let json = r#"[{"id": "1", "type": "brokerage", "number": "1", "balance": 1}]"#;
        assert!(parse_accounts(json).is_err());
    }

    #[test]
    fn test_parse_accounts_rejects_unknown_fields() {
        let json = r#"[{"id": "1", "type": "checking", "number": "1", "balance": 1, "owner": "x"}]"#;
        assert!(parse_accounts(json).is_err());
    }

    #[test]
    fn test_parse_accounts_rejects_duplicate_ids() {
        let json = r#"[
            {"id": "1", "type": "checking", "number": "1", "balance": 1},
            {"id": "1", "type": "savings", "number": "2", "balance": 2}
        ]"#;
        let err = parse_accounts(json).expect_err("duplicate");
        assert!(err.to_string().contains("Duplicate account id: 1"));
    }

    #[test]
    fn test_parse_accounts_rejects_overflowing_total() {
        let json = r#"[
            {"id": "1", "type": "savings", "number": "1", "balance": "50000000000000000000000000000"},
            {"id": "2", "type": "savings", "number": "2", "balance": "50000000000000000000000000000"}
        ]"#;
        let err = parse_accounts(json).expect_err("overflow");
        assert!(err.to_string().contains("Account balances overflow"));
    }

    #[test]
    fn test_parse_accounts_accepts_large_balances_that_cancel() {
        let json = r#"[
            {"id": "1", "type": "savings", "number": "1", "balance": "50000000000000000000000000000"},
            {"id": "2", "type": "credit", "number": "2", "balance": "-50000000000000000000000000000"}
        ]"#;
        let accounts = parse_accounts(json).expect("parse");
        assert_eq!(total_balance(&accounts), Decimal::ZERO);
    }

    #[test]
    fn test_checked_total_balance() {
        let accounts = demo_accounts();
        assert_eq!(
            checked_total_balance(&accounts),
            Some(Decimal::new(3998200, 2))
        );

        let huge = vec![
            Account::new("a", AccountCategory::Savings, "1", Decimal::MAX),
            Account::new("b", AccountCategory::Savings, "2", Decimal::ONE),
        ];
        assert_eq!(checked_total_balance(&huge), None);
    }

    #[test]
    fn test_find_duplicate_id() {
        assert_eq!(find_duplicate_id(&demo_accounts()), None);
        let mut accounts = demo_accounts();
        accounts[2].id = "1".to_string();
        assert_eq!(find_duplicate_id(&accounts), Some("1"));
    }

    #[test]
    fn test_load_accounts_from_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("accounts.json");
        fs::write(
            &path,
            r#"[{"id": "a", "type": "checking", "number": "0001", "balance": 12.5}]"#,
        )
        .expect("write");

        let accounts = load_accounts(&path).expect("load");
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id, "a");
        assert_eq!(accounts[0].balance, Decimal::new(125, 1));
    }

    #[test]
    fn test_load_accounts_missing_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("missing.json");
        let err = load_accounts(&path).expect_err("missing");
        assert!(err.to_string().contains("Failed to read accounts file"));
    }
}

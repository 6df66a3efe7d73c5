//! # Selector Module
//!
//! The account selector state machine.
//!
//! ## States
//!
//! ```text
//!   collapsed  <-- toggle_expansion / select_single_account -->  expanded
//!  (header only)                                            (header, rows,
//!                                                            summary, footer)
//! ```
//!
//! The selector owns a working copy of the accounts. Two operations change
//! which accounts are selected:
//!
//! - [`AccountSelector::toggle_account_selection`] flips one account (the
//!   icon control, multi-select)
//! - [`AccountSelector::select_single_account`] makes one account the only
//!   selected account, or reverts to all accounts if it was already focused
//!   (row activation, single-select)
//!
//! Header text and the displayed balance are derived on every read through
//! [`AccountSelector::view`]. After each selection operation the observer,
//! if any, receives the current selected accounts.

mod view;

pub use view::{
    AccountRow, SelectorView, SummaryRow, ALL_ACCOUNTS_HEADER, ALL_ACCOUNTS_ROW_LABEL,
    MANAGE_CONNECTIONS_LABEL,
};

use crate::account::{self, Account};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Callback receiving the selected accounts, in list order
pub type SelectionObserver = Box<dyn FnMut(&[Account])>;

pub struct AccountSelector {
    accounts: Vec<Account>,
    focused: Option<String>,
    is_expanded: bool,
    observer: Option<SelectionObserver>,
}

impl AccountSelector {
    /// Create a collapsed selector with no observer
    ///
    /// Account ids must be unique and the balances must sum without
    /// overflowing a `Decimal`. [`account::parse_accounts`] checks both.
    pub fn new(accounts: Vec<Account>) -> Self {
        debug_assert!(
            account::find_duplicate_id(&accounts).is_none(),
            "duplicate account id"
        );
        debug_assert!(
            account::checked_total_balance(&accounts).is_some(),
            "account balances overflow"
        );
        Self {
            accounts,
            focused: None,
            is_expanded: false,
            observer: None,
        }
    }

    /// Create a selector and notify `observer` of the initial selection
    pub fn with_observer(
        accounts: Vec<Account>,
        observer: impl FnMut(&[Account]) + 'static,
    ) -> Self {
        let mut selector = Self::new(accounts);
        selector.observer = Some(Box::new(observer));
        selector.notify();
        selector
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    pub fn focused_account(&self) -> Option<&Account> {
        let id = self.focused.as_deref()?;
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn selected_accounts(&self) -> Vec<&Account> {
        self.accounts.iter().filter(|a| a.selected).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.accounts.iter().filter(|a| a.selected).count()
    }

    /// True when every account is selected (vacuously true for an empty list)
    pub fn all_selected(&self) -> bool {
        self.selected_count() == self.accounts.len()
    }

    pub fn total_balance(&self) -> Decimal {
        account::total_balance(&self.accounts)
    }

    pub fn toggle_expansion(&mut self) {
        self.is_expanded = !self.is_expanded;
        debug!(expanded = self.is_expanded, "toggled expansion");
    }

    /// Flip the selection flag of one account
    ///
    /// Focus follows the resulting count: none at zero or all, the single
    /// selected account at one, and unchanged otherwise. Unknown ids leave
    /// the accounts untouched.
    pub fn toggle_account_selection(&mut self, account_id: &str) {
        match self.accounts.iter_mut().find(|a| a.id == account_id) {
            Some(account) => {
                account.selected = !account.selected;
                debug!(id = account_id, selected = account.selected, "toggled account");

                let selected: Vec<&Account> =
                    self.accounts.iter().filter(|a| a.selected).collect();
                if selected.is_empty() || selected.len() == self.accounts.len() {
                    self.focused = None;
                } else if let [only] = selected.as_slice() {
                    self.focused = Some(only.id.clone());
                }
            }
            None => debug!(id = account_id, "toggle ignored, no such account"),
        }

        self.notify();
    }

    /// Make `account_id` the only selected account and collapse
    ///
    /// Activating the already focused account reverts to all accounts
    /// selected with no focus.
    pub fn select_single_account(&mut self, account_id: &str) {
        if self.focused.as_deref() == Some(account_id) {
            self.focused = None;
            for account in &mut self.accounts {
                account.selected = true;
            }
            debug!(id = account_id, "cleared focus, all accounts selected");
        } else {
            for account in &mut self.accounts {
                account.selected = account.id == account_id;
            }
            self.focused = self
                .accounts
                .iter()
                .any(|a| a.id == account_id)
                .then(|| account_id.to_string());
            debug!(id = account_id, "focused single account");
        }

        self.is_expanded = false;
        self.notify();
    }

    /// Header text: "All Accounts", one category, or a comma list
    pub fn header_label(&self) -> String {
        let selected = self.selected_accounts();
        if selected.is_empty() || selected.len() == self.accounts.len() {
            return ALL_ACCOUNTS_HEADER.to_string();
        }

        selected
            .iter()
            .map(|a| a.category.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The focused account's balance, or the sum over every account
    pub fn displayed_balance(&self) -> Decimal {
        match self.focused_account() {
            Some(account) => account.balance,
            None => self.total_balance(),
        }
    }

    pub fn view(&self) -> SelectorView {
        SelectorView::derive(self)
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            let selected: Vec<Account> =
                self.accounts.iter().filter(|a| a.selected).cloned().collect();
            info!(selected = selected.len(), "selection changed");
            observer(&selected);
        }
    }
}

impl std::fmt::Debug for AccountSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountSelector")
            .field("accounts", &self.accounts)
            .field("focused", &self.focused)
            .field("is_expanded", &self.is_expanded)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

use super::AccountSelector;
use crate::account::format_currency;
use rust_decimal::Decimal;
use std::fmt;

/// Header text when no account, or every account, is selected
pub const ALL_ACCOUNTS_HEADER: &str = "All Accounts";

/// Label of the synthetic summary row
pub const ALL_ACCOUNTS_ROW_LABEL: &str = "All accounts";

/// Label of the footer action
pub const MANAGE_CONNECTIONS_LABEL: &str = "Add or manage connections";

/// Everything a renderer needs to draw the selector
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorView {
    pub header_label: String,
    pub displayed_balance: Decimal,
    pub is_expanded: bool,
    pub rows: Vec<AccountRow>,
    pub summary: SummaryRow,
    pub footer_label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountRow {
    pub id: String,
    pub category_label: String,
    pub number: String,
    pub balance: Decimal,
    /// Drives the icon colour
    pub selected: bool,
    /// Selected while some other account is not
    pub highlighted: bool,
    pub negative: bool,
}

/// The non-interactive "All accounts" row at the bottom of the list
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub total: Decimal,
    pub highlighted: bool,
}

impl SelectorView {
    pub(super) fn derive(selector: &AccountSelector) -> Self {
        let all_selected = selector.all_selected();

        let rows = selector
            .accounts()
            .iter()
            .map(|account| AccountRow {
                id: account.id.clone(),
                category_label: account.category.label(),
                number: account.number.clone(),
                balance: account.balance,
                selected: account.selected,
                highlighted: account.selected && !all_selected,
                negative: account.is_negative(),
            })
            .collect();

        Self {
            header_label: selector.header_label(),
            displayed_balance: selector.displayed_balance(),
            is_expanded: selector.is_expanded(),
            rows,
            summary: SummaryRow {
                label: ALL_ACCOUNTS_ROW_LABEL,
                total: selector.total_balance(),
                highlighted: all_selected,
            },
            footer_label: MANAGE_CONNECTIONS_LABEL,
        }
    }

    pub fn formatted_balance(&self) -> String {
        format_currency(self.displayed_balance)
    }
}

impl fmt::Display for SelectorView {
    /// Plain-text rendition used by `--dump`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  {}", self.header_label, self.formatted_balance())?;
        for row in &self.rows {
            let mark = if row.selected { "[x]" } else { "[ ]" };
            writeln!(
                f,
                "  {} {} · {}  {}",
                mark,
                row.category_label,
                row.number,
                format_currency(row.balance)
            )?;
        }
        writeln!(
            f,
            "  {}  {}",
            self.summary.label,
            format_currency(self.summary.total)
        )
    }
}

//! Account Selector - a terminal dropdown for viewing financial accounts
//!
//! This library provides the account model, the selector state machine that
//! decides which accounts are selected and which balance is shown, and a
//! ratatui rendering of the selector.

pub mod account;
pub mod selector;
pub mod ui;

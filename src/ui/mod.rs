//! # UI Module
//!
//! Terminal rendering and input handling for the account selector.
//!
//! ## Components
//!
//! - [`App`] - wraps the selector with a row cursor, theme and info modal
//! - [`mod@layout`] - card geometry and mouse hit-testing
//! - [`mod@render`] - draws the selector view with ratatui
//! - [`theme`] / [`config`] - colors and the persisted theme choice
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Checking, Savings      $39,982.00 ⇅ │   header (always shown)
//! └──────────────────────────────────────┘
//! ┌──────────────────────────────────────┐
//! │ ■  Checking · 5501      $32,402.19  │   account rows
//! │ ■  Savings · 2399       $10,000.00  │
//! │ □  Credit · 1767        -$2,420.19  │
//! │ All accounts            $39,982.00  │   summary row
//! │      Add or manage connections       │   footer
//! └──────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod layout;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;

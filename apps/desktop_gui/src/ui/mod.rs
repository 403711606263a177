//! UI layer for desktop GUI: app shell, filter bar, results table and dialogs.

pub mod app;
pub mod dialogs;
pub mod filter_bar;
pub mod table;

pub use app::{DivisionAdminApp, APP_TITLE};

//! Navigation
//!
//! - **route**: The closed set of routes and what showing one does
//! - **navigator**: The router state machine
//! - **menu**: Mobile menu open/close handling
//! - **error**: Error types

mod error;
mod menu;
mod navigator;
mod route;

pub use error::RouterError;
pub use menu::{MenuEvent, MobileMenu};
pub use navigator::{HistoryMode, Router, RouterEvent};
pub use route::{DisplayAction, Route};

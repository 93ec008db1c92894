//! # Expense Client
//!
//! Everything between the expense tracker UI and the remote expense API that
//! does not need a browser: the service trait, its error type, endpoint
//! configuration, the application controller and the form state machine.

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod service;
pub mod state;

#[cfg(test)]
mod test_utils;

pub use config::ApiConfig;
pub use controller::{ExpenseController, StateObserver};
pub use error::ApiError;
pub use form::{ExpenseFormState, FormSubmission};
pub use service::ExpenseService;
pub use state::AppState;

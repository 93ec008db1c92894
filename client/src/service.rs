//! # Expense Service
//!
//! The boundary between the controller and the remote expense API. The
//! browser build implements it over HTTP; tests implement it in memory.

use async_trait::async_trait;
use shared::{Expense, ExpenseFilters, ExpenseId, ExpenseRequest, MutationAck, Summary};

use crate::error::ApiError;

/// Operations offered by the remote expense service.
///
/// Futures are not required to be `Send`: everything runs on the single
/// browser event loop.
#[async_trait(?Send)]
pub trait ExpenseService {
    /// List expenses matching the filters
    async fn list_expenses(&self, filters: &ExpenseFilters) -> Result<Vec<Expense>, ApiError>;

    /// Fetch the aggregated summary for the same filter set
    async fn fetch_summary(&self, filters: &ExpenseFilters) -> Result<Summary, ApiError>;

    /// Persist a new expense
    async fn create_expense(&self, request: &ExpenseRequest) -> Result<MutationAck, ApiError>;

    /// Replace every field of an existing expense
    async fn update_expense(&self, id: ExpenseId, request: &ExpenseRequest) -> Result<MutationAck, ApiError>;

    /// Remove an expense by id
    async fn delete_expense(&self, id: ExpenseId) -> Result<MutationAck, ApiError>;
}

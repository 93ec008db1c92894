//! In-memory expense service used by the controller tests

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{Category, Expense, ExpenseFilters, ExpenseId, ExpenseRequest, MutationAck, Summary};
use tokio::sync::oneshot;

use crate::error::ApiError;
use crate::service::ExpenseService;

pub type ListReply = Result<Vec<Expense>, ApiError>;
pub type SummaryReply = Result<Summary, ApiError>;

/// Every call the controller made, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(ExpenseFilters),
    Summary(ExpenseFilters),
    Create(ExpenseRequest),
    Update(ExpenseId, ExpenseRequest),
    Delete(ExpenseId),
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

pub fn lunch() -> Expense {
    Expense {
        id: 7,
        amount: 20.0,
        date: today(),
        note: "lunch".to_string(),
        category: Category::Food,
    }
}

/// Recording mock. Reads answer from `expenses`, summing them into a summary,
/// unless a failure or a delayed reply has been queued.
#[derive(Default)]
pub struct MockService {
    calls: RefCell<Vec<Call>>,
    expenses: RefCell<Vec<Expense>>,
    read_error: RefCell<Option<ApiError>>,
    mutation_error: RefCell<Option<ApiError>>,
    delayed_lists: RefCell<VecDeque<oneshot::Receiver<ListReply>>>,
    delayed_summaries: RefCell<VecDeque<oneshot::Receiver<SummaryReply>>>,
}

impl MockService {
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            expenses: RefCell::new(expenses),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn fail_reads(&self, error: ApiError) {
        *self.read_error.borrow_mut() = Some(error);
    }

    pub fn fail_mutations(&self, error: ApiError) {
        *self.mutation_error.borrow_mut() = Some(error);
    }

    pub fn recover(&self) {
        self.read_error.borrow_mut().take();
        self.mutation_error.borrow_mut().take();
    }

    /// Answer the next list reads from these channels, in order
    pub fn delay_lists(&self, replies: Vec<oneshot::Receiver<ListReply>>) {
        self.delayed_lists.borrow_mut().extend(replies);
    }

    /// Answer the next summary reads from these channels, in order
    pub fn delay_summaries(&self, replies: Vec<oneshot::Receiver<SummaryReply>>) {
        self.delayed_summaries.borrow_mut().extend(replies);
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn mutation_result(&self) -> Result<(), ApiError> {
        match self.mutation_error.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn read_result(&self) -> Result<(), ApiError> {
        match self.read_error.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl ExpenseService for MockService {
    async fn list_expenses(&self, filters: &ExpenseFilters) -> Result<Vec<Expense>, ApiError> {
        self.record(Call::List(filters.clone()));

        let delayed = self.delayed_lists.borrow_mut().pop_front();
        if let Some(reply) = delayed {
            return reply
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("reply dropped".to_string())));
        }

        self.read_result()?;
        Ok(self.expenses.borrow().clone())
    }

    async fn fetch_summary(&self, filters: &ExpenseFilters) -> Result<Summary, ApiError> {
        self.record(Call::Summary(filters.clone()));

        let delayed = self.delayed_summaries.borrow_mut().pop_front();
        if let Some(reply) = delayed {
            return reply
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("reply dropped".to_string())));
        }

        self.read_result()?;

        let mut summary = Summary::default();
        for expense in self.expenses.borrow().iter() {
            summary.total += expense.amount;
            *summary.by_category.entry(expense.category.to_string()).or_default() += expense.amount;
            *summary
                .by_month
                .entry(expense.date.format("%Y-%m").to_string())
                .or_default() += expense.amount;
        }
        Ok(summary)
    }

    async fn create_expense(&self, request: &ExpenseRequest) -> Result<MutationAck, ApiError> {
        self.record(Call::Create(request.clone()));
        self.mutation_result()?;
        Ok(MutationAck {
            message: "Expense added".to_string(),
            id: Some(100),
        })
    }

    async fn update_expense(&self, id: ExpenseId, request: &ExpenseRequest) -> Result<MutationAck, ApiError> {
        self.record(Call::Update(id, request.clone()));
        self.mutation_result()?;
        Ok(MutationAck {
            message: "Expense updated".to_string(),
            id: None,
        })
    }

    async fn delete_expense(&self, id: ExpenseId) -> Result<MutationAck, ApiError> {
        self.record(Call::Delete(id));
        self.mutation_result()?;
        Ok(MutationAck {
            message: "Expense deleted".to_string(),
            id: None,
        })
    }
}

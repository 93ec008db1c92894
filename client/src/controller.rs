//! # Expense Controller
//!
//! Single owner of the application state. Every read and mutation against the
//! expense service goes through here, and every state change is published to
//! an optional observer so a UI can re-render from a snapshot.
//!
//! Reads of the same kind are tagged with a monotonic sequence number. A
//! response is only applied when it answers the most recently issued read of
//! its kind; anything older is dropped so a slow response cannot overwrite a
//! newer one.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use shared::{Expense, ExpenseFilters, ExpenseId, ExpenseRequest, MutationAck};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::form::FormSubmission;
use crate::service::ExpenseService;
use crate::state::AppState;

/// Callback invoked with a fresh snapshot after every state change
pub type StateObserver = Rc<dyn Fn(&AppState)>;

#[derive(Debug, Default)]
struct RequestSequence(Cell<u64>);

impl RequestSequence {
    fn issue(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

#[derive(Debug, Default)]
struct Sequences {
    list: RequestSequence,
    summary: RequestSequence,
}

pub struct ExpenseController<S> {
    service: Rc<S>,
    state: Rc<RefCell<AppState>>,
    sequences: Rc<Sequences>,
    observer: Option<StateObserver>,
}

impl<S> Clone for ExpenseController<S> {
    fn clone(&self) -> Self {
        Self {
            service: Rc::clone(&self.service),
            state: Rc::clone(&self.state),
            sequences: Rc::clone(&self.sequences),
            observer: self.observer.clone(),
        }
    }
}

/// Marks one service call as in flight for as long as it lives
struct InFlight<'a, S> {
    controller: &'a ExpenseController<S>,
}

impl<'a, S> InFlight<'a, S> {
    fn start(controller: &'a ExpenseController<S>) -> Self {
        controller.update(|state| state.in_flight += 1);
        Self { controller }
    }
}

impl<S> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        self.controller
            .update(|state| state.in_flight = state.in_flight.saturating_sub(1));
    }
}

impl<S> ExpenseController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service: Rc::new(service),
            state: Rc::new(RefCell::new(AppState::default())),
            sequences: Rc::new(Sequences::default()),
            observer: None,
        }
    }

    /// Register the callback that receives state snapshots
    pub fn with_observer(mut self, observer: impl Fn(&AppState) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Load a record into the form. No service call.
    pub fn begin_edit(&self, expense: Expense) {
        debug!(id = expense.id, "Editing expense");
        self.update(|state| state.edit_target = Some(expense));
    }

    pub fn cancel_edit(&self) {
        self.update(|state| state.edit_target = None);
    }

    pub fn dismiss_error(&self) {
        self.update(|state| state.error = None);
    }

    fn update(&self, mutate: impl FnOnce(&mut AppState)) {
        mutate(&mut *self.state.borrow_mut());
        self.notify();
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            let snapshot = self.snapshot();
            observer(&snapshot);
        }
    }

    fn set_error(&self, message: String) {
        self.update(|state| state.error = Some(message));
    }

    fn clear_error(&self) {
        if self.state.borrow().error.is_some() {
            self.update(|state| state.error = None);
        }
    }

    fn current_filters(&self) -> ExpenseFilters {
        self.state.borrow().filters.clone()
    }
}

impl<S: ExpenseService> ExpenseController<S> {
    /// Initial load of list and summary under the current filters
    pub async fn load(&self) {
        self.refresh().await;
    }

    /// Reload list and summary under the current filters
    pub async fn refresh(&self) {
        let filters = self.current_filters();
        self.reload(&filters).await;
    }

    /// Issue both reads together; they may complete in either order
    async fn reload(&self, filters: &ExpenseFilters) {
        let _ = tokio::join!(self.load_expenses(filters), self.load_summary(filters));
    }

    /// Fetch the expense list. On failure the previous list is kept.
    pub async fn load_expenses(&self, filters: &ExpenseFilters) -> Result<(), ApiError> {
        let ticket = self.sequences.list.issue();
        self.clear_error();
        let _in_flight = InFlight::start(self);

        debug!(?filters, ticket, "Fetching expenses");
        let result = self.service.list_expenses(filters).await;

        if !self.sequences.list.is_current(ticket) {
            debug!(ticket, "Discarding stale expense list response");
            return result.map(|_| ());
        }

        match result {
            Ok(expenses) => {
                debug!(count = expenses.len(), "Expenses loaded");
                self.update(|state| state.expenses = Some(expenses));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Failed to fetch expenses");
                self.set_error(format!("Failed to fetch expenses: {}", err));
                Err(err)
            }
        }
    }

    /// Fetch the summary. On failure the previous summary is kept.
    pub async fn load_summary(&self, filters: &ExpenseFilters) -> Result<(), ApiError> {
        let ticket = self.sequences.summary.issue();
        let _in_flight = InFlight::start(self);

        debug!(?filters, ticket, "Fetching summary");
        let result = self.service.fetch_summary(filters).await;

        if !self.sequences.summary.is_current(ticket) {
            debug!(ticket, "Discarding stale summary response");
            return result.map(|_| ());
        }

        match result {
            Ok(summary) => {
                self.update(|state| state.summary = Some(summary));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Failed to fetch summary");
                self.set_error(format!("Failed to fetch summary: {}", err));
                Err(err)
            }
        }
    }

    /// Route a validated form submission to create or update
    pub async fn submit(&self, submission: FormSubmission) -> Result<MutationAck, ApiError> {
        match submission {
            FormSubmission::Create(request) => self.create(request).await,
            FormSubmission::Update { id, request } => self.update_expense(id, request).await,
        }
    }

    /// Persist a new expense, then reload list and summary
    pub async fn create(&self, request: ExpenseRequest) -> Result<MutationAck, ApiError> {
        self.clear_error();
        let _in_flight = InFlight::start(self);

        match self.service.create_expense(&request).await {
            Ok(ack) => {
                info!(id = ?ack.id, "Expense created");
                self.refresh().await;
                Ok(ack)
            }
            Err(err) => {
                warn!(error = %err, "Failed to add expense");
                self.set_error(format!("Failed to add expense: {}", err));
                Err(err)
            }
        }
    }

    /// Replace an expense, leave edit mode, then reload list and summary
    pub async fn update_expense(&self, id: ExpenseId, request: ExpenseRequest) -> Result<MutationAck, ApiError> {
        self.clear_error();
        let _in_flight = InFlight::start(self);

        match self.service.update_expense(id, &request).await {
            Ok(ack) => {
                info!(id, "Expense updated");
                self.cancel_edit();
                self.refresh().await;
                Ok(ack)
            }
            Err(err) => {
                warn!(id, error = %err, "Failed to update expense");
                self.set_error(format!("Failed to update expense: {}", err));
                Err(err)
            }
        }
    }

    /// Remove an expense, then reload list and summary
    pub async fn delete(&self, id: ExpenseId) -> Result<MutationAck, ApiError> {
        self.clear_error();
        let _in_flight = InFlight::start(self);

        match self.service.delete_expense(id).await {
            Ok(ack) => {
                info!(id, "Expense deleted");
                self.refresh().await;
                Ok(ack)
            }
            Err(err) => {
                warn!(id, error = %err, "Failed to delete expense");
                self.set_error(format!("Failed to delete expense: {}", err));
                Err(err)
            }
        }
    }

    /// Replace the active filters and reload under them
    pub async fn apply_filters(&self, filters: ExpenseFilters) {
        debug!(?filters, "Applying filters");
        self.update(|state| state.filters = filters.clone());
        self.reload(&filters).await;
    }

    /// Drop every filter and reload unfiltered
    pub async fn clear_filters(&self) {
        self.update(|state| state.filters = ExpenseFilters::default());
        self.reload(&ExpenseFilters::default()).await;
    }
}

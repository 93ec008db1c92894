use shared::{Expense, ExpenseFilters, ExpenseRow, Summary, SummaryView, ViewState};

/// Everything the UI renders, owned by the controller.
///
/// Replaced piecewise by controller operations; the UI only ever sees
/// snapshots of it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// `None` until the first list response arrives
    pub expenses: Option<Vec<Expense>>,
    /// `None` until the first summary response arrives
    pub summary: Option<Summary>,
    pub filters: ExpenseFilters,
    /// Record currently loaded into the form for editing
    pub edit_target: Option<Expense>,
    /// Banner message from the last failed service call
    pub error: Option<String>,
    /// Number of service calls currently in flight
    pub in_flight: usize,
}

impl AppState {
    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    pub fn expense_rows(&self) -> ViewState<Vec<ExpenseRow>> {
        ExpenseRow::list_view(self.expenses.as_deref())
    }

    pub fn summary_view(&self) -> SummaryView {
        SummaryView::from_summary(self.summary.as_ref())
    }
}

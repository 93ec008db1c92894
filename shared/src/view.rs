//! Render-ready view models for the list and summary panels.
//!
//! Components only walk these structures; every formatting and emptiness
//! decision is made here so it can be tested without a browser.

use std::collections::BTreeMap;

use crate::{Expense, ExpenseId, Summary};

pub const CURRENCY_SYMBOL: &str = "₹";
pub const NO_EXPENSES_YET: &str = "No expenses yet";
pub const NO_EXPENSES_RECORDED: &str = "No expenses recorded";
pub const LOADING_SUMMARY: &str = "Loading summary...";
pub const LOADING_EXPENSES: &str = "Loading expenses...";

/// Format a monetary value with the currency symbol and two decimals
pub fn format_money(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount)
}

/// Explicit three-way state for anything fetched from the service
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Nothing received yet
    Loading,
    /// Received, but there is nothing to show
    Empty,
    Populated(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ViewState::Empty)
    }
}

/// One labelled amount in a summary breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownLine {
    pub label: String,
    pub amount: String,
}

/// Summary panel contents once a summary has arrived
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryPanel {
    pub total: String,
    pub by_category: ViewState<Vec<BreakdownLine>>,
    pub by_month: ViewState<Vec<BreakdownLine>>,
}

/// Summary panel state: a loading placeholder until the first summary lands
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryView {
    Loading,
    Ready(SummaryPanel),
}

impl SummaryView {
    pub fn from_summary(summary: Option<&Summary>) -> Self {
        match summary {
            None => SummaryView::Loading,
            Some(summary) => SummaryView::Ready(SummaryPanel {
                total: format_money(summary.total),
                by_category: breakdown(&summary.by_category),
                by_month: breakdown(&summary.by_month),
            }),
        }
    }

    pub fn total_label(&self) -> String {
        match self {
            SummaryView::Loading => LOADING_SUMMARY.to_string(),
            SummaryView::Ready(panel) => format!("Total Spent: {}", panel.total),
        }
    }
}

fn breakdown(entries: &BTreeMap<String, f64>) -> ViewState<Vec<BreakdownLine>> {
    if entries.is_empty() {
        return ViewState::Empty;
    }

    ViewState::Populated(
        entries
            .iter()
            .map(|(label, amount)| BreakdownLine {
                label: label.clone(),
                amount: format_money(*amount),
            })
            .collect(),
    )
}

/// A single row of the expense list
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    pub amount: String,
    pub note: String,
    /// "<date> - <category>"
    pub details: String,
    /// The record itself, forwarded on Edit
    pub expense: Expense,
}

impl ExpenseRow {
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            id: expense.id,
            amount: format_money(expense.amount),
            note: expense.note.clone(),
            details: format!("{} - {}", expense.date.format("%Y-%m-%d"), expense.category),
            expense: expense.clone(),
        }
    }

    pub fn list_view(expenses: Option<&[Expense]>) -> ViewState<Vec<ExpenseRow>> {
        match expenses {
            None => ViewState::Loading,
            Some([]) => ViewState::Empty,
            Some(expenses) => ViewState::Populated(expenses.iter().map(Self::from_expense).collect()),
        }
    }
}

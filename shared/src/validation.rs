use std::collections::BTreeMap;
use std::fmt;
use chrono::NaiveDate;

use crate::{Category, Expense, ExpenseRequest};

/// Upper bound on note length, counted in characters
pub const MAX_NOTE_LENGTH: usize = 100;

pub const AMOUNT_REQUIRED: &str = "Amount is required";
pub const AMOUNT_NOT_POSITIVE: &str = "Amount must be a positive number";
pub const DATE_REQUIRED: &str = "Date is required";
pub const DATE_INVALID: &str = "Date must be a valid date";
pub const DATE_IN_FUTURE: &str = "Date cannot be in the future";
pub const NOTE_REQUIRED: &str = "Note is required";
pub const NOTE_LENGTH: &str = "Note must be between 1 and 100 characters";

/// Form fields that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Amount,
    Date,
    Note,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Amount => write!(f, "amount"),
            Field::Date => write!(f, "date"),
            Field::Note => write!(f, "note"),
        }
    }
}

/// Per-field validation messages. Empty means the draft is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Drop the error for one field, leaving the others in place
    pub fn clear_field(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// User-entered, not yet validated expense fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseDraft {
    pub amount: String,
    pub date: String,
    pub note: String,
    pub category: Category,
}

impl ExpenseDraft {
    /// Prefill a draft from an existing record for editing
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            amount: expense.amount.to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            note: expense.note.clone(),
            category: expense.category.clone(),
        }
    }

    /// Validate every field against `today` and build the request body.
    ///
    /// All fields are checked; errors are collected rather than returned on
    /// the first failure.
    pub fn validate(&self, today: NaiveDate) -> Result<ExpenseRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let amount = match validate_amount(&self.amount) {
            Ok(amount) => Some(amount),
            Err(message) => {
                errors.insert(Field::Amount, message);
                None
            }
        };

        let date = match validate_date(&self.date, today) {
            Ok(date) => Some(date),
            Err(message) => {
                errors.insert(Field::Date, message);
                None
            }
        };

        if let Err(message) = validate_note(&self.note) {
            errors.insert(Field::Note, message);
        }

        match (amount, date) {
            (Some(amount), Some(date)) if errors.is_empty() => Ok(ExpenseRequest {
                amount,
                date,
                note: self.note.clone(),
                category: self.category.clone(),
            }),
            _ => Err(errors),
        }
    }
}

fn validate_amount(input: &str) -> Result<f64, &'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AMOUNT_REQUIRED);
    }

    match input.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(AMOUNT_NOT_POSITIVE),
    }
}

fn validate_date(input: &str, today: NaiveDate) -> Result<NaiveDate, &'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DATE_REQUIRED);
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| DATE_INVALID)?;
    if date > today {
        return Err(DATE_IN_FUTURE);
    }
    Ok(date)
}

fn validate_note(input: &str) -> Result<(), &'static str> {
    if input.is_empty() {
        return Err(NOTE_REQUIRED);
    }

    let length = input.chars().count();
    if !(1..=MAX_NOTE_LENGTH).contains(&length) {
        return Err(NOTE_LENGTH);
    }
    Ok(())
}

use chrono::NaiveDate;
use shared::{Category, Expense, ExpenseDraft, ExpenseId, ExpenseRequest, Field, FieldErrors};

/// What a successful form submission asks the controller to do
#[derive(Debug, Clone, PartialEq)]
pub enum FormSubmission {
    Create(ExpenseRequest),
    Update { id: ExpenseId, request: ExpenseRequest },
}

/// Draft, edit id and inline errors behind the expense form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseFormState {
    draft: ExpenseDraft,
    editing: Option<ExpenseId>,
    errors: FieldErrors,
}

impl ExpenseFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow the controller's edit target: prefill from it, or reset to an
    /// empty draft when it is cleared. Field errors are always dropped.
    pub fn sync_edit_target(&mut self, target: Option<&Expense>) {
        match target {
            Some(expense) => {
                self.draft = ExpenseDraft::from_expense(expense);
                self.editing = Some(expense.id);
            }
            None => {
                self.draft = ExpenseDraft::default();
                self.editing = None;
            }
        }
        self.errors.clear();
    }

    pub fn draft(&self) -> &ExpenseDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Expense"
        } else {
            "Add Expense"
        }
    }

    pub fn set_amount(&mut self, value: impl Into<String>) {
        self.draft.amount = value.into();
        self.errors.clear_field(Field::Amount);
    }

    pub fn set_date(&mut self, value: impl Into<String>) {
        self.draft.date = value.into();
        self.errors.clear_field(Field::Date);
    }

    pub fn set_note(&mut self, value: impl Into<String>) {
        self.draft.note = value.into();
        self.errors.clear_field(Field::Note);
    }

    pub fn set_category(&mut self, category: Category) {
        self.draft.category = category;
    }

    /// Validate the draft and decide between create and update.
    ///
    /// Returns `None` and records field errors when the draft is invalid.
    /// A create resets the draft; an update keeps it until the controller
    /// clears the edit target.
    pub fn submit(&mut self, today: NaiveDate) -> Option<FormSubmission> {
        match self.draft.validate(today) {
            Err(errors) => {
                self.errors = errors;
                None
            }
            Ok(request) => {
                self.errors.clear();
                match self.editing {
                    Some(id) => Some(FormSubmission::Update { id, request }),
                    None => {
                        self.draft = ExpenseDraft::default();
                        Some(FormSubmission::Create(request))
                    }
                }
            }
        }
    }

    /// Abandon an edit and return to an empty draft
    pub fn cancel(&mut self) {
        self.sync_edit_target(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::validation::{AMOUNT_NOT_POSITIVE, DATE_IN_FUTURE, NOTE_REQUIRED};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn lunch() -> Expense {
        Expense {
            id: 7,
            amount: 20.0,
            date: today(),
            note: "lunch".to_string(),
            category: Category::Food,
        }
    }

    #[test]
    fn test_new_form_is_empty_add_form() {
        let form = ExpenseFormState::new();
        assert!(!form.is_editing());
        assert_eq!(form.submit_label(), "Add Expense");
        assert_eq!(form.draft().category, Category::General);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_submit_create_resets_draft() {
        let mut form = ExpenseFormState::new();
        form.set_amount("12.5");
        form.set_date("2023-12-31");
        form.set_note("groceries");
        form.set_category(Category::Food);

        let submission = form.submit(today()).unwrap();
        match submission {
            FormSubmission::Create(request) => {
                assert_eq!(request.amount, 12.5);
                assert_eq!(request.category, Category::Food);
            }
            other => panic!("expected create, got {:?}", other),
        }
        assert_eq!(form.draft(), &ExpenseDraft::default());
    }

    #[test]
    fn test_submit_future_date_is_rejected() {
        let mut form = ExpenseFormState::new();
        form.set_amount("50");
        form.set_date("2099-01-01");
        form.set_note("trip");
        form.set_category(Category::Travel);

        assert_eq!(form.submit(today()), None);
        assert_eq!(form.errors().get(Field::Date), Some(DATE_IN_FUTURE));
        // Draft is kept so the user can fix it
        assert_eq!(form.draft().note, "trip");
    }

    #[test]
    fn test_editing_a_field_clears_only_its_error() {
        let mut form = ExpenseFormState::new();
        form.set_amount("-1");
        assert_eq!(form.submit(today()), None);
        assert_eq!(form.errors().get(Field::Amount), Some(AMOUNT_NOT_POSITIVE));
        assert_eq!(form.errors().get(Field::Note), Some(NOTE_REQUIRED));

        form.set_amount("5");
        assert!(!form.errors().contains(Field::Amount));
        assert!(form.errors().contains(Field::Date));
        assert!(form.errors().contains(Field::Note));
    }

    #[test]
    fn test_edit_target_prefills_and_routes_to_update() {
        let mut form = ExpenseFormState::new();
        form.sync_edit_target(Some(&lunch()));

        assert!(form.is_editing());
        assert_eq!(form.submit_label(), "Update Expense");
        assert_eq!(form.draft().amount, "20");

        form.set_amount("25");
        let submission = form.submit(today()).unwrap();
        assert_eq!(
            submission,
            FormSubmission::Update {
                id: 7,
                request: ExpenseRequest {
                    amount: 25.0,
                    date: today(),
                    note: "lunch".to_string(),
                    category: Category::Food,
                },
            }
        );
        // Left for the controller's cancel_edit to clear
        assert_eq!(form.draft().amount, "25");
    }

    #[test]
    fn test_edit_keeps_custom_category() {
        let groceries = Expense {
            category: Category::Custom("Groceries".to_string()),
            ..lunch()
        };

        let mut form = ExpenseFormState::new();
        form.sync_edit_target(Some(&groceries));
        form.set_amount("15");

        match form.submit(today()) {
            Some(FormSubmission::Update { id, request }) => {
                assert_eq!(id, 7);
                assert_eq!(request.amount, 15.0);
                assert_eq!(request.category, Category::Custom("Groceries".to_string()));
            }
            other => panic!("expected an update, got {:?}", other),
        }
    }

    #[test]
    fn test_sync_clears_errors_and_cancel_resets() {
        let mut form = ExpenseFormState::new();
        assert_eq!(form.submit(today()), None);
        assert!(!form.errors().is_empty());

        form.sync_edit_target(Some(&lunch()));
        assert!(form.errors().is_empty());

        form.cancel();
        assert!(!form.is_editing());
        assert_eq!(form.draft(), &ExpenseDraft::default());
    }
}

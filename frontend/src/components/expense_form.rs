use std::rc::Rc;

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use expense_client::{ExpenseFormState, FormSubmission};
use shared::{Category, Expense, Field};
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    /// Record being edited, if any
    pub edit_target: Option<Expense>,
    pub on_submit: Callback<FormSubmission>,
    pub on_cancel: Callback<()>,
}

/// Reducer wrapper so rapid input events never work from a stale draft
#[derive(Clone, PartialEq, Default)]
struct FormModel(ExpenseFormState);

enum FormAction {
    Amount(String),
    Date(String),
    Note(String),
    Category(Category),
    SyncEditTarget(Option<Expense>),
    Replace(ExpenseFormState),
    Cancel,
}

impl Reducible for FormModel {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            FormAction::Amount(value) => form.set_amount(value),
            FormAction::Date(value) => form.set_date(value),
            FormAction::Note(value) => form.set_note(value),
            FormAction::Category(category) => form.set_category(category),
            FormAction::SyncEditTarget(target) => form.sync_edit_target(target.as_ref()),
            FormAction::Replace(next) => form = next,
            FormAction::Cancel => form.cancel(),
        }
        Rc::new(FormModel(form))
    }
}

fn field_error(form: &ExpenseFormState, field: Field) -> Html {
    match form.errors().get(field) {
        Some(message) => html! { <div class="error">{message}</div> },
        None => html! {},
    }
}

fn input_class(form: &ExpenseFormState, field: Field) -> &'static str {
    if form.errors().contains(field) {
        "input-error"
    } else {
        ""
    }
}

/// The fixed categories, plus the edited record's own label when it is not one of them
fn category_options(current: &Category) -> Vec<Category> {
    let mut options = Category::ALL.to_vec();
    if current.is_custom() {
        options.push(current.clone());
    }
    options
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let model = use_reducer(FormModel::default);

    {
        let model = model.clone();
        use_effect_with(props.edit_target.clone(), move |target| {
            model.dispatch(FormAction::SyncEditTarget(target.clone()));
            || ()
        });
    }

    let on_amount_input = {
        let model = model.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            model.dispatch(FormAction::Amount(input.value()));
        })
    };

    let on_date_input = {
        let model = model.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            model.dispatch(FormAction::Date(input.value()));
        })
    };

    let on_note_input = {
        let model = model.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            model.dispatch(FormAction::Note(input.value()));
        })
    };

    let on_category_change = {
        let model = model.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            model.dispatch(FormAction::Category(Category::from_label(select.value())));
        })
    };

    let on_submit = {
        let model = model.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut form = model.0.clone();
            let submission = form.submit(date_utils::today());
            model.dispatch(FormAction::Replace(form));

            if let Some(submission) = submission {
                on_submit.emit(submission);
            }
        })
    };

    let on_cancel = {
        let model = model.clone();
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            model.dispatch(FormAction::Cancel);
            on_cancel.emit(());
        })
    };

    let form = &model.0;
    let draft = form.draft();

    html! {
        <form onsubmit={on_submit} class="expense-form">
            <div>
                <input
                    type="number"
                    step="0.01"
                    placeholder="Amount"
                    value={draft.amount.clone()}
                    oninput={on_amount_input}
                    class={input_class(form, Field::Amount)}
                />
                {field_error(form, Field::Amount)}
            </div>
            <div>
                <input
                    type="date"
                    max={date_utils::today_string()}
                    value={draft.date.clone()}
                    oninput={on_date_input}
                    class={input_class(form, Field::Date)}
                />
                {field_error(form, Field::Date)}
            </div>
            <div>
                <input
                    type="text"
                    placeholder="Note"
                    value={draft.note.clone()}
                    oninput={on_note_input}
                    class={input_class(form, Field::Note)}
                />
                {field_error(form, Field::Note)}
            </div>
            <div>
                <select onchange={on_category_change} class="select-category">
                    {for category_options(&draft.category).iter().map(|category| html! {
                        <option
                            value={category.to_string()}
                            selected={*category == draft.category}
                        >
                            {category.to_string()}
                        </option>
                    })}
                </select>
            </div>
            <button type="submit" class="btn-primary">{form.submit_label()}</button>
            if form.is_editing() {
                <button type="button" onclick={on_cancel} class="btn-secondary">{"Cancel"}</button>
            }
        </form>
    }
}

use yew::prelude::*;
use shared::view::{LOADING_EXPENSES, NO_EXPENSES_RECORDED};
use shared::{Expense, ExpenseId, ExpenseRow, ViewState};

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub rows: ViewState<Vec<ExpenseRow>>,
    pub on_delete: Callback<ExpenseId>,
    pub on_edit: Callback<Expense>,
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    let body = match &props.rows {
        ViewState::Loading => html! { <p class="placeholder">{LOADING_EXPENSES}</p> },
        ViewState::Empty => html! { <p class="placeholder">{NO_EXPENSES_RECORDED}</p> },
        ViewState::Populated(rows) => html! {
            <ul class="expense-list">
                {for rows.iter().map(|row| render_row(row, &props.on_edit, &props.on_delete))}
            </ul>
        },
    };

    html! {
        <section class="expenses-section">
            <h3>{"Expenses"}</h3>
            {body}
        </section>
    }
}

fn render_row(row: &ExpenseRow, on_edit: &Callback<Expense>, on_delete: &Callback<ExpenseId>) -> Html {
    let edit_click = {
        let on_edit = on_edit.clone();
        let expense = row.expense.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(expense.clone()))
    };

    let delete_click = {
        let on_delete = on_delete.clone();
        let id = row.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    html! {
        <li key={row.id} class="expense-row">
            <div class="expense-info">
                <strong>{&row.amount}</strong>
                {" - "}
                {&row.note}
                <br />
                <small>{&row.details}</small>
            </div>
            <div class="expense-actions">
                <button onclick={edit_click} class="btn-secondary">{"Edit"}</button>
                <button onclick={delete_click} class="btn-danger">{"Delete"}</button>
            </div>
        </li>
    }
}

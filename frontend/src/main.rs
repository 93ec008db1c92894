use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{ErrorBanner, ExpenseForm, ExpenseList, FilterBar, SummaryReport};
use hooks::use_expenses::use_expenses;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let expenses = use_expenses(&api_client);
    let state = &expenses.state;
    let actions = &expenses.actions;

    html! {
        <div class="app">
            <h2>{"Personal Expense Tracker"}</h2>

            <ErrorBanner
                message={state.error.clone()}
                on_dismiss={actions.dismiss_error.clone()}
            />

            <ExpenseForm
                edit_target={state.edit_target.clone()}
                on_submit={actions.submit.clone()}
                on_cancel={actions.cancel_edit.clone()}
            />

            <FilterBar
                filters={state.filters.clone()}
                loading={state.loading()}
                on_apply={actions.apply_filters.clone()}
                on_clear={actions.clear_filters.clone()}
                on_refresh={actions.refresh.clone()}
            />

            if state.loading() {
                <p class="loading">{"Loading..."}</p>
            }

            <ExpenseList
                rows={state.expense_rows()}
                on_delete={actions.delete.clone()}
                on_edit={actions.begin_edit.clone()}
            />

            <SummaryReport view={state.summary_view()} />
        </div>
    }
}

fn main() {
    if let Err(e) = services::logging::init() {
        gloo::console::error!(format!("Failed to initialise logging: {}", e));
    }

    tracing::info!("Starting expense tracker frontend");
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;
use expense_client::{AppState, ExpenseController, FormSubmission};
use shared::{Expense, ExpenseFilters, ExpenseId};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;

type Controller = ExpenseController<ApiClient>;

pub struct UseExpensesResult {
    pub state: AppState,
    pub actions: UseExpensesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseExpensesActions {
    pub refresh: Callback<()>,
    pub submit: Callback<FormSubmission>,
    pub delete: Callback<ExpenseId>,
    pub begin_edit: Callback<Expense>,
    pub cancel_edit: Callback<()>,
    pub apply_filters: Callback<ExpenseFilters>,
    pub clear_filters: Callback<()>,
    pub dismiss_error: Callback<()>,
}

#[hook]
pub fn use_expenses(api_client: &ApiClient) -> UseExpensesResult {
    let state = use_state(AppState::default);

    // One controller for the lifetime of the component; every state change
    // it makes is mirrored into `state` to trigger a re-render.
    let controller = {
        let api_client = api_client.clone();
        let state = state.clone();
        use_memo((), move |_| {
            ExpenseController::new(api_client)
                .with_observer(move |snapshot: &AppState| state.set(snapshot.clone()))
        })
    };

    {
        let controller = (*controller).clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                controller.load().await;
            });
            || ()
        });
    }

    let refresh = {
        let controller = controller.clone();
        use_callback((), move |_: (), _| {
            let controller: Controller = (*controller).clone();
            spawn_local(async move {
                controller.refresh().await;
            });
        })
    };

    let submit = {
        let controller = controller.clone();
        use_callback((), move |submission: FormSubmission, _| {
            let controller: Controller = (*controller).clone();
            spawn_local(async move {
                // Failures land in the error banner through the observer
                let _ = controller.submit(submission).await;
            });
        })
    };

    let delete = {
        let controller = controller.clone();
        use_callback((), move |id: ExpenseId, _| {
            let controller: Controller = (*controller).clone();
            spawn_local(async move {
                let _ = controller.delete(id).await;
            });
        })
    };

    let begin_edit = {
        let controller = controller.clone();
        use_callback((), move |expense: Expense, _| {
            controller.begin_edit(expense);
        })
    };

    let cancel_edit = {
        let controller = controller.clone();
        use_callback((), move |_: (), _| {
            controller.cancel_edit();
        })
    };

    let apply_filters = {
        let controller = controller.clone();
        use_callback((), move |filters: ExpenseFilters, _| {
            let controller: Controller = (*controller).clone();
            spawn_local(async move {
                controller.apply_filters(filters).await;
            });
        })
    };

    let clear_filters = {
        let controller = controller.clone();
        use_callback((), move |_: (), _| {
            let controller: Controller = (*controller).clone();
            spawn_local(async move {
                controller.clear_filters().await;
            });
        })
    };

    let dismiss_error = {
        let controller = controller.clone();
        use_callback((), move |_: (), _| {
            controller.dismiss_error();
        })
    };

    UseExpensesResult {
        state: (*state).clone(),
        actions: UseExpensesActions {
            refresh,
            submit,
            delete,
            begin_edit,
            cancel_edit,
            apply_filters,
            clear_filters,
            dismiss_error,
        },
    }
}

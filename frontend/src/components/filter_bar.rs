use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::ExpenseFilters;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    /// Filters currently applied by the controller
    pub filters: ExpenseFilters,
    pub loading: bool,
    pub on_apply: Callback<ExpenseFilters>,
    pub on_clear: Callback<()>,
    pub on_refresh: Callback<()>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    // Pending edits; only handed to the controller on Apply
    let start_date = use_state(String::new);
    let end_date = use_state(String::new);
    let category = use_state(String::new);

    let on_start_input = {
        let start_date = start_date.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            start_date.set(input.value());
        })
    };

    let on_end_input = {
        let end_date = end_date.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            end_date.set(input.value());
        })
    };

    let on_category_input = {
        let category = category.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            category.set(input.value());
        })
    };

    let on_apply = {
        let on_apply = props.on_apply.clone();
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        let category = category.clone();
        Callback::from(move |_: MouseEvent| {
            let filters = ExpenseFilters::default()
                .with_start_date((*start_date).clone())
                .with_end_date((*end_date).clone())
                .with_category((*category).clone());
            on_apply.emit(filters);
        })
    };

    let on_clear = {
        let on_clear = props.on_clear.clone();
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        let category = category.clone();
        Callback::from(move |_: MouseEvent| {
            start_date.set(String::new());
            end_date.set(String::new());
            category.set(String::new());
            on_clear.emit(());
        })
    };

    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    html! {
        <section class="filter-bar">
            <h3>{"Filters"}</h3>
            <div class="filter-inputs">
                <input type="date" value={(*start_date).clone()} oninput={on_start_input} />
                <input type="date" value={(*end_date).clone()} oninput={on_end_input} />
                <input
                    type="text"
                    placeholder="Category"
                    value={(*category).clone()}
                    oninput={on_category_input}
                />
            </div>
            <div class="filter-actions">
                <button onclick={on_apply} disabled={props.loading} class="btn-primary">{"Apply Filters"}</button>
                <button onclick={on_clear} disabled={props.loading} class="btn-secondary">{"Clear Filters"}</button>
                <button onclick={on_refresh} disabled={props.loading} class="btn-secondary">{"Refresh"}</button>
            </div>
            if let Some(applied) = props.filters.describe() {
                <p class="applied-filters">{format!("Applied Filters: {}", applied)}</p>
            }
        </section>
    }
}

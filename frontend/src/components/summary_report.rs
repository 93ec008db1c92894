use yew::prelude::*;
use shared::view::{LOADING_SUMMARY, NO_EXPENSES_YET};
use shared::{BreakdownLine, SummaryView, ViewState};

#[derive(Properties, PartialEq)]
pub struct SummaryReportProps {
    pub view: SummaryView,
}

#[function_component(SummaryReport)]
pub fn summary_report(props: &SummaryReportProps) -> Html {
    let panel = match &props.view {
        SummaryView::Loading => html! {},
        SummaryView::Ready(panel) => html! {
            <>
                <h4>{"By Category:"}</h4>
                {breakdown(&panel.by_category)}
                <h4>{"By Month:"}</h4>
                {breakdown(&panel.by_month)}
            </>
        },
    };

    html! {
        <section class="summary-section">
            <h3>{props.view.total_label()}</h3>
            {panel}
        </section>
    }
}

fn breakdown(lines: &ViewState<Vec<BreakdownLine>>) -> Html {
    match lines {
        ViewState::Populated(lines) => html! {
            <ul class="breakdown">
                {for lines.iter().map(|line| html! {
                    <li key={line.label.clone()}>{format!("{}: {}", line.label, line.amount)}</li>
                })}
            </ul>
        },
        ViewState::Empty => html! { <p class="placeholder">{NO_EXPENSES_YET}</p> },
        ViewState::Loading => html! { <p class="placeholder">{LOADING_SUMMARY}</p> },
    }
}

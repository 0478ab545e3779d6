use leptos::prelude::*;

/// Non-blocking notice shown above the chart when the latest refresh
/// failed. The previous chart stays visible underneath.
#[component]
pub fn ChartNotice(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="chart-notice" role="status">
            <span class="status-text status-error">{message}</span>
            <span class="chart-notice-hint">"Roll again to retry."</span>
        </div>
    }
}

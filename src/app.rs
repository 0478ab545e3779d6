use leptos::prelude::*;

use crate::config::AppConfig;
use crate::pages::area_chart_page::AreaChartPage;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    view! {
        <div class="app-layout">
            <main class="content">
                <AreaChartPage config=config />
            </main>
        </div>
    }
}

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use tracing::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;

use crate::chart::ChartRenderer;
use crate::components::area_chart::AreaChart;
use crate::components::chart_notice::ChartNotice;
use crate::components::roll_dice::RollDiceButton;
use crate::config::AppConfig;
use crate::format::ChronoDateFormatter;
use crate::source::{fetch_validated, RandomWalkSource};
use crate::state::{ChartState, RefreshOutcome};

#[component]
pub fn AreaChartPage(config: AppConfig) -> impl IntoView {
    let state = RwSignal::new(ChartState::new());
    let refresh_counter = Memo::new(move |_| state.with(|s| s.refresh_counter()));
    let chart_data = Memo::new(move |_| state.with(|s| (s.loading(), s.samples().to_vec())));
    let error = Memo::new(move |_| state.with(|s| s.error().map(|e| e.to_string())));

    let source = RandomWalkSource::new(config.generator);
    let latency_ms = config.refresh.simulated_latency_ms;

    // Refresh on mount and whenever the counter moves
    Effect::new(move |_| {
        let counter = refresh_counter.get();
        let Some(ticket) = state.try_update(|s| s.begin_refresh()) else {
            return;
        };
        debug!("Refresh #{} started (roll {})", ticket.seq(), counter);

        let source = source.clone();
        spawn_local(async move {
            if latency_ms > 0 {
                TimeoutFuture::new(latency_ms).await;
            }
            let result = fetch_validated(&source, source.config()).await;
            if let Err(e) = &result {
                warn!("Refresh #{} failed: {}", ticket.seq(), e);
            }

            match state.try_update(|s| s.complete(ticket, result)) {
                Some(RefreshOutcome::Applied) => info!("Refresh #{} applied", ticket.seq()),
                Some(RefreshOutcome::Superseded) => {
                    debug!("Refresh #{} superseded by a newer one", ticket.seq())
                }
                Some(RefreshOutcome::Failed) => debug!("Refresh #{} kept previous series", ticket.seq()),
                None => debug!("Refresh #{} finished after the chart was unmounted", ticket.seq()),
            }
        });
    });

    let on_roll = Callback::new(move |_| state.update(|s| s.roll()));

    let renderer = config.renderer();
    let currency = config.axis.currency();
    let appearance = config.appearance.clone();
    let placeholder_style = format!("height: {}px;", appearance.height);

    view! {
        <div class="page chart-page">
            {move || error.get().map(|message| view! { <ChartNotice message=message /> })}

            {move || {
                let (loading, samples) = chart_data.get();
                if loading || samples.is_empty() {
                    view! { <div class="chart-placeholder" style=placeholder_style.clone()></div> }.into_any()
                } else {
                    let layout = renderer.render(&samples, &ChronoDateFormatter, &currency);
                    view! {
                        <AreaChart
                            layout=layout
                            samples=samples
                            currency=currency.clone()
                            appearance=appearance.clone()
                        />
                    }
                    .into_any()
                }
            }}

            <div class="roll-dice-container">
                <RollDiceButton on_roll=on_roll />
            </div>
        </div>
    }
}

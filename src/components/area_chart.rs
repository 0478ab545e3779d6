//! SVG area chart.
//!
//! Draws a `ChartLayout` and reports which point the pointer is over. The
//! tooltip is only mounted while a point is active.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::chart::ChartLayout;
use crate::components::chart_tooltip::{tooltip_lines, ChartTooltip};
use crate::config::AppearanceConfig;
use crate::format::{ChronoDateFormatter, CurrencyFormat};
use crate::sample::Sample;

const GRADIENT_ID: &str = "area-chart-fill";
const TICK_LENGTH: f64 = 6.0;

fn num(v: f64) -> String {
    format!("{:.2}", v)
}

#[component]
pub fn AreaChart(
    layout: ChartLayout,
    samples: Vec<Sample>,
    currency: CurrencyFormat,
    appearance: AppearanceConfig,
) -> impl IntoView {
    let (hovered, set_hovered) = signal::<Option<usize>>(None);

    let width = layout.viewport.width;
    let height = layout.viewport.height;
    let plot = layout.plot;
    let stroke = appearance.stroke_color.clone();

    // Pointer position in view-box units, hit-tested against the points.
    let hit_layout = layout.clone();
    let on_move = move |ev: leptos::ev::MouseEvent| {
        let Some(el) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        if rect.width() <= 0.0 {
            return;
        }
        let x = (ev.client_x() as f64 - rect.left()) * width / rect.width();
        set_hovered.set(hit_layout.nearest_index(x));
    };

    let y_ticks = layout
        .y_ticks
        .iter()
        .map(|tick| {
            view! {
                <g class="y-tick">
                    <line x1=num(plot.x - TICK_LENGTH) y1=num(tick.y) x2=num(plot.x) y2=num(tick.y) stroke="currentColor" />
                    <text x=num(plot.x - TICK_LENGTH - 4.0) y=num(tick.y) dy="0.32em" text-anchor="end">
                        {tick.label.clone()}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    let x_ticks = layout
        .x_ticks
        .iter()
        .map(|tick| {
            let label = (!tick.label.is_empty()).then(|| {
                view! {
                    <text x=num(tick.x) y=num(plot.bottom() + TICK_LENGTH + 4.0) dy="0.71em" text-anchor="middle">
                        {tick.label.clone()}
                    </text>
                }
            });
            view! {
                <g class="x-tick">
                    <line x1=num(tick.x) y1=num(plot.bottom()) x2=num(tick.x) y2=num(plot.bottom() + TICK_LENGTH) stroke="currentColor" />
                    {label}
                </g>
            }
        })
        .collect::<Vec<_>>();

    let dots = layout
        .points
        .iter()
        .map(|p| {
            view! { <circle class="dot" cx=num(p.x) cy=num(p.y) r="3" fill="#fff" stroke=stroke.clone() stroke-width="1.5" /> }
        })
        .collect::<Vec<_>>();

    let marker_points = layout.points.clone();
    let marker_stroke = stroke.clone();
    let active_marker = move || {
        hovered
            .get()
            .and_then(|i| marker_points.get(i).copied())
            .map(|p| {
                view! {
                    <line class="cursor" x1=num(p.x) y1=num(plot.y) x2=num(p.x) y2=num(plot.bottom()) stroke="#999" stroke-dasharray="3 3" />
                    <circle class="active-dot" cx=num(p.x) cy=num(p.y) r="5" fill=marker_stroke.clone() stroke="#fff" stroke-width="2" />
                }
            })
    };

    let tooltip_points = layout.points.clone();
    let tooltip = move || {
        let index = hovered.get()?;
        let sample = samples.get(index)?;
        let point = tooltip_points.get(index)?;
        let (date_label, value_label) = tooltip_lines(sample, &ChronoDateFormatter, &currency);
        Some(view! {
            <ChartTooltip
                date_label=date_label
                value_label=value_label
                left_percent={point.x / width * 100.0}
                top_percent={point.y / height * 100.0}
            />
        })
    };

    view! {
        <div class="chart-frame">
            <svg
                class="area-chart"
                width="100%"
                viewBox=format!("0 0 {} {}", width, height)
                on:mousemove=on_move
                on:mouseleave=move |_| set_hovered.set(None)
            >
                <defs>
                    <linearGradient id=GRADIENT_ID x1="0" y1="0" x2="0" y2="1">
                        <stop offset="25%" stop-color=stroke.clone() stop-opacity=appearance.gradient_top_opacity.to_string() />
                        <stop offset="95%" stop-color=stroke.clone() stop-opacity=appearance.gradient_bottom_opacity.to_string() />
                    </linearGradient>
                </defs>

                <g class="axis y-axis">
                    <line x1=num(plot.x) y1=num(plot.y) x2=num(plot.x) y2=num(plot.bottom()) stroke="currentColor" />
                    {y_ticks}
                </g>
                <g class="axis x-axis">
                    <line x1=num(plot.x) y1=num(plot.bottom()) x2=num(plot.right()) y2=num(plot.bottom()) stroke="currentColor" />
                    {x_ticks}
                </g>

                <path class="area" d=layout.area_path.clone() fill=format!("url(#{})", GRADIENT_ID) stroke="none" />
                <path class="line" d=layout.line_path.clone() fill="none" stroke=stroke.clone() stroke-width="2" />
                {dots}
                {active_marker}
            </svg>
            {tooltip}
        </div>
    }
}

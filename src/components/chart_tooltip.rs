use leptos::prelude::*;

use crate::format::{CurrencyFormat, DateFormatter};
use crate::sample::Sample;

/// Tooltip text for one sample: full date, then value with currency suffix.
pub fn tooltip_lines(sample: &Sample, dates: &dyn DateFormatter, currency: &CurrencyFormat) -> (String, String) {
    (dates.tooltip_label(sample.date), currency.tooltip_value(sample.value))
}

/// Floating box next to the hovered point. Position is given as a
/// percentage of the chart frame so it follows the SVG when it scales.
#[component]
pub fn ChartTooltip(
    /// Headline, e.g. "Friday, 15 Mar, 2024"
    #[prop(into)]
    date_label: String,
    /// Value line, e.g. "1234.50 BHD"
    #[prop(into)]
    value_label: String,
    left_percent: f64,
    top_percent: f64,
) -> impl IntoView {
    let style = format!("left: {:.2}%; top: {:.2}%;", left_percent, top_percent);

    view! {
        <div class="tooltip" style=style>
            <h4>{date_label}</h4>
            <p>{value_label}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ChronoDateFormatter;
    use chrono::NaiveDate;

    #[test]
    fn test_tooltip_lines() {
        let sample = Sample::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 1234.5);
        let (date, value) = tooltip_lines(&sample, &ChronoDateFormatter, &CurrencyFormat::default());
        assert_eq!(date, "Friday, 15 Mar, 2024");
        assert_eq!(value, "1234.50 BHD");
    }
}

use chrono::{Datelike, Days, NaiveDate};

/// Calendar arithmetic and human-readable date labels.
pub trait DateFormatter {
    /// `date` shifted back by `days` calendar days.
    ///
    /// Shifts past the start of the supported calendar saturate at
    /// `NaiveDate::MIN`; configs cap the series length at
    /// [`MAX_DAYS`](crate::generator::MAX_DAYS) so generated dates never get there.
    fn days_before(&self, date: NaiveDate, days: u64) -> NaiveDate;

    /// Label under an X-axis tick. Empty when the tick is thinned out.
    fn axis_label(&self, date: NaiveDate) -> String;

    /// Full date shown in the tooltip.
    fn tooltip_label(&self, date: NaiveDate) -> String;
}

/// `DateFormatter` backed by chrono's strftime formatting.
///
/// Axis labels read `Mar, 14` and are only produced for even days of the
/// month; tooltip labels read `Friday, 15 Mar, 2024`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChronoDateFormatter;

impl DateFormatter for ChronoDateFormatter {
    fn days_before(&self, date: NaiveDate, days: u64) -> NaiveDate {
        date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
    }

    fn axis_label(&self, date: NaiveDate) -> String {
        if date.day() % 2 == 0 {
            date.format("%b, %-d").to_string()
        } else {
            String::new()
        }
    }

    fn tooltip_label(&self, date: NaiveDate) -> String {
        date.format("%A, %-d %b, %Y").to_string()
    }
}

/// Money formatting for the Y axis and the tooltip. Display only, no
/// conversion happens.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormat {
    pub prefix: String,
    pub suffix: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            prefix: "$".to_string(),
            suffix: "BHD".to_string(),
        }
    }
}

impl CurrencyFormat {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// `$1500.00`
    pub fn axis_tick(&self, value: f64) -> String {
        format!("{}{:.2}", self.prefix, value)
    }

    /// `1234.50 BHD`
    pub fn tooltip_value(&self, value: f64) -> String {
        if self.suffix.is_empty() {
            format!("{:.2}", value)
        } else {
            format!("{:.2} {}", value, self.suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_axis_label_only_on_even_days() {
        let f = ChronoDateFormatter;
        assert_eq!(f.axis_label(day(2024, 3, 14)), "Mar, 14");
        assert_eq!(f.axis_label(day(2024, 3, 15)), "");
        assert_eq!(f.axis_label(day(2024, 2, 2)), "Feb, 2");
        assert_eq!(f.axis_label(day(2024, 12, 31)), "");
    }

    #[test]
    fn test_tooltip_label() {
        let f = ChronoDateFormatter;
        assert_eq!(f.tooltip_label(day(2024, 3, 15)), "Friday, 15 Mar, 2024");
        assert_eq!(f.tooltip_label(day(2024, 2, 4)), "Sunday, 4 Feb, 2024");
    }

    #[test]
    fn test_labels_are_stable() {
        let f = ChronoDateFormatter;
        let d = day(2024, 3, 14);
        assert_eq!(f.axis_label(d), f.axis_label(d));
        assert_eq!(f.tooltip_label(d), f.tooltip_label(d));
    }

    #[test]
    fn test_days_before() {
        let f = ChronoDateFormatter;
        assert_eq!(f.days_before(day(2024, 3, 15), 0), day(2024, 3, 15));
        assert_eq!(f.days_before(day(2024, 3, 15), 30), day(2024, 2, 14));
        assert_eq!(f.days_before(day(2024, 3, 1), 1), day(2024, 2, 29));
        assert_eq!(f.days_before(day(2023, 3, 1), 1), day(2023, 2, 28));
    }

    #[test]
    fn test_days_before_saturates_at_calendar_start() {
        let f = ChronoDateFormatter;
        assert_eq!(f.days_before(day(2024, 3, 15), u64::MAX), NaiveDate::MIN);
        assert_eq!(f.days_before(NaiveDate::MIN, 1), NaiveDate::MIN);
    }

    #[test]
    fn test_currency_format() {
        let c = CurrencyFormat::default();
        assert_eq!(c.axis_tick(1500.0), "$1500.00");
        assert_eq!(c.axis_tick(0.0), "$0.00");
        assert_eq!(c.tooltip_value(1234.5), "1234.50 BHD");
        assert_eq!(c.tooltip_value(9999.999), "10000.00 BHD");

        let bare = CurrencyFormat::new("€", "");
        assert_eq!(bare.axis_tick(12.346), "€12.35");
        assert_eq!(bare.tooltip_value(7.0), "7.00");
    }
}

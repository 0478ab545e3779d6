use std::fmt::Write;

use super::curve::{monotone_path, Point};
use super::ticks::value_ticks;
use crate::format::{CurrencyFormat, DateFormatter};
use crate::sample::Sample;

/// Hover reach around a lone point, in view-box units.
const SINGLE_POINT_REACH: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Size of the SVG view box. The element itself scales to its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margin: Margin {
                top: 16.0,
                right: 24.0,
                bottom: 32.0,
                left: 80.0,
            },
        }
    }
}

impl Viewport {
    pub fn with_height(height: f64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    /// Area left for the plot once the margins are taken off.
    pub fn plot(&self) -> Rect {
        Rect {
            x: self.margin.left,
            y: self.margin.top,
            width: (self.width - self.margin.left - self.margin.right).max(0.0),
            height: (self.height - self.margin.top - self.margin.bottom).max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct XTick {
    pub x: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YTick {
    pub y: f64,
    pub value: f64,
    pub label: String,
}

/// Everything needed to draw the area chart, in view-box coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub plot: Rect,
    pub points: Vec<Point>,
    pub line_path: String,
    pub area_path: String,
    pub x_ticks: Vec<XTick>,
    pub y_ticks: Vec<YTick>,
}

impl ChartLayout {
    pub fn compute(
        samples: &[Sample],
        viewport: Viewport,
        y_tick_count: usize,
        dates: &dyn DateFormatter,
        currency: &CurrencyFormat,
    ) -> Self {
        let plot = viewport.plot();
        let max_value = samples.iter().map(|s| s.value).fold(0.0, f64::max);
        let tick_values = value_ticks(max_value, y_tick_count);
        let top = tick_values.last().copied().filter(|t| *t > 0.0).unwrap_or(1.0);

        let y_of = |value: f64| plot.bottom() - (value / top) * plot.height;
        let x_of = |index: usize| match samples.len() {
            0 | 1 => plot.x + plot.width / 2.0,
            n => plot.x + index as f64 * plot.width / (n - 1) as f64,
        };

        let points: Vec<Point> = samples
            .iter()
            .enumerate()
            .map(|(i, s)| Point::new(x_of(i), y_of(s.value)))
            .collect();

        let line_path = monotone_path(&points);
        let mut area_path = line_path.clone();
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            let _ = write!(
                area_path,
                "L{:.2},{:.2}L{:.2},{:.2}Z",
                last.x,
                plot.bottom(),
                first.x,
                plot.bottom()
            );
        }

        let x_ticks = samples
            .iter()
            .zip(&points)
            .map(|(s, p)| XTick {
                x: p.x,
                label: dates.axis_label(s.date),
            })
            .collect();

        let y_ticks = tick_values
            .into_iter()
            .map(|value| YTick {
                y: y_of(value),
                value,
                label: currency.axis_tick(value),
            })
            .collect();

        Self {
            viewport,
            plot,
            points,
            line_path,
            area_path,
            x_ticks,
            y_ticks,
        }
    }

    /// Index of the point closest to `x`, or `None` when `x` is too far
    /// outside the plot to belong to any point.
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        if !x.is_finite() {
            return None;
        }
        let reach = match self.points.len() {
            0 => return None,
            1 => SINGLE_POINT_REACH,
            n => self.plot.width / (n - 1) as f64 / 2.0,
        };
        let first = self.points.first()?.x;
        let last = self.points.last()?.x;
        if x < first - reach || x > last + reach {
            return None;
        }

        self.points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (a.x - x).abs().total_cmp(&(b.x - x).abs()))
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ChronoDateFormatter;
    use chrono::NaiveDate;

    fn samples(values: &[f64]) -> Vec<Sample> {
        let start = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
        start
            .iter_days()
            .zip(values)
            .map(|(d, v)| Sample::new(d, *v))
            .collect()
    }

    fn layout(values: &[f64]) -> ChartLayout {
        ChartLayout::compute(
            &samples(values),
            Viewport::default(),
            8,
            &ChronoDateFormatter,
            &CurrencyFormat::default(),
        )
    }

    #[test]
    fn test_points_span_plot_width() {
        let l = layout(&[100.0, 200.0, 300.0]);
        assert_eq!(l.plot.x, 80.0);
        assert_eq!(l.plot.right(), 776.0);
        assert_eq!(l.points[0].x, 80.0);
        assert_eq!(l.points[1].x, 428.0);
        assert_eq!(l.points[2].x, 776.0);
    }

    #[test]
    fn test_values_map_onto_tick_scale() {
        let l = layout(&[0.0, 10_000.0]);
        // ticks run 0..=10500 in steps of 1500
        assert_eq!(l.y_ticks.len(), 8);
        assert_eq!(l.y_ticks[0].y, l.plot.bottom());
        assert_eq!(l.y_ticks[7].y, l.plot.y);
        assert_eq!(l.points[0].y, l.plot.bottom());
        let expected = l.plot.bottom() - 10_000.0 / 10_500.0 * l.plot.height;
        assert!((l.points[1].y - expected).abs() < 1e-9);
    }

    #[test]
    fn test_tick_labels() {
        let l = layout(&[1.0, 2.0, 3.0]);
        let x_labels: Vec<_> = l.x_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(x_labels, vec!["", "Mar, 14", ""]);
        assert!(l.y_ticks.iter().all(|t| t.label.starts_with('$')));
        assert_eq!(l.y_ticks[0].label, "$0.00");
    }

    #[test]
    fn test_area_path_closes_on_baseline() {
        let l = layout(&[100.0, 200.0, 300.0]);
        assert!(l.line_path.starts_with("M80.00,"));
        assert!(l.area_path.starts_with(&l.line_path));
        assert!(l.area_path.ends_with("L776.00,368.00L80.00,368.00Z"));
    }

    #[test]
    fn test_empty_layout() {
        let l = layout(&[]);
        assert!(l.points.is_empty());
        assert_eq!(l.line_path, "");
        assert_eq!(l.area_path, "");
        assert_eq!(l.y_ticks.len(), 8);
        assert_eq!(l.nearest_index(400.0), None);
    }

    #[test]
    fn test_nearest_index() {
        let l = layout(&[1.0, 2.0, 3.0]);
        assert_eq!(l.nearest_index(80.0), Some(0));
        assert_eq!(l.nearest_index(300.0), Some(1));
        assert_eq!(l.nearest_index(700.0), Some(2));
        assert_eq!(l.nearest_index(0.0), Some(0));
        assert_eq!(l.nearest_index(-200.0), None);
        assert_eq!(l.nearest_index(1000.0), None);
        assert_eq!(l.nearest_index(f64::NAN), None);
    }

    #[test]
    fn test_single_point_sits_in_the_middle() {
        let l = layout(&[50.0]);
        assert_eq!(l.points[0].x, 428.0);
        assert_eq!(l.nearest_index(430.0), Some(0));
        assert_eq!(l.nearest_index(500.0), None);
    }
}

pub mod curve;
pub mod layout;
pub mod ticks;

use crate::format::{CurrencyFormat, DateFormatter};
use crate::sample::Sample;

pub use curve::Point;
pub use layout::{ChartLayout, Margin, Rect, Viewport, XTick, YTick};

/// Turns a series plus its formatters into something drawable.
pub trait ChartRenderer {
    type Output;

    fn render(
        &self,
        samples: &[Sample],
        dates: &dyn DateFormatter,
        currency: &CurrencyFormat,
    ) -> Self::Output;
}

/// Lays the series out as an SVG area chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgAreaRenderer {
    pub viewport: Viewport,
    pub y_tick_count: usize,
}

impl ChartRenderer for SvgAreaRenderer {
    type Output = ChartLayout;

    fn render(
        &self,
        samples: &[Sample],
        dates: &dyn DateFormatter,
        currency: &CurrencyFormat,
    ) -> ChartLayout {
        ChartLayout::compute(samples, self.viewport, self.y_tick_count, dates, currency)
    }
}

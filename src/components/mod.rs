pub mod area_chart;
pub mod chart_notice;
pub mod chart_tooltip;
pub mod roll_dice;

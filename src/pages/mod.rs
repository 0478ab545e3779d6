pub mod area_chart_page;

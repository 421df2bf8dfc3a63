//! Chart widgets shared by the analysis views: line/scatter plots and bar charts.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::theme;
use crate::ui::card;

/// One plotted series.
pub struct Series<'a> {
    pub name: &'a str,
    pub points: Vec<(f64, f64)>,
    pub color: Color,
    pub graph: GraphType,
}

impl<'a> Series<'a> {
    pub fn line(name: &'a str, points: Vec<(f64, f64)>, color: Color) -> Self {
        Self {
            name,
            points,
            color,
            graph: GraphType::Line,
        }
    }

    pub fn scatter(name: &'a str, points: Vec<(f64, f64)>, color: Color) -> Self {
        Self {
            name,
            points,
            color,
            graph: GraphType::Scatter,
        }
    }
}

/// X axis bounds with first/last tick labels.
pub struct XAxis {
    pub title: &'static str,
    pub bounds: [f64; 2],
    pub labels: Vec<String>,
}

/// Padded `[min, max]` over every point's y value.
pub fn y_bounds(series: &[Series]) -> [f64; 2] {
    let (min_y, max_y) = series
        .iter()
        .flat_map(|s| s.points.iter().map(|&(_, y)| y))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| (lo.min(y), hi.max(y)));
    if !min_y.is_finite() || !max_y.is_finite() {
        return [0.0, 1.0];
    }
    let padding = ((max_y - min_y).abs() * 0.05).max(0.01);
    [min_y - padding, max_y + padding]
}

pub fn render_xy(
    f: &mut Frame,
    area: Rect,
    title: &str,
    series: &[Series],
    x_axis: XAxis,
    y_title: &'static str,
) {
    if series.iter().all(|s| s.points.is_empty()) {
        render_empty(f, area, title);
        return;
    }

    let [y_min, y_max] = y_bounds(series);
    let datasets: Vec<Dataset> = series
        .iter()
        .map(|s| {
            Dataset::default()
                .name(s.name)
                .marker(symbols::Marker::Braille)
                .style(Style::default().fg(s.color))
                .graph_type(s.graph)
                .data(&s.points)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(card(title))
        .x_axis(
            Axis::default()
                .title(Span::styled(x_axis.title, theme::muted()))
                .style(theme::muted())
                .bounds(x_axis.bounds)
                .labels(
                    x_axis
                        .labels
                        .into_iter()
                        .map(|l| Span::styled(l, theme::muted()))
                        .collect::<Vec<_>>(),
                ),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(y_title, theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{:.1}", y_min), theme::muted()),
                    Span::styled(format!("{:.1}", y_max), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

/// One labelled bar; `value` is drawn to scale, `text` is printed on the bar.
pub struct BarSpec {
    pub label: String,
    pub value: u64,
    pub text: String,
}

pub fn render_bars(f: &mut Frame, area: Rect, title: &str, bars: &[BarSpec], color: Color) {
    if bars.is_empty() {
        render_empty(f, area, title);
        return;
    }

    let inner_width = area.width.saturating_sub(2);
    let count = bars.len() as u16;
    let bar_width = (inner_width / count).saturating_sub(1).max(1);

    let bars: Vec<Bar> = bars
        .iter()
        .map(|b| {
            Bar::default()
                .value(b.value)
                .text_value(b.text.clone())
                .label(Line::from(b.label.clone()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(card(title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .label_style(theme::muted());

    f.render_widget(chart, area);
}

fn render_empty(f: &mut Frame, area: Rect, title: &str) {
    f.render_widget(
        Paragraph::new(Span::styled("No data for this render cycle.", theme::muted()))
            .block(card(title)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_bounds_pad_range() {
        let series = [Series::line("s", vec![(0.0, 10.0), (1.0, 20.0)], theme::ACCENT)];
        let [lo, hi] = y_bounds(&series);
        assert!((lo - 9.5).abs() < 1e-9);
        assert!((hi - 20.5).abs() < 1e-9);
    }

    #[test]
    fn y_bounds_of_empty_series() {
        let series = [Series::line("s", vec![], theme::ACCENT)];
        assert_eq!(y_bounds(&series), [0.0, 1.0]);
    }

    #[test]
    fn y_bounds_of_flat_series_is_not_degenerate() {
        let series = [Series::line("s", vec![(0.0, 75.0), (1.0, 75.0)], theme::ACCENT)];
        let [lo, hi] = y_bounds(&series);
        assert!(hi > lo);
    }
}

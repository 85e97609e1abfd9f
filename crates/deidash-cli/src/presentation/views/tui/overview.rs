use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::Line,
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph,
        Widget,
    },
};

use crate::presentation::formatters::{format_compact_currency, format_count, format_currency};
use crate::presentation::view_models::SummaryViewModel;

/// Metrics row, theme and agency bar charts, monthly line chart
pub struct OverviewView<'a> {
    model: &'a SummaryViewModel,
}

impl<'a> OverviewView<'a> {
    pub fn new(model: &'a SummaryViewModel) -> Self {
        Self { model }
    }

    fn render_metrics(&self, area: Rect, buf: &mut Buffer) {
        let cells = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

        let metrics = [
            ("Contracts", format_count(self.model.metrics.contract_count)),
            (
                "Total Award Amount",
                format_currency(self.model.metrics.total_award_amount),
            ),
            (
                "Unique Recipients",
                format_count(self.model.metrics.unique_recipients),
            ),
        ];

        for ((title, value), cell) in metrics.into_iter().zip(cells.iter()) {
            Paragraph::new(Line::styled(
                value,
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .block(Block::default().title(title).borders(Borders::ALL))
            .render(*cell, buf);
        }
    }

    fn render_themes(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Contracts by Theme")
            .borders(Borders::ALL);

        if self.model.themes.is_empty() {
            Paragraph::new("No theme columns").block(block).render(area, buf);
            return;
        }

        let bars: Vec<Bar> = self
            .model
            .themes
            .iter()
            .map(|theme| {
                Bar::default()
                    .value(theme.count as u64)
                    .label(Line::from(theme.label.clone()))
            })
            .collect();

        let slots = self.model.themes.len() as u16;
        let bar_width = (area.width.saturating_sub(2) / slots.max(1))
            .saturating_sub(1)
            .clamp(1, 12);

        BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Cyan))
            .render(area, buf);
    }

    fn render_agencies(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Top Agencies by Award Amount")
            .borders(Borders::ALL);

        if self.model.top_agencies.is_empty() {
            Paragraph::new("No data").block(block).render(area, buf);
            return;
        }

        // Horizontal bars are drawn top-down; largest total goes first
        let bars: Vec<Bar> = self
            .model
            .top_agencies
            .iter()
            .rev()
            .map(|agency| {
                Bar::default()
                    .value(agency.total_award_amount.round() as u64)
                    .label(Line::from(agency.agency.clone()))
                    .text_value(format_compact_currency(agency.total_award_amount))
            })
            .collect();

        BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .data(BarGroup::default().bars(&bars))
            .bar_width(1)
            .bar_gap(0)
            .bar_style(Style::default().fg(Color::Green))
            .render(area, buf);
    }

    fn render_timeline(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Monthly Award Amount")
            .borders(Borders::ALL);

        let timeline = &self.model.timeline;
        if timeline.is_empty() {
            Paragraph::new("No data").block(block).render(area, buf);
            return;
        }

        let points: Vec<(f64, f64)> = timeline
            .iter()
            .enumerate()
            .map(|(i, point)| (i as f64, point.total_award_amount))
            .collect();
        let max_amount = points.iter().map(|p| p.1).fold(0.0, f64::max).max(1.0);
        let last = timeline.len() - 1;

        let x_labels: Vec<Line> = if last == 0 {
            vec![Line::from(timeline[0].month.clone())]
        } else {
            vec![
                Line::from(timeline[0].month.clone()),
                Line::from(timeline[last / 2].month.clone()),
                Line::from(timeline[last].month.clone()),
            ]
        };

        let dataset = Dataset::default()
            .name("Award amount")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&points);

        Chart::new(vec![dataset])
            .block(block)
            .x_axis(
                Axis::default()
                    .bounds([0.0, last.max(1) as f64])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .bounds([0.0, max_amount])
                    .labels(vec![
                        Line::from(format_compact_currency(0.0)),
                        Line::from(format_compact_currency(max_amount / 2.0)),
                        Line::from(format_compact_currency(max_amount)),
                    ]),
            )
            .render(area, buf);
    }
}

impl<'a> Widget for OverviewView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Percentage(55),
            Constraint::Min(6),
        ])
        .split(area);

        let charts = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[1]);

        self.render_metrics(rows[0], buf);
        self.render_themes(charts[0], buf);
        self.render_agencies(charts[1], buf);
        self.render_timeline(rows[2], buf);
    }
}

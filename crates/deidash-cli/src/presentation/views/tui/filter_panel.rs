use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::format_iso_date;
use crate::presentation::view_models::FilterPanelViewModel;

use super::key_hint;

pub struct FilterPanelView<'a> {
    model: &'a FilterPanelViewModel,
    theme_cursor: usize,
}

impl<'a> FilterPanelView<'a> {
    pub fn new(model: &'a FilterPanelViewModel, theme_cursor: usize) -> Self {
        Self {
            model,
            theme_cursor,
        }
    }
}

impl<'a> Widget for FilterPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = |text: &'static str| {
            Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
        };
        let date = |d: Option<chrono::NaiveDate>| d.map(format_iso_date).unwrap_or_else(|| "-".to_string());

        let dates = Line::from(vec![
            label("Dates   "),
            Span::raw(format!(
                "{} → {}   ",
                date(self.model.date_from),
                date(self.model.date_to)
            )),
            key_hint("f/F"),
            Span::raw(" start  "),
            key_hint("u/U"),
            Span::raw(" end"),
        ]);

        let agency = Line::from(vec![
            label("Agency  "),
            Span::raw(self.model.agency.clone()),
            Span::styled(
                format!(" ({}/{})   ", self.model.agency_position, self.model.agency_choices),
                Style::default().add_modifier(Modifier::DIM),
            ),
            key_hint("a/A"),
        ]);

        let size = Line::from(vec![
            label("Size    "),
            Span::raw(format!("{}   ", self.model.size)),
            key_hint("s/S"),
        ]);

        let mut theme_spans = vec![label("Themes  ")];
        if self.model.themes.is_empty() {
            theme_spans.push(Span::raw("(none)"));
        }
        for (i, theme) in self.model.themes.iter().enumerate() {
            let style = if i == self.theme_cursor {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let mark = if theme.selected { "x" } else { " " };
            theme_spans.push(Span::styled(format!("[{}] {}", mark, theme.label), style));
            theme_spans.push(Span::raw("  "));
        }
        theme_spans.push(key_hint("[ ]"));
        theme_spans.push(Span::raw(" move  "));
        theme_spans.push(key_hint("space"));
        theme_spans.push(Span::raw(" toggle"));

        Paragraph::new(vec![dates, agency, size, Line::from(theme_spans)])
            .block(Block::default().title("Filters").borders(Borders::ALL))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

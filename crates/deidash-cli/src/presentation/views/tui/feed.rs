use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::{format_currency, format_long_date};
use crate::presentation::view_models::FeedViewModel;

use super::key_hint;

pub struct FeedPanelView<'a> {
    model: &'a FeedViewModel,
    scroll: u16,
}

impl<'a> FeedPanelView<'a> {
    pub fn new(model: &'a FeedViewModel, scroll: u16) -> Self {
        Self { model, scroll }
    }

    fn build_lines(&self) -> Vec<Line<'static>> {
        if self.model.cards.is_empty() {
            return vec![Line::from("No contracts match the current filters.")];
        }

        let mut lines = Vec::new();
        for card in &self.model.cards {
            lines.push(Line::from(vec![
                Span::styled(
                    format_currency(card.award_amount),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" · "),
                Span::styled(
                    card.recipient_name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::styled(
                format!(
                    "{} · {} · {}",
                    card.award_id,
                    card.awarding_agency_name,
                    format_long_date(card.action_date)
                ),
                Style::default().add_modifier(Modifier::DIM),
            ));
            lines.push(Line::from(card.description.clone()));
            lines.push(Line::default());
        }
        lines
    }
}

impl<'a> Widget for FeedPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::raw(format!(
                "Featured Awards ({} of {})  ",
                self.model.cards.len(),
                self.model.population
            )),
            key_hint("n"),
            Span::raw(" resample"),
        ]);

        Paragraph::new(self.build_lines())
            .block(Block::default().title(title).borders(Borders::ALL))
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

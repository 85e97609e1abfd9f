use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::{key_hint, status_level_to_color};

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let halves = Layout::horizontal([Constraint::Min(20), Constraint::Length(36)]).split(inner);

        Paragraph::new(Line::styled(
            self.model.message.clone(),
            Style::default().fg(status_level_to_color(self.model.level)),
        ))
        .render(halves[0], buf);

        Paragraph::new(Line::from(vec![
            key_hint("Tab"),
            Span::raw(" page "),
            key_hint("r"),
            Span::raw(" reset "),
            key_hint("q"),
            Span::raw(" quit"),
        ]))
        .alignment(Alignment::Right)
        .render(halves[1], buf);
    }
}

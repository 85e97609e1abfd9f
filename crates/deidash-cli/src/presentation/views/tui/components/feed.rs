use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

use crate::presentation::view_models::FeedViewModel;
use crate::presentation::views::tui::FeedPanelView;

/// Lines per award card, blank separator included
const CARD_HEIGHT: u16 = 4;

#[derive(Debug, Default)]
pub struct FeedComponent {
    scroll: u16,
}

impl FeedComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(CARD_HEIGHT),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(CARD_HEIGHT),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
    }

    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &FeedViewModel) {
        let max_scroll = (data.cards.len() as u16).saturating_mul(CARD_HEIGHT);
        self.scroll = self.scroll.min(max_scroll);

        f.render_widget(FeedPanelView::new(data, self.scroll), area);
    }
}

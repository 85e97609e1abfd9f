use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs, Widget},
};

use super::Page;

pub struct PageTabsView {
    page: Page,
}

impl PageTabsView {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

impl Widget for PageTabsView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Tabs::new(Page::ALL.iter().map(|p| p.title()))
            .select(self.page.index())
            .block(
                Block::default()
                    .title("DEI Contract Dashboard")
                    .borders(Borders::ALL),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .render(area, buf);
    }
}

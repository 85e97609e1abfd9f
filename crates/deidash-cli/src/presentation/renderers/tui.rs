//! TUI Renderer for the interactive dashboard
//!
//! The renderer owns UI state (active page, cursors, scroll) and the event
//! loop. Data comes from a `ScreenSource`, which recomputes its view model
//! whenever an action changes the filters.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
};

use crate::presentation::view_models::DashboardScreenViewModel;
use crate::presentation::views::tui::{
    ContractsComponent, DashboardAction, FeedComponent, FilterPanelComponent, OverviewView, Page,
    PageTabsView, StatusBarView,
};

/// Supplies the current screen and applies actions to it
pub trait ScreenSource {
    fn screen(&self) -> &DashboardScreenViewModel;
    fn apply(&mut self, action: DashboardAction);
}

pub struct TuiRenderer {
    page: Page,
    filter_panel: FilterPanelComponent,
    contracts: ContractsComponent,
    feed: FeedComponent,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            page: Page::default(),
            filter_panel: FilterPanelComponent::new(),
            contracts: ContractsComponent::new(),
            feed: FeedComponent::new(),
            should_quit: false,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run<S: ScreenSource>(mut self, source: &mut S) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, source);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend, S: ScreenSource>(
        &mut self,
        terminal: &mut Terminal<B>,
        source: &mut S,
    ) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.draw(f, source.screen()))?;

            // Input is the only thing that changes the screen, so block on it
            if let Event::Key(key) = event::read()? {
                if let Some(action) = self.handle_key(key, source.screen()) {
                    source.apply(action);
                }
            }
        }
        Ok(())
    }

    /// Route a key press to the global bindings, the filter panel, then the active page
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        screen: &DashboardScreenViewModel,
    ) -> Option<DashboardAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Tab => {
                self.page = self.page.next();
                return None;
            }
            KeyCode::BackTab => {
                self.page = self.page.prev();
                return None;
            }
            KeyCode::Char('n') => {
                self.feed.reset();
                return Some(DashboardAction::Resample);
            }
            _ => {}
        }

        if let Some(action) = self
            .filter_panel
            .handle_input(key, screen.filters.themes.len())
        {
            return Some(action);
        }

        match self.page {
            Page::Overview => None,
            Page::Table => self.contracts.handle_input(key, screen.table.rows.len()),
            Page::Feed => {
                self.feed.handle_input(key);
                None
            }
        }
    }

    /// Layout: [Tabs | Filters | Page body | Status bar]
    pub fn draw(&mut self, f: &mut Frame, screen: &DashboardScreenViewModel) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(f.area());

        f.render_widget(PageTabsView::new(self.page), chunks[0]);
        self.filter_panel.render(f, chunks[1], &screen.filters);

        match self.page {
            Page::Overview => f.render_widget(OverviewView::new(&screen.summary), chunks[2]),
            Page::Table => self.contracts.render(f, chunks[2], &screen.table),
            Page::Feed => self.feed.render(f, chunks[2], &screen.feed),
        }

        f.render_widget(StatusBarView::new(&screen.status), chunks[3]);
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

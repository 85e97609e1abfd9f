use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::TableState};

use crate::presentation::view_models::TableViewModel;
use crate::presentation::views::tui::ContractTableView;

use super::DashboardAction;

const PAGE_STEP: usize = 10;

/// Contracts table with a private row selection
#[derive(Debug, Default)]
pub struct ContractsComponent {
    state: TableState,
}

impl ContractsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn handle_input(&mut self, key: KeyEvent, data_len: usize) -> Option<DashboardAction> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_by(1, data_len),
            KeyCode::Char('k') | KeyCode::Up => self.move_by(-1, data_len),
            KeyCode::PageDown => self.move_by(PAGE_STEP as isize, data_len),
            KeyCode::PageUp => self.move_by(-(PAGE_STEP as isize), data_len),
            KeyCode::Home => {
                if data_len > 0 {
                    self.state.select(Some(0));
                }
            }
            KeyCode::End => {
                if data_len > 0 {
                    self.state.select(Some(data_len - 1));
                }
            }
            KeyCode::Char('o') => {
                self.state.select(None);
                return Some(DashboardAction::CycleSort);
            }
            KeyCode::Char('O') => {
                self.state.select(None);
                return Some(DashboardAction::FlipSort);
            }
            _ => {}
        }
        None
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &TableViewModel) {
        let len = data.rows.len();
        if len == 0 {
            self.state.select(None);
        } else {
            let selected = self.state.selected().unwrap_or(0).min(len - 1);
            self.state.select(Some(selected));
        }

        let table = ContractTableView::new(data).build_table();
        f.render_stateful_widget(table, area, &mut self.state);
    }

    fn move_by(&mut self, delta: isize, data_len: usize) {
        if data_len == 0 {
            return;
        }
        let current = self.state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, data_len as isize - 1);
        self.state.select(Some(next as usize));
    }
}

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

use crate::presentation::view_models::FilterPanelViewModel;
use crate::presentation::views::tui::FilterPanelView;

use super::DashboardAction;

/// Filter controls; the theme cursor is the only local state
#[derive(Debug, Default)]
pub struct FilterPanelComponent {
    theme_cursor: usize,
}

impl FilterPanelComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme_cursor(&self) -> usize {
        self.theme_cursor
    }

    pub fn handle_input(&mut self, key: KeyEvent, theme_count: usize) -> Option<DashboardAction> {
        match key.code {
            KeyCode::Char('a') => Some(DashboardAction::NextAgency),
            KeyCode::Char('A') => Some(DashboardAction::PrevAgency),
            KeyCode::Char('s') => Some(DashboardAction::NextSize),
            KeyCode::Char('S') => Some(DashboardAction::PrevSize),
            KeyCode::Char('f') => Some(DashboardAction::ShiftFrom(1)),
            KeyCode::Char('F') => Some(DashboardAction::ShiftFrom(-1)),
            KeyCode::Char('u') => Some(DashboardAction::ShiftTo(1)),
            KeyCode::Char('U') => Some(DashboardAction::ShiftTo(-1)),
            KeyCode::Char('r') => Some(DashboardAction::Reset),
            KeyCode::Char(']') => {
                if theme_count > 0 {
                    self.theme_cursor = (self.theme_cursor + 1).min(theme_count - 1);
                }
                None
            }
            KeyCode::Char('[') => {
                self.theme_cursor = self.theme_cursor.saturating_sub(1);
                None
            }
            KeyCode::Char(' ') if theme_count > 0 => Some(DashboardAction::ToggleTheme(
                self.theme_cursor.min(theme_count - 1),
            )),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &FilterPanelViewModel) {
        self.theme_cursor = self
            .theme_cursor
            .min(data.themes.len().saturating_sub(1));

        f.render_widget(FilterPanelView::new(data, self.theme_cursor), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_theme_cursor_stays_in_bounds() {
        let mut panel = FilterPanelComponent::new();

        for _ in 0..5 {
            panel.handle_input(key(']'), 3);
        }
        assert_eq!(panel.theme_cursor(), 2);
        assert_eq!(
            panel.handle_input(key(' '), 3),
            Some(DashboardAction::ToggleTheme(2))
        );

        for _ in 0..5 {
            panel.handle_input(key('['), 3);
        }
        assert_eq!(panel.theme_cursor(), 0);
    }

    #[test]
    fn test_toggle_without_themes_is_ignored() {
        let mut panel = FilterPanelComponent::new();
        assert_eq!(panel.handle_input(key(' '), 0), None);
    }

    #[test]
    fn test_shifted_keys_reverse_direction() {
        let mut panel = FilterPanelComponent::new();
        assert_eq!(
            panel.handle_input(key('f'), 0),
            Some(DashboardAction::ShiftFrom(1))
        );
        assert_eq!(
            panel.handle_input(KeyEvent::new(KeyCode::Char('F'), KeyModifiers::SHIFT), 0),
            Some(DashboardAction::ShiftFrom(-1))
        );
        assert_eq!(
            panel.handle_input(key('A'), 0),
            Some(DashboardAction::PrevAgency)
        );
    }
}

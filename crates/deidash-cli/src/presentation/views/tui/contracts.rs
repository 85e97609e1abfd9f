use ratatui::{
    layout::{Alignment, Constraint},
    style::{Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::presentation::formatters::{format_currency, format_iso_date, single_line};
use crate::presentation::view_models::TableViewModel;

/// Builds the contracts table; selection state is owned by `ContractsComponent`
pub struct ContractTableView<'a> {
    model: &'a TableViewModel,
}

impl<'a> ContractTableView<'a> {
    pub fn new(model: &'a TableViewModel) -> Self {
        Self { model }
    }

    pub fn build_table(&self) -> Table<'static> {
        let header = Row::new(vec![
            "Award ID",
            "Recipient",
            "Agency",
            "Amount",
            "Action Date",
            "Description",
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .model
            .rows
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.award_id.clone()),
                    Cell::from(row.recipient_name.clone()),
                    Cell::from(row.awarding_agency_name.clone()),
                    Cell::from(Text::from(format_currency(row.award_amount)).alignment(Alignment::Right)),
                    Cell::from(format_iso_date(row.action_date)),
                    Cell::from(single_line(&row.award_description)),
                ])
            })
            .collect();

        let arrow = if self.model.descending { "↓" } else { "↑" };
        let title = format!(
            "Contracts ({}) sorted by {} {}  [o] column [O] direction",
            self.model.total_rows, self.model.sort, arrow
        );

        let widths = [
            Constraint::Length(12),
            Constraint::Percentage(18),
            Constraint::Percentage(22),
            Constraint::Length(16),
            Constraint::Length(11),
            Constraint::Min(20),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(Block::default().title(title).borders(Borders::ALL))
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ")
    }
}

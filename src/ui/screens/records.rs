use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let period = app
        .selected_period()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "no selection".into());

    if app.records.is_empty() {
        let msg = match &app.load_error {
            Some(err) => vec![
                Line::from(""),
                Line::from(Span::styled("Failed to load data.", theme::bad_style())),
                Line::from(""),
                Line::from(Span::styled(err.clone(), theme::dim_style())),
                Line::from(""),
                Line::from(Span::styled("Fix the sheet and press r to reload", theme::dim_style())),
            ],
            None => vec![
                Line::from(""),
                Line::from(Span::styled("Please select month and year", theme::warn_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "H/L change month, [/] change year",
                    theme::dim_style(),
                )),
            ],
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(format!(" Records {period} (0) "), theme::title_style()));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Category", "Cost"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .records
        .iter()
        .enumerate()
        .skip(app.record_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, rec)| {
            let cost = match rec.cost {
                Some(c) => Cell::from(Span::styled(format_amount(c), theme::normal_style())),
                None => Cell::from(Span::styled("—", theme::dim_style())),
            };

            let style = if i == app.record_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(rec.date.format("%Y-%m-%d").to_string()),
                Cell::from(truncate(&rec.category, 30)),
                cost,
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(16),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(
                format!(" Records {period} ({}) · Enter to generate report ", app.records.len()),
                theme::title_style(),
            )),
    );

    f.render_widget(table, area);
}

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::app::App;

pub struct ComparePanelWidget;

impl ComparePanelWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let block = Block::default()
            .title(" Compare ")
            .borders(Borders::ALL)
            .border_style(theme.border(true))
            .style(theme.base());

        let table = &app.panels.compare;
        let Some((header, body)) = table.split_first() else {
            let empty = Paragraph::new(Span::styled("No comparison table", theme.muted()))
                .block(block);
            frame.render_widget(empty, area);
            return;
        };

        let columns = app.panels.compare_columns().max(1);
        let widths = vec![Constraint::Fill(1); columns];

        let header = Row::new(header.iter().map(|cell| Cell::from(cell.as_str())))
            .style(theme.label())
            .bottom_margin(1);
        let rows = body.iter().map(|row| {
            Row::new(row.iter().enumerate().map(|(i, cell)| {
                let style = if i == 0 {
                    Style::default().fg(theme.grey2)
                } else {
                    Style::default().fg(theme.fg0)
                };
                Cell::from(cell.as_str()).style(style)
            }))
        });

        let widget = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1);
        frame.render_widget(widget, area);
    }
}

pub struct ContactPanelWidget;

impl ContactPanelWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let block = Block::default()
            .title(" Contact ")
            .borders(Borders::ALL)
            .border_style(theme.border(true))
            .style(theme.base());

        let mut lines: Vec<Line> = app
            .panels
            .contact
            .iter()
            .map(|line| {
                Line::from(Span::styled(
                    line.clone(),
                    Style::default()
                        .fg(theme.fg1)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("r", theme.label()),
            Span::styled(" start over", theme.muted()),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

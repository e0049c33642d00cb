use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::App;

pub struct FramePanelWidget;

impl FramePanelWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let view = app.view();
        let engine = &app.engine;
        let current = engine.current_frame();
        let entry = engine.catalog().frame(current);

        let block = Block::default()
            .title(format!(" {} ", entry.segment_key))
            .borders(Borders::ALL)
            .border_style(theme.border(engine.is_tweening()))
            .style(theme.base());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body, gauge_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let lines = match (view.frame_visible, view.image_ref.as_deref()) {
            (true, Some(image_ref)) => vec![
                Line::from(Span::styled(
                    "▣",
                    Style::default().fg(theme.yellow),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    image_ref.to_string(),
                    Style::default()
                        .fg(theme.fg1)
                        .add_modifier(Modifier::BOLD),
                )),
            ],
            _ => vec![Line::from(Span::styled("blank frame", theme.muted()))],
        };

        // vertically center the frame card
        let top = body.height.saturating_sub(lines.len() as u16) / 2;
        let [_, card] =
            Layout::vertical([Constraint::Length(top), Constraint::Min(0)]).areas(body);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), card);

        let max_frame = engine.max_frame();
        let ratio = if max_frame == 0 {
            1.0
        } else {
            current as f64 / max_frame as f64
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(theme.aqua).bg(theme.bg1))
            .ratio(ratio)
            .label(format!("{current} / {max_frame}"));
        frame.render_widget(gauge, gauge_area);
    }
}

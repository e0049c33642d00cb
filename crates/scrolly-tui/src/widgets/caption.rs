use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

pub struct CaptionWidget;

impl CaptionWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let view = app.view();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(false))
            .style(theme.base());

        // a hidden caption keeps its box so the layout does not jump
        if !view.caption_visible {
            frame.render_widget(block, area);
            return;
        }

        let caption = &view.caption;
        let mut lines = vec![
            Line::from(Span::styled(caption.label.clone(), theme.label())),
            Line::from(""),
        ];
        lines.extend(caption.title.lines().map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                Style::default()
                    .fg(theme.fg1)
                    .add_modifier(Modifier::BOLD),
            ))
        }));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            caption.description.clone(),
            theme.muted(),
        )));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

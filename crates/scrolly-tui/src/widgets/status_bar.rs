use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use scrolly_core::InputMode;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let view = app.view();
        let engine = &app.engine;

        let mode_str = match view.mode {
            InputMode::Locked => "LOCKED",
            InputMode::Continuous => "CONTINUOUS",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {msg}")
        } else {
            let mut text = format!(
                " {} | frame {}/{} | {}",
                mode_str,
                engine.current_frame(),
                engine.max_frame(),
                app.mode_override.label()
            );
            if engine.mode() == InputMode::Locked && engine.scroll_accumulator() != 0 {
                text.push_str(&format!(" | hold {:+}", engine.scroll_accumulator()));
            }
            text
        };

        let complete = if view.complete { " ✓ complete " } else { "" };
        let help_hint = " q:quit j/k:step 1-9:segment r:reset m:mode ";

        let used = status_text.width() + complete.width() + help_hint.width();
        let padding = usize::from(area.width).saturating_sub(used);

        let bar = Style::default().bg(theme.bg2);
        let line = Line::from(vec![
            Span::styled(status_text, bar.fg(theme.fg0)),
            Span::styled(complete, bar.fg(theme.complete)),
            Span::styled(" ".repeat(padding), bar),
            Span::styled(help_hint, bar.fg(theme.grey2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

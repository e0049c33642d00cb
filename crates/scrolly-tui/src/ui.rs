//! Stage layout

use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use scrolly_core::{DisplayMode, InputMode};

use crate::app::App;
use crate::widgets::{
    CaptionWidget, ComparePanelWidget, ContactPanelWidget, FramePanelWidget, RailWidget,
    StatusBarWidget,
};

/// Steps in the page scrollbar
const SCROLLBAR_STEPS: usize = 100;

/// Draw the whole stage; refreshes the rail hitboxes
pub fn draw(frame: &mut Frame, app: &mut App) {
    let [stage, rail, status] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let stage = match app.page_ratio() {
        Some(ratio) => {
            let [content, scrollbar] =
                Layout::horizontal([Constraint::Min(1), Constraint::Length(1)]).areas(stage);
            render_page_scrollbar(frame, scrollbar, ratio);
            content
        }
        None => stage,
    };

    render_stage(frame, stage, app);
    app.rail_hitboxes = RailWidget::render(frame, rail, app);
    StatusBarWidget::render(frame, status, app);
}

fn render_stage(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.view();

    // a collapsed caption gives its space back to the frame
    if view.panel == DisplayMode::Normal && view.caption_collapsed {
        FramePanelWidget::render(frame, area, app);
        return;
    }

    let [frame_area, side] = match view.mode {
        InputMode::Locked => {
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(area)
        }
        InputMode::Continuous => {
            Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(area)
        }
    };

    FramePanelWidget::render(frame, frame_area, app);
    match view.panel {
        DisplayMode::Normal => CaptionWidget::render(frame, side, app),
        DisplayMode::Compare => ComparePanelWidget::render(frame, side, app),
        DisplayMode::Contact => ContactPanelWidget::render(frame, side, app),
    }
}

fn render_page_scrollbar(frame: &mut Frame, area: Rect, ratio: f64) {
    let position = (ratio * (SCROLLBAR_STEPS - 1) as f64).round() as usize;
    let mut state = ScrollbarState::new(SCROLLBAR_STEPS).position(position);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        area,
        &mut state,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    use ratatui::{backend::TestBackend, Terminal};
    use scrolly_core::{AppConfig, Storyboard};

    use crate::app::ModeOverride;
    use crate::input::Action;

    fn render(app: &mut App) -> String {
        let (cols, rows) = app.size;
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(cols))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app(cols: u16, rows: u16) -> App {
        let storyboard = Storyboard::sample().unwrap();
        let mut app = App::new(&storyboard, &AppConfig::default(), ModeOverride::Auto).unwrap();
        app.handle_resize(cols, rows);
        app
    }

    #[test]
    fn test_locked_stage_shows_frame_and_caption() {
        let mut app = app(120, 30);
        let screen = render(&mut app);
        assert!(screen.contains("intro_0001.png"));
        assert!(screen.contains("HYBRID"));
        assert!(screen.contains("LOCKED"));
        assert!(screen.contains("0 / 67"));
        assert_eq!(app.rail_hitboxes.len(), 7);
    }

    #[test]
    fn test_rail_hitboxes_sit_on_the_rail_row() {
        let mut app = app(120, 30);
        render(&mut app);
        assert!(app.rail_hitboxes.iter().all(|(_, rect)| rect.y == 28));

        let (_, target) = app.rail_hitboxes[6];
        app.handle_action(Action::Press(target.x, target.y));
        assert!(app.engine.is_tweening());
    }

    #[test]
    fn test_continuous_stage_has_scrollbar_mode() {
        let mut app = app(80, 30);
        let screen = render(&mut app);
        assert!(screen.contains("CONTINUOUS"));
        assert!(app.page_ratio().is_some());
    }
}

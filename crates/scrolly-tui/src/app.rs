use std::time::Duration;

use anyhow::Result;
use ratatui::layout::Rect;

use scrolly_core::config::UiConfig;
use scrolly_core::{
    AppConfig, Direction, Engine, InputMode, InputOutcome, Millis, Panels, SegmentId,
    Storyboard, ViewportMetrics,
};

use crate::input::Action;
use crate::stage::{StageView, TerminalStage};
use crate::theme::Theme;
use crate::timing::Clock;

/// Lines of page scroll per wheel tick in continuous mode
const LINES_PER_STEP: f64 = 3.0;

/// Forced input mode, cycled with `m`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeOverride {
    /// Follow the engine's width breakpoint
    #[default]
    Auto,
    Locked,
    Continuous,
}

impl ModeOverride {
    pub fn next(self) -> Self {
        match self {
            ModeOverride::Auto => ModeOverride::Locked,
            ModeOverride::Locked => ModeOverride::Continuous,
            ModeOverride::Continuous => ModeOverride::Auto,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModeOverride::Auto => "auto",
            ModeOverride::Locked => "forced locked",
            ModeOverride::Continuous => "forced continuous",
        }
    }
}

/// Terminal preview state around one engine
pub struct App {
    pub engine: Engine<TerminalStage>,
    pub panels: Panels,
    pub ui: UiConfig,
    pub theme: Theme,
    pub clock: Clock,
    pub mode_override: ModeOverride,
    /// Terminal size in cells
    pub size: (u16, u16),
    /// Clickable rail cells, filled in while drawing
    pub rail_hitboxes: Vec<(SegmentId, Rect)>,
    /// Row of the last drag position
    pub drag_row: Option<u16>,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(storyboard: &Storyboard, config: &AppConfig, mode_override: ModeOverride) -> Result<Self> {
        let clock = Clock::start();
        let stage = TerminalStage::new(clock, config.ui.smooth_scroll_ms);
        let engine = Engine::new(storyboard, config.engine.clone(), stage, clock.now())?;

        Ok(Self {
            engine,
            panels: storyboard.panels.clone(),
            ui: config.ui.clone(),
            theme: Theme::default(),
            clock,
            mode_override,
            size: (0, 0),
            rail_hitboxes: Vec::new(),
            drag_row: None,
            status_message: None,
            should_quit: false,
        })
    }

    #[inline]
    pub fn view(&self) -> &StageView {
        &self.engine.sink().view
    }

    /// Page scroll position as a fraction, continuous mode only
    pub fn page_ratio(&self) -> Option<f64> {
        match self.engine.mode() {
            InputMode::Continuous => Some(self.engine.sink().page.ratio()),
            InputMode::Locked => None,
        }
    }

    /// Whether the loop should poll at the animation rate
    pub fn needs_animation(&self) -> bool {
        self.engine.needs_tick() || self.engine.sink().page.needs_update()
    }

    pub fn poll_interval(&self) -> Duration {
        if self.needs_animation() {
            Duration::from_millis(1000 / u64::from(self.ui.animation_fps.max(1)))
        } else {
            Duration::from_millis(self.ui.tick_rate_ms)
        }
    }

    /// Viewport metrics for a terminal of `cols` x `rows` cells
    pub fn metrics(&self, cols: u16, rows: u16) -> ViewportMetrics {
        let height = f64::from(rows) * self.ui.row_px;
        ViewportMetrics {
            // cells are roughly twice as tall as they are wide
            width: f64::from(cols) * self.ui.row_px / 2.0,
            height,
            spacer_top: Some(0.0),
            document_height: height,
        }
    }

    pub fn wants_continuous(&self) -> bool {
        match self.mode_override {
            ModeOverride::Auto => {
                let (cols, rows) = self.size;
                self.engine.below_breakpoint(self.metrics(cols, rows).width)
            }
            ModeOverride::Locked => false,
            ModeOverride::Continuous => true,
        }
    }

    /// Terminal resize: viewport geometry first, then the breakpoint signal
    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        let now = self.clock.now();
        self.size = (cols, rows);
        let metrics = self.metrics(cols, rows);

        self.engine.sink_mut().set_viewport_height(metrics.height);
        match self.mode_override {
            ModeOverride::Auto => self.engine.on_viewport(metrics, now),
            ModeOverride::Locked | ModeOverride::Continuous => {
                self.engine.on_resize(metrics, now);
                let continuous = self.wants_continuous();
                self.engine.set_continuous(continuous, now);
            }
        }
    }

    /// Feed page movement to the engine, then run its animation frame
    pub fn tick(&mut self) {
        let now = self.clock.now();

        let update = self.engine.sink_mut().page.update(now);
        if update.moved {
            let offset = self.engine.sink().page.offset();
            let outcome = self.engine.on_scroll(offset, now);
            trace_ignored(outcome, "scroll");
        }
        if update.settled {
            self.engine.on_scroll_settled(now);
        }

        self.engine.tick(now);
    }

    pub fn handle_action(&mut self, action: Action) {
        let now = self.clock.now();

        match action {
            Action::Quit => self.should_quit = true,
            Action::Step(direction) => self.step(direction, LINES_PER_STEP * self.ui.row_px, now),
            Action::PageStep(direction) => {
                let viewport = f64::from(self.size.1) * self.ui.row_px;
                self.step(direction, viewport, now);
            }
            Action::FocusSegment(id) => self.focus_segment(id, now),
            Action::Reset => {
                self.engine.request_reset(now);
                self.status_message = None;
            }
            Action::CycleMode => {
                self.mode_override = self.mode_override.next();
                let continuous = self.wants_continuous();
                self.engine.set_continuous(continuous, now);
                self.status_message = Some(format!("Mode: {}", self.mode_override.label()));
            }
            Action::Press(column, row) => {
                let hit = self
                    .rail_hitboxes
                    .iter()
                    .find(|(_, rect)| contains(*rect, column, row))
                    .map(|(id, _)| *id);
                match hit {
                    Some(id) => self.focus_segment(id, now),
                    None => {
                        self.drag_row = Some(row);
                        let y = self.row_to_px(row);
                        self.engine.on_touch_start(y);
                    }
                }
            }
            Action::Drag(row) => self.drag(row, now),
            Action::Release => {
                self.drag_row = None;
                self.engine.on_touch_end();
            }
            Action::None => {}
        }
    }

    fn step(&mut self, direction: Direction, page_px: f64, now: Millis) {
        match self.engine.mode() {
            InputMode::Locked => {
                let outcome = self.engine.on_wheel(f64::from(direction.unit()), now);
                trace_ignored(outcome, "wheel");
            }
            InputMode::Continuous => {
                self.engine
                    .sink_mut()
                    .page
                    .scroll_by(f64::from(direction.unit()) * page_px);
            }
        }
    }

    /// Locked mode treats drags as touch; continuous mode scrolls the page
    fn drag(&mut self, row: u16, now: Millis) {
        let Some(previous) = self.drag_row.replace(row) else {
            return;
        };
        match self.engine.mode() {
            InputMode::Locked => {
                let y = self.row_to_px(row);
                let outcome = self.engine.on_touch_move(y, now);
                trace_ignored(outcome, "touch");
            }
            InputMode::Continuous => {
                let delta = (f64::from(previous) - f64::from(row)) * self.ui.row_px;
                self.engine.sink_mut().page.scroll_by(delta);
            }
        }
    }

    fn focus_segment(&mut self, id: SegmentId, now: Millis) {
        match self.engine.request_segment_focus(id, now) {
            Ok(()) => self.status_message = None,
            Err(e) => {
                tracing::warn!(segment = id, error = %e, "Segment focus rejected");
                self.status_message = Some(e.to_string());
            }
        }
    }

    fn row_to_px(&self, row: u16) -> f64 {
        f64::from(row) * self.ui.row_px
    }
}

fn trace_ignored(outcome: InputOutcome, source: &str) {
    if outcome == InputOutcome::Ignored {
        tracing::trace!(source, "Input ignored by the engine");
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

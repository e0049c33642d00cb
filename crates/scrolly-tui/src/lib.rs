pub mod app;
pub mod event;
pub mod input;
pub mod page;
pub mod stage;
pub mod theme;
pub mod timing;
pub mod ui;
pub mod widgets;

pub use app::{App, ModeOverride};
pub use stage::{StageView, TerminalStage};
pub use theme::Theme;

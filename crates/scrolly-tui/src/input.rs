use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use scrolly_core::{Direction, SegmentId};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// One wheel tick (locked) or a few lines of page scroll (continuous)
    Step(Direction),
    /// A viewport of page scroll; a single tick in locked mode
    PageStep(Direction),
    FocusSegment(SegmentId),
    Reset,
    CycleMode,
    /// Left button pressed at (column, row)
    Press(u16, u16),
    /// Left-button drag to a row
    Drag(u16),
    Release,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::Step(Direction::Forward),
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::Step(Direction::Backward),
        (KeyCode::Down, KeyModifiers::NONE) => Action::Step(Direction::Forward),
        (KeyCode::Up, KeyModifiers::NONE) => Action::Step(Direction::Backward),

        (KeyCode::PageDown, _) => Action::PageStep(Direction::Forward),
        (KeyCode::PageUp, _) => Action::PageStep(Direction::Backward),
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::PageStep(Direction::Forward),
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::PageStep(Direction::Forward),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::PageStep(Direction::Backward),

        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::FocusSegment(c as usize - '1' as usize)
        }

        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Reset,
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::CycleMode,

        _ => Action::None,
    }
}

/// Map mouse input; wheel and left-button drags only
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::Step(Direction::Forward),
        MouseEventKind::ScrollUp => Action::Step(Direction::Backward),
        MouseEventKind::Down(MouseButton::Left) => Action::Press(mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => Action::Drag(mouse.row),
        MouseEventKind::Up(MouseButton::Left) => Action::Release,
        _ => Action::None,
    }
}

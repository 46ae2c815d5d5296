//! Keyboard shortcut handling.
//!
//! Mapping depends on the input mode: while the contact form is being
//! edited, printable characters go to the focused field instead of
//! triggering shortcuts, and while the project modal is open most keys
//! just close it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input mode the key mapping operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Browsing the page.
    Browse,
    /// Typing into the contact form.
    Editing,
    /// Project modal open.
    Modal,
}

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    End,
    /// Jump to the nth section (1-based).
    JumpSection(usize),
    CycleFilter,
    NextProject,
    PrevProject,
    OpenProject,
    CloseModal,
    EnterEditing,
    LeaveEditing,
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    Submit,
    DismissToast,
    None,
}

/// Map a key event to an action for the given input mode.
#[must_use]
pub fn map_key(key: KeyEvent, mode: InputMode) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Cancel;
    }
    match mode {
        InputMode::Modal => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => KeyAction::CloseModal,
            _ => KeyAction::None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc => KeyAction::LeaveEditing,
            KeyCode::Tab => KeyAction::FocusNext,
            KeyCode::BackTab => KeyAction::FocusPrev,
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(c) => KeyAction::Input(c),
            _ => KeyAction::None,
        },
        InputMode::Browse => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::ScrollDown,
            KeyCode::PageUp => KeyAction::PageUp,
            KeyCode::PageDown => KeyAction::PageDown,
            KeyCode::Home | KeyCode::Char('g') => KeyAction::Home,
            KeyCode::End | KeyCode::Char('G') => KeyAction::End,
            KeyCode::Char(c @ '1'..='9') => {
                KeyAction::JumpSection(c as usize - '0' as usize)
            }
            KeyCode::Char('f') => KeyAction::CycleFilter,
            KeyCode::Right | KeyCode::Char('l') => KeyAction::NextProject,
            KeyCode::Left | KeyCode::Char('h') => KeyAction::PrevProject,
            KeyCode::Enter | KeyCode::Char('o') => KeyAction::OpenProject,
            KeyCode::Char('e') | KeyCode::Char('i') => KeyAction::EnterEditing,
            KeyCode::Char('x') => KeyAction::DismissToast,
            _ => KeyAction::None,
        },
    }
}

//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::session::Screen;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    // Field navigation (input screen)
    NextField,
    PrevField,
    NextLevel,
    PrevLevel,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Newline,
    Backspace,
    CursorLeft,
    CursorRight,

    // Session transitions
    GenerateQuestions,
    StartPractice,
    SubmitAnswer,
    Advance,
    Restart,

    // Scrolling
    ScrollUp,
    ScrollDown,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focused field on the input screen
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputField {
    #[default]
    Title,
    Level,
    Description,
}

impl InputField {
    pub fn next(&self) -> InputField {
        match self {
            InputField::Title => InputField::Level,
            InputField::Level => InputField::Description,
            InputField::Description => InputField::Title,
        }
    }

    pub fn prev(&self) -> InputField {
        match self {
            InputField::Title => InputField::Description,
            InputField::Level => InputField::Title,
            InputField::Description => InputField::Level,
        }
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, InputField::Level)
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    screen: &Screen,
    focus: InputField,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if input_mode == InputMode::Editing {
        match screen {
            Screen::Input => return handle_input_editing_keys(key, focus),
            Screen::Practice => return handle_answer_editing_keys(key),
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Char('r') => return Some(UiEvent::Restart),
        _ => {}
    }

    match screen {
        Screen::Input => handle_input_keys(key, focus),
        Screen::Questions => match key.code {
            KeyCode::Up => Some(UiEvent::ScrollUp),
            KeyCode::Down => Some(UiEvent::ScrollDown),
            KeyCode::Enter | KeyCode::Char('s') => Some(UiEvent::StartPractice),
            _ => None,
        },
        Screen::Practice => match key.code {
            KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
            KeyCode::Char('s') => Some(UiEvent::SubmitAnswer),
            _ => None,
        },
        Screen::Feedback(_) => match key.code {
            KeyCode::Up => Some(UiEvent::ScrollUp),
            KeyCode::Down => Some(UiEvent::ScrollDown),
            KeyCode::Enter | KeyCode::Char('n') => Some(UiEvent::Advance),
            _ => None,
        },
        Screen::Complete => match key.code {
            KeyCode::Enter => Some(UiEvent::Restart),
            _ => None,
        },
    }
}

/// Handle keys on the job input screen in normal mode
fn handle_input_keys(key: KeyEvent, focus: InputField) -> Option<UiEvent> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(UiEvent::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(UiEvent::PrevField),
        KeyCode::Char('g') => Some(UiEvent::GenerateQuestions),
        KeyCode::Char('e') | KeyCode::Enter => {
            if focus.is_text() {
                Some(UiEvent::StartEditing)
            } else {
                Some(UiEvent::NextLevel)
            }
        }
        KeyCode::Left if focus == InputField::Level => Some(UiEvent::PrevLevel),
        KeyCode::Right if focus == InputField::Level => Some(UiEvent::NextLevel),
        _ => None,
    }
}

/// Handle keys while typing into a job field
fn handle_input_editing_keys(key: KeyEvent, focus: InputField) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::StopEditing),
        KeyCode::Tab => Some(UiEvent::NextField),
        KeyCode::BackTab => Some(UiEvent::PrevField),
        KeyCode::Enter => {
            if focus == InputField::Description {
                Some(UiEvent::Newline)
            } else {
                Some(UiEvent::StopEditing)
            }
        }
        _ => handle_text_keys(key),
    }
}

/// Handle keys while typing an answer
fn handle_answer_editing_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::StopEditing),
        KeyCode::Enter => Some(UiEvent::Newline),
        _ => handle_text_keys(key),
    }
}

fn handle_text_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Feedback;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn feedback_screen() -> Screen {
        Screen::Feedback(Feedback {
            score: 8,
            strengths: Vec::new(),
            improvements: Vec::new(),
            sample_answer: String::new(),
        })
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let event = key_to_ui_event(key, &Screen::Practice, InputField::Title, InputMode::Editing, true);
        assert_eq!(event, Some(UiEvent::Quit));
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        let event = key_to_ui_event(press(KeyCode::Char('g')), &Screen::Input, InputField::Title, InputMode::Normal, true);
        assert_eq!(event, Some(UiEvent::CloseHelp));
    }

    #[test]
    fn test_typing_q_while_editing_is_text() {
        let event = key_to_ui_event(press(KeyCode::Char('q')), &Screen::Input, InputField::Title, InputMode::Editing, false);
        assert_eq!(event, Some(UiEvent::CharInput('q')));

        let event = key_to_ui_event(press(KeyCode::Char('r')), &Screen::Practice, InputField::Title, InputMode::Editing, false);
        assert_eq!(event, Some(UiEvent::CharInput('r')));
    }

    #[test]
    fn test_enter_on_input_fields() {
        let on_level = key_to_ui_event(press(KeyCode::Enter), &Screen::Input, InputField::Level, InputMode::Normal, false);
        assert_eq!(on_level, Some(UiEvent::NextLevel));

        let on_title = key_to_ui_event(press(KeyCode::Enter), &Screen::Input, InputField::Title, InputMode::Normal, false);
        assert_eq!(on_title, Some(UiEvent::StartEditing));

        let in_description = key_to_ui_event(press(KeyCode::Enter), &Screen::Input, InputField::Description, InputMode::Editing, false);
        assert_eq!(in_description, Some(UiEvent::Newline));

        let in_title = key_to_ui_event(press(KeyCode::Enter), &Screen::Input, InputField::Title, InputMode::Editing, false);
        assert_eq!(in_title, Some(UiEvent::StopEditing));
    }

    #[test]
    fn test_screen_specific_actions() {
        let cases = [
            (Screen::Input, KeyCode::Char('g'), UiEvent::GenerateQuestions),
            (Screen::Questions, KeyCode::Enter, UiEvent::StartPractice),
            (Screen::Practice, KeyCode::Char('s'), UiEvent::SubmitAnswer),
            (feedback_screen(), KeyCode::Char('n'), UiEvent::Advance),
            (Screen::Complete, KeyCode::Enter, UiEvent::Restart),
        ];
        for (screen, code, expected) in cases {
            let event = key_to_ui_event(press(code), &screen, InputField::Title, InputMode::Normal, false);
            assert_eq!(event, Some(expected), "screen {}", screen.name());
        }
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(InputField::Title.next(), InputField::Level);
        assert_eq!(InputField::Description.next(), InputField::Title);
        assert_eq!(InputField::Title.prev(), InputField::Description);
    }
}

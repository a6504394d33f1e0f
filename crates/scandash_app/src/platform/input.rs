use std::path::PathBuf;

use crossterm::event::KeyCode;

use scandash_core::Msg;

/// What the operator is currently doing with the keyboard.
///
/// `PathEntry` holds the file-prompt buffer; while it is active the upload
/// pane is highlighted, which is the drop-zone hover cue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    PathEntry(String),
}

/// Result of feeding one key press into the input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    None,
    Redraw,
    Quit,
    Dispatch(Msg),
}

/// Maps a key press to an outcome, editing the mode in place.
///
/// A visible notice is blocking: any key acknowledges it and nothing else
/// happens until it is dismissed.
pub fn handle_key(code: KeyCode, mode: &mut InputMode, notice_shown: bool) -> InputOutcome {
    if notice_shown {
        return InputOutcome::Dispatch(Msg::NoticeDismissed);
    }

    match mode {
        InputMode::PathEntry(buffer) => match code {
            KeyCode::Enter => {
                let path = buffer.trim().to_string();
                *mode = InputMode::Normal;
                if path.is_empty() {
                    InputOutcome::Redraw
                } else {
                    InputOutcome::Dispatch(Msg::UploadPicked(PathBuf::from(path)))
                }
            }
            KeyCode::Esc => {
                *mode = InputMode::Normal;
                InputOutcome::Redraw
            }
            KeyCode::Backspace => {
                buffer.pop();
                InputOutcome::Redraw
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                InputOutcome::Redraw
            }
            _ => InputOutcome::None,
        },
        InputMode::Normal => match code {
            KeyCode::Char('q') => InputOutcome::Quit,
            KeyCode::Char('s') => InputOutcome::Dispatch(Msg::StartClicked),
            KeyCode::Char('x') => InputOutcome::Dispatch(Msg::StopClicked),
            KeyCode::Char('u') => {
                *mode = InputMode::PathEntry(String::new());
                InputOutcome::Redraw
            }
            _ => InputOutcome::None,
        },
    }
}

/// Terminals deliver a file drop as pasted text, one path per line and
/// sometimes quoted. The core uses only the first path of a multi-drop.
pub fn paths_from_paste(text: &str) -> Vec<PathBuf> {
    text.lines()
        .map(str::trim)
        .map(|line| line.trim_matches(|c| c == '\'' || c == '"'))
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::{
    shell::{Key, ShellInput},
    wheel::{Point, scroll::SCROLL_NOTCH_DELTA},
};

#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    Quit,
    Shell(ShellInput),
}

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<InputAction> {
        let shell_key = match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
                return Some(InputAction::Quit);
            }
            (KeyCode::F(2), _) => return Some(InputAction::Shell(ShellInput::SwitchSkin)),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => Key::Up,
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => Key::Down,
            (KeyCode::Left, _) => Key::Left,
            (KeyCode::Right, _) => Key::Right,
            (KeyCode::Enter, _) => Key::Enter,
            (KeyCode::Char(' '), _) => Key::Space,
            (KeyCode::Esc, _) => Key::Escape,
            (KeyCode::Backspace, _) => Key::Backspace,
            _ => return None,
        };
        Some(InputAction::Shell(ShellInput::Key(shell_key)))
    }

    /// Mouse positions become the center of the clicked cell, in virtual
    /// pixels. One scroll notch is one wheel step.
    pub fn handle_mouse(mouse: MouseEvent) -> Option<ShellInput> {
        let at = Point::from_cell(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(ShellInput::PointerDown(at)),
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => Some(ShellInput::PointerMove(at)),
            MouseEventKind::Up(MouseButton::Left) => Some(ShellInput::PointerUp(at)),
            MouseEventKind::ScrollDown => Some(ShellInput::Scroll {
                at,
                delta: SCROLL_NOTCH_DELTA,
            }),
            MouseEventKind::ScrollUp => Some(ShellInput::Scroll {
                at,
                delta: -SCROLL_NOTCH_DELTA,
            }),
            _ => None,
        }
    }
}

//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction, Vec2, CELL_PX_H, CELL_PX_W};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Move(Direction::Right))
        }

        // Actions
        KeyCode::Char(' ') => Some(GameAction::Shoot),
        KeyCode::Enter => Some(GameAction::Confirm),
        KeyCode::Esc => Some(GameAction::Back),
        KeyCode::Char(c @ '1'..='9') => Some(GameAction::Pick(c as u8 - b'1')),

        // Round control
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::NewRound),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Logical pixel position of a left click (centre of the clicked cell).
pub fn click_position(event: MouseEvent) -> Option<Vec2> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(cell_center(event.column, event.row)),
        _ => None,
    }
}

pub fn cell_center(col: u16, row: u16) -> Vec2 {
    Vec2::new(
        (col as u32 * CELL_PX_W + CELL_PX_W / 2) as f32,
        (row as u32 * CELL_PX_H + CELL_PX_H / 2) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(GameAction::Move(Direction::Right))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(GameAction::Move(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::Move(Direction::Down))
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Shoot)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Confirm)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(GameAction::Back)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Reset)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(GameAction::NewRound)
        );
    }

    #[test]
    fn test_number_keys_pick_zero_based() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(GameAction::Pick(0))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('9'))),
            Some(GameAction::Pick(8))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_left_click_maps_to_cell_center() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 80,
            row: 22,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(click_position(click), Some(Vec2::new(644.0, 360.0)));

        let right = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click
        };
        assert_eq!(click_position(right), None);
    }
}

use crate::game::FrameInput;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// InputSystem turns SDL2 events and device state into one `FrameInput`
///
/// # Architecture
///
/// Input processing happens in two phases each frame:
/// 1. Drain the event queue for edges (key/button presses, quit)
/// 2. Sample the keyboard and mouse for the held flap signal
///
/// The flap input is the space key or the left mouse button; either one
/// counts for both the press edge and the held level.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Process SDL2 events for this frame
    pub fn poll(&mut self, event_pump: &mut EventPump) -> FrameInput {
        let mut input = FrameInput::default();

        for event in event_pump.poll_iter() {
            apply_event(&mut input, &event);
        }

        let space_held = event_pump.keyboard_state().is_scancode_pressed(Scancode::Space);
        let mouse_held = event_pump.mouse_state().left();
        input.flap_held = space_held || mouse_held || input.flap_pressed;

        input
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Folds one event into the frame's input.
///
/// Mouse coordinates arrive already scaled to the canvas logical size.
fn apply_event(input: &mut FrameInput, event: &Event) {
    match event {
        Event::Quit { .. } => {
            input.quit = true;
        }
        Event::KeyDown {
            keycode: Some(Keycode::Space),
            repeat: false,
            ..
        } => {
            input.flap_pressed = true;
        }
        Event::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => {
            input.flap_pressed = true;
            input.click = Some((*x, *y));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(keycode: Keycode, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    fn mouse_down(mouse_btn: MouseButton, x: i32, y: i32) -> Event {
        Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn,
            clicks: 1,
            x,
            y,
        }
    }

    #[test]
    fn test_space_press_is_a_flap() {
        let mut input = FrameInput::default();
        apply_event(&mut input, &key_down(Keycode::Space, false));
        assert!(input.flap_pressed);
        assert_eq!(input.click, None);
    }

    #[test]
    fn test_key_repeat_and_other_keys_ignored() {
        let mut input = FrameInput::default();
        apply_event(&mut input, &key_down(Keycode::Space, true));
        apply_event(&mut input, &key_down(Keycode::Escape, false));
        assert_eq!(input, FrameInput::default());
    }

    #[test]
    fn test_left_click_records_position() {
        let mut input = FrameInput::default();
        apply_event(&mut input, &mouse_down(MouseButton::Right, 1, 2));
        assert_eq!(input.click, None);

        apply_event(&mut input, &mouse_down(MouseButton::Left, 400, 560));
        assert!(input.flap_pressed);
        assert_eq!(input.click, Some((400, 560)));
    }

    #[test]
    fn test_quit() {
        let mut input = FrameInput::default();
        apply_event(&mut input, &Event::Quit { timestamp: 0 });
        assert!(input.quit);
    }
}

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
};

/// Pixel wheel deltas are divided by this to match line-based wheels
const PIXELS_PER_LINE: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button
    Primary,
    /// Right mouse button
    Secondary,
    Middle,
    Other,
}

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::Primary,
            MouseButton::Right => Self::Secondary,
            MouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}

/// Pointer input, positions in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32, button: PointerButton },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32, button: PointerButton },
    /// Positive values scroll away from the user (zoom in)
    Wheel { delta: f32 },
}

impl PointerEvent {
    /// Primary button press
    pub const fn down(x: f32, y: f32) -> Self {
        Self::Down {
            x,
            y,
            button: PointerButton::Primary,
        }
    }

    /// Primary button release
    pub const fn up(x: f32, y: f32) -> Self {
        Self::Up {
            x,
            y,
            button: PointerButton::Primary,
        }
    }
}

/// Turns winit window events into [`PointerEvent`]s.
///
/// winit reports button changes without a position, so the last cursor
/// position is remembered and attached to `Down`/`Up`.
#[derive(Debug, Default)]
pub struct PointerTranslator {
    cursor: (f32, f32),
}

impl PointerTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(self.cursor_moved(*position)),
            WindowEvent::MouseInput { state, button, .. } => Some(self.button(*state, *button)),
            WindowEvent::MouseWheel { delta, .. } => Self::wheel(*delta),
            _ => None,
        }
    }

    fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> PointerEvent {
        self.cursor = (position.x as f32, position.y as f32);
        PointerEvent::Move {
            x: self.cursor.0,
            y: self.cursor.1,
        }
    }

    fn button(&self, state: ElementState, button: MouseButton) -> PointerEvent {
        let (x, y) = self.cursor;
        let button = button.into();
        match state {
            ElementState::Pressed => PointerEvent::Down { x, y, button },
            ElementState::Released => PointerEvent::Up { x, y, button },
        }
    }

    fn wheel(delta: MouseScrollDelta) -> Option<PointerEvent> {
        let delta = match delta {
            MouseScrollDelta::LineDelta(_, lines) => lines,
            MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => y as f32 / PIXELS_PER_LINE,
        };
        (delta != 0.0).then_some(PointerEvent::Wheel { delta })
    }
}

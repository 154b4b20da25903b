use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    Cancel,
}

/// Pointer event in the receiving control's local coordinates.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub event: PointerEventKind,
    pub position: Point,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(event: PointerEventKind, position: Point) -> Self {
        Self {
            event,
            position,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Mouse wheel notches. Positive `steps_y` is "wheel up".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelEvent {
    pub position: Point,
    pub steps_x: i32,
    pub steps_y: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool, // Cmd on Mac, Win key on Windows
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };
    pub const CTRL_SHIFT: Modifiers = Modifiers {
        ctrl: true,
        shift: true,
        ..Modifiers::NONE
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A letter/symbol key, reported by its unshifted character.
    Character(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Space,
    F(u8), // F1-F12
}

#[derive(Clone, Debug)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    pub is_repeat: bool,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            is_repeat: false,
        }
    }
}

/// Raw character input as delivered by the host, control codes included.
#[derive(Clone, Debug)]
pub struct TextInputEvent {
    pub text: String,
}

#[derive(Clone, Debug)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Wheel(WheelEvent),
    Key(KeyEvent),
    Text(TextInputEvent),
    /// The receiving control lost focus; transient interaction state must end.
    FocusLost,
}

impl InputEvent {
    pub fn key(key: Key, modifiers: Modifiers) -> Self {
        InputEvent::Key(KeyEvent::new(key, modifiers))
    }

    pub fn text(text: impl Into<String>) -> Self {
        InputEvent::Text(TextInputEvent { text: text.into() })
    }

    pub fn pointer(event: PointerEventKind, position: Point) -> Self {
        InputEvent::Pointer(PointerEvent::new(event, position))
    }
}

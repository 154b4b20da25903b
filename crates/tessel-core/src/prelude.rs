pub use crate::clipboard::{Clipboard, MemoryClipboard};
pub use crate::geometry::{Axis, Direction, Margins, Point, Rect, Size};
pub use crate::input::{
    InputEvent, Key, KeyEvent, Modifiers, PointerButton, PointerEvent, PointerEventKind,
    TextInputEvent, WheelEvent,
};
pub use crate::measure::{MonospaceMeasure, TextMeasure, TextSize};
pub use crate::observable::{Observable, SubId};

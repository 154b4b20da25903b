//! Scroll viewports and single-line text editing.
//!
//! The geometry in `scrollbar` is pure. `ScrollViewport` keeps offsets
//! clamped and drives scrollbar dragging, paging and wheel input.
//! `TextEditState` is the codepoint-indexed buffer, and `TextInputController`
//! routes input into it. `TextBox` puts them together as one control.

pub mod caret;
pub mod scroll;
pub mod scrollbar;
pub mod text_edit;
pub mod text_input;
pub mod textbox;

pub use caret::{CaretBlink, caret_x, closest_boundary};
pub use scroll::{ScrollConfig, ScrollViewport};
pub use scrollbar::ScrollbarVisibility;
pub use text_edit::TextEditState;
pub use text_input::{CharInput, EditCommand, EditContext, TextInputController, classify_char};
pub use textbox::{TextBox, TextInputConfig};

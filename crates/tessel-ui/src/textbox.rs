//! # TextBox
//!
//! A single-line editable text control. It composes a `TextEditState`, a
//! horizontally scrolling `ScrollViewport` with hidden bars, a
//! `TextInputController` and a `CaretBlink`, and exposes only the surface a
//! host needs: text and cursor access, layout, input, and the rectangles to
//! paint.
//!
//! ```rust
//! use tessel_core::*;
//! use tessel_ui::TextBox;
//!
//! let mut tb = TextBox::new(MonospaceMeasure::new(10.0, 16.0));
//! let mut clipboard = MemoryClipboard::default();
//! tb.arrange(Size::new(60, 20));
//! tb.set_focused(true);
//!
//! tb.handle_input(&InputEvent::text("hello world"), &mut clipboard);
//! assert_eq!(tb.text(), "hello world");
//! // caret at 110px in a 60px box: the text scrolled left
//! assert_eq!(tb.scroll_x(), 50);
//! ```

use std::ops::Range;
use std::time::Duration;

use tessel_core::*;

use crate::caret::{CaretBlink, caret_x};
use crate::scroll::{ScrollConfig, ScrollViewport};
use crate::scrollbar::ScrollbarVisibility;
use crate::text_edit::TextEditState;
use crate::text_input::{self, EditContext, TextInputController};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextInputConfig {
    /// Space between the control's edge and the text.
    pub padding: Margins,
    /// Full on/off cycle of the caret.
    pub blink_period: Duration,
}

impl Default for TextInputConfig {
    fn default() -> Self {
        Self {
            padding: Margins::ZERO,
            blink_period: Duration::from_millis(1000),
        }
    }
}

impl TextInputConfig {
    pub fn with_padding(mut self, padding: Margins) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_blink_period(mut self, period: Duration) -> Self {
        self.blink_period = period;
        self
    }
}

pub struct TextBox {
    edit: TextEditState,
    viewport: ScrollViewport,
    controller: TextInputController,
    blink: CaretBlink,
    measure: Box<dyn TextMeasure>,
    config: TextInputConfig,
    size: Size,
    focused: bool,
    text_changed: Observable<String>,
}

impl std::fmt::Debug for TextBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBox")
            .field("edit", &self.edit)
            .field("scroll_x", &self.scroll_x())
            .field("size", &self.size)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

impl TextBox {
    pub fn new(measure: impl TextMeasure + 'static) -> Self {
        Self::with_config(measure, TextInputConfig::default())
    }

    pub fn with_config(measure: impl TextMeasure + 'static, config: TextInputConfig) -> Self {
        let viewport = ScrollViewport::new(ScrollConfig::default())
            .with_axis(Axis::Horizontal, true, ScrollbarVisibility::AlwaysOff)
            .with_axis(Axis::Vertical, false, ScrollbarVisibility::AlwaysOff);
        Self {
            edit: TextEditState::new(),
            viewport,
            controller: TextInputController::new(),
            blink: CaretBlink::new(config.blink_period),
            measure: Box::new(measure),
            config,
            size: Size::ZERO,
            focused: false,
            text_changed: Observable::new(String::new()),
        }
    }

    pub fn config(&self) -> &TextInputConfig {
        &self.config
    }

    pub fn text(&self) -> String {
        self.edit.text()
    }

    /// Replace the text. Cursor and selection are clamped to the new length.
    pub fn set_text(&mut self, text: &str) {
        self.edit.set_text(text);
        self.after_change();
        self.text_changed.set(self.edit.text());
    }

    pub fn cursor(&self) -> usize {
        self.edit.cursor()
    }

    pub fn selection_anchor(&self) -> usize {
        self.edit.selection_anchor()
    }

    pub fn selection(&self) -> Range<usize> {
        self.edit.selection_range()
    }

    /// Move the caret, collapsing the selection. Restarts the blink.
    pub fn set_cursor(&mut self, pos: usize) {
        self.edit.move_cursor(pos, false);
        self.after_change();
    }

    /// Select `anchor..cursor` (either order), caret at `cursor`.
    pub fn set_selection(&mut self, anchor: usize, cursor: usize) {
        self.edit.move_cursor(anchor, false);
        self.edit.move_cursor(cursor, true);
        self.after_change();
    }

    pub fn on_text_changed(&mut self, f: impl Fn(&String, &String) + 'static) -> SubId {
        self.text_changed.subscribe(f)
    }

    pub fn remove_text_changed_handler(&mut self, id: SubId) -> bool {
        self.text_changed.unsubscribe(id)
    }

    /// Lay the box out at `size`; the text area is `size` minus padding.
    pub fn arrange(&mut self, size: Size) {
        self.size = size.non_negative();
        let client = self.size.shrink(self.config.padding).non_negative();
        self.viewport.set_bounds(self.size);
        self.viewport.set_visible_size(client);
        self.after_change();
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.focused == focused {
            return;
        }
        self.focused = focused;
        if focused {
            self.blink.reset();
        } else {
            let text_origin = self.text_origin();
            let mut noop = MemoryClipboard::default();
            let mut ctx = EditContext {
                edit: &mut self.edit,
                viewport: &mut self.viewport,
                clipboard: &mut noop,
                measure: &*self.measure,
                text_origin,
            };
            self.controller.focus_lost(&mut ctx);
        }
        log::debug!("textbox focus {focused}");
    }

    fn text_origin(&self) -> Point {
        Point::new(self.config.padding.left, self.config.padding.top)
    }

    /// Feed one event. Unfocused boxes ignore everything.
    pub fn handle_input(&mut self, ev: &InputEvent, clipboard: &mut dyn Clipboard) -> bool {
        if !self.focused {
            return false;
        }
        if matches!(ev, InputEvent::FocusLost) {
            self.set_focused(false);
            return false;
        }
        let before = (self.edit.cursor(), self.edit.selection_anchor(), self.edit.revision());
        let handled = {
            let text_origin = self.text_origin();
            let mut ctx = EditContext {
                edit: &mut self.edit,
                viewport: &mut self.viewport,
                clipboard,
                measure: &*self.measure,
                text_origin,
            };
            self.controller.handle_input(ev, &mut ctx)
        };
        let after = (self.edit.cursor(), self.edit.selection_anchor(), self.edit.revision());
        if after != before {
            self.blink.reset();
        }
        if after.2 != before.2 {
            self.text_changed.set(self.edit.text());
        }
        handled
    }

    /// Advance the caret blink clock.
    pub fn advance(&mut self, dt: Duration) {
        self.blink.advance(dt);
    }

    pub fn scroll_x(&self) -> i32 {
        self.viewport.offset(Axis::Horizontal)
    }

    fn line_height(&self) -> i32 {
        self.measure.line_height().ceil() as i32
    }

    /// Caret rectangle in local coordinates, while focused and in the
    /// visible half of the blink cycle.
    pub fn caret_rect(&self) -> Option<Rect> {
        if !self.focused || !self.blink.visible() {
            return None;
        }
        let x = caret_x(&self.edit, self.edit.cursor(), &*self.measure) as i32;
        let origin = self.text_origin();
        Some(Rect::new(
            origin.x + x - self.scroll_x(),
            origin.y,
            1,
            self.line_height(),
        ))
    }

    /// Selection highlight in local coordinates. May extend past the text
    /// area when the selection is partly scrolled out; hosts clip.
    pub fn selection_rect(&self) -> Option<Rect> {
        if !self.edit.has_selection() {
            return None;
        }
        let range = self.edit.selection_range();
        let start = caret_x(&self.edit, range.start, &*self.measure) as i32;
        let end = caret_x(&self.edit, range.end, &*self.measure) as i32;
        let origin = self.text_origin();
        Some(Rect::new(
            origin.x + start - self.scroll_x(),
            origin.y,
            end - start,
            self.line_height(),
        ))
    }

    fn after_change(&mut self) {
        self.blink.reset();
        text_input::sync_content(&self.edit, &mut self.viewport, &*self.measure);
        let text_origin = self.text_origin();
        let mut noop = MemoryClipboard::default();
        let mut ctx = EditContext {
            edit: &mut self.edit,
            viewport: &mut self.viewport,
            clipboard: &mut noop,
            measure: &*self.measure,
            text_origin,
        };
        text_input::ensure_caret_visible(&mut ctx);
    }
}

//! Input routing for single-line text editing.
//!
//! `TextInputController` turns key, character and pointer events into
//! `TextEditState` operations, talks to the clipboard, and keeps the caret in
//! view by driving the horizontal offset of a `ScrollViewport`. It owns only
//! session state (whether a pointer selection is in progress); the buffer,
//! viewport, clipboard and font arrive borrowed through `EditContext`.

use tessel_core::*;

use crate::caret::{caret_x, closest_boundary};
use crate::scroll::ScrollViewport;
use crate::text_edit::TextEditState;

/// Editing commands reachable from both shortcuts and control characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditCommand {
    DeleteBackward,
    DeleteForward,
    SelectAll,
    Copy,
    Cut,
    Paste,
}

/// What a raw input character means to a text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharInput {
    Insert(char),
    Command(EditCommand),
    Ignore,
}

/// Backspace and the Ctrl+A/C/V/X control codes map to their commands; tab,
/// newlines, escape and any other control character are never inserted.
pub fn classify_char(c: char) -> CharInput {
    match c {
        '\u{8}' => CharInput::Command(EditCommand::DeleteBackward),
        '\u{1}' => CharInput::Command(EditCommand::SelectAll),
        '\u{3}' => CharInput::Command(EditCommand::Copy),
        '\u{16}' => CharInput::Command(EditCommand::Paste),
        '\u{18}' => CharInput::Command(EditCommand::Cut),
        '\t' | '\n' | '\r' | '\u{1b}' => CharInput::Ignore,
        c if c.is_control() => CharInput::Ignore,
        c => CharInput::Insert(c),
    }
}

/// Borrowed collaborators for one input event.
pub struct EditContext<'a> {
    pub edit: &'a mut TextEditState,
    pub viewport: &'a mut ScrollViewport,
    pub clipboard: &'a mut dyn Clipboard,
    pub measure: &'a dyn TextMeasure,
    /// Where text x = 0 sits in the control's local coordinates (unscrolled).
    pub text_origin: Point,
}

#[derive(Debug, Default)]
pub struct TextInputController {
    selecting: bool,
    // command just run from a key event; its control-char echo is dropped
    echo: Option<EditCommand>,
}

impl TextInputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn handle_input(&mut self, ev: &InputEvent, ctx: &mut EditContext<'_>) -> bool {
        match ev {
            InputEvent::Key(k) => self.handle_key(k, ctx),
            InputEvent::Text(t) => self.handle_text(&t.text, ctx),
            InputEvent::Pointer(p) => self.handle_pointer(p, ctx),
            InputEvent::Wheel(_) => false,
            InputEvent::FocusLost => {
                self.focus_lost(ctx);
                false
            }
        }
    }

    /// Returns false for keys the host should route elsewhere (focus
    /// traversal, function keys, escape).
    pub fn handle_key(&mut self, ev: &KeyEvent, ctx: &mut EditContext<'_>) -> bool {
        self.echo = None;
        let m = ev.modifiers;
        match ev.key {
            Key::ArrowLeft | Key::ArrowRight => {
                let dir = if ev.key == Key::ArrowLeft {
                    Direction::Backward
                } else {
                    Direction::Forward
                };
                if m.ctrl {
                    ctx.edit.move_cursor_by_word(dir, m.shift);
                } else {
                    ctx.edit.move_cursor_by(dir.signum() as isize, m.shift);
                }
            }
            Key::Home => ctx.edit.move_cursor(0, m.shift),
            Key::End => ctx.edit.move_cursor(ctx.edit.len(), m.shift),
            Key::Backspace => self.run_key_command(EditCommand::DeleteBackward, ctx),
            Key::Delete => self.run_key_command(EditCommand::DeleteForward, ctx),
            Key::Character(c) if m.ctrl => {
                let cmd = match c.to_ascii_lowercase() {
                    'a' => EditCommand::SelectAll,
                    'c' => EditCommand::Copy,
                    'x' => EditCommand::Cut,
                    'v' => EditCommand::Paste,
                    _ => return true,
                };
                self.run_key_command(cmd, ctx);
            }
            Key::Escape | Key::Tab | Key::F(_) => return false,
            _ => return true,
        }
        ensure_caret_visible(ctx);
        true
    }

    fn run_key_command(&mut self, cmd: EditCommand, ctx: &mut EditContext<'_>) {
        apply_command(cmd, ctx);
        self.echo = Some(cmd);
    }

    /// Raw character input. Control characters never reach the buffer.
    pub fn handle_text(&mut self, text: &str, ctx: &mut EditContext<'_>) -> bool {
        let mut pending = String::new();
        for c in text.chars() {
            match classify_char(c) {
                CharInput::Insert(c) => {
                    self.echo = None;
                    pending.push(c);
                }
                CharInput::Command(cmd) => {
                    flush_insert(&mut pending, ctx);
                    if self.echo.take() == Some(cmd) {
                        continue;
                    }
                    apply_command(cmd, ctx);
                }
                CharInput::Ignore => {}
            }
        }
        flush_insert(&mut pending, ctx);
        ensure_caret_visible(ctx);
        true
    }

    pub fn handle_pointer(&mut self, ev: &PointerEvent, ctx: &mut EditContext<'_>) -> bool {
        self.echo = None;
        match ev.event {
            PointerEventKind::Down(PointerButton::Primary) => {
                let idx = hit_index(ev.position, ctx);
                ctx.edit.move_cursor(idx, ev.modifiers.shift);
                self.selecting = true;
                ensure_caret_visible(ctx);
                true
            }
            PointerEventKind::Move if self.selecting => {
                let idx = hit_index(ev.position, ctx);
                ctx.edit.move_cursor(idx, true);
                ensure_caret_visible(ctx);
                true
            }
            PointerEventKind::Up(PointerButton::Primary) | PointerEventKind::Cancel => {
                std::mem::take(&mut self.selecting)
            }
            _ => false,
        }
    }

    pub fn focus_lost(&mut self, ctx: &mut EditContext<'_>) {
        self.selecting = false;
        self.echo = None;
        ctx.viewport.cancel_drags();
    }
}

fn flush_insert(pending: &mut String, ctx: &mut EditContext<'_>) {
    if pending.is_empty() {
        return;
    }
    ctx.edit.insert_text(pending);
    pending.clear();
    sync_content(ctx.edit, ctx.viewport, ctx.measure);
}

fn hit_index(pos: Point, ctx: &EditContext<'_>) -> usize {
    let x = pos
        .x
        .saturating_sub(ctx.text_origin.x)
        .saturating_add(ctx.viewport.offset(Axis::Horizontal));
    closest_boundary(ctx.edit, x as f32, ctx.measure)
}

/// Run `cmd` against the buffer and clipboard.
///
/// Copy or cut with nothing selected clears the clipboard. An empty clipboard
/// read pastes nothing and leaves the selection alone.
pub fn apply_command(cmd: EditCommand, ctx: &mut EditContext<'_>) {
    log::debug!("edit command {cmd:?}");
    match cmd {
        EditCommand::DeleteBackward => ctx.edit.delete_selection_or_char(Direction::Backward),
        EditCommand::DeleteForward => ctx.edit.delete_selection_or_char(Direction::Forward),
        EditCommand::SelectAll => ctx.edit.select_all(),
        EditCommand::Copy => match ctx.edit.copy_selection() {
            Some(s) => ctx.clipboard.set_text(&s),
            None => ctx.clipboard.clear(),
        },
        EditCommand::Cut => match ctx.edit.cut_selection() {
            Some(s) => ctx.clipboard.set_text(&s),
            None => ctx.clipboard.clear(),
        },
        EditCommand::Paste => {
            let mut txt = ctx.clipboard.get_text();
            // single line: control characters and newlines are dropped
            txt.retain(|c| !c.is_control());
            if !txt.is_empty() {
                ctx.edit.paste_at(&txt);
            }
        }
    }
    sync_content(ctx.edit, ctx.viewport, ctx.measure);
}

/// Size the viewport's virtual extent to the measured text.
pub fn sync_content(edit: &TextEditState, viewport: &mut ScrollViewport, measure: &dyn TextMeasure) {
    let size = measure.measure(&edit.text());
    let natural = Size::new(size.width.ceil() as i32, size.line_height.ceil() as i32);
    viewport.arrange(viewport.visible_size(), natural);
}

/// Scroll horizontally so the caret lies inside the visible window.
pub fn ensure_caret_visible(ctx: &mut EditContext<'_>) {
    let caret = caret_x(ctx.edit, ctx.edit.cursor(), ctx.measure) as i32;
    let scroll = ctx.viewport.offset(Axis::Horizontal);
    let width = ctx.viewport.visible_size().width;
    if caret < scroll {
        ctx.viewport.set_scroll_offset(Axis::Horizontal, caret.max(0));
    } else if caret > scroll + width {
        ctx.viewport
            .set_scroll_offset(Axis::Horizontal, (caret - width).max(0));
    }
}

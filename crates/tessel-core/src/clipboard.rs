/// Clipboard capability handed to text controls.
///
/// Operations are infallible from the control's point of view: a clipboard
/// that cannot be reached reads as empty and ignores writes. Adapters over
/// real platform clipboards log their failures instead of returning them.
pub trait Clipboard {
    fn set_text(&mut self, text: &str);
    fn get_text(&mut self) -> String;
    fn clear(&mut self);
}

/// Process-local clipboard. The fallback when no system clipboard exists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) {
        self.contents = Some(text.to_owned());
    }

    fn get_text(&mut self) -> String {
        self.contents.clone().unwrap_or_default()
    }

    fn clear(&mut self) {
        self.contents = None;
    }
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text)
    }

    fn get_text(&mut self) -> String {
        (**self).get_text()
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

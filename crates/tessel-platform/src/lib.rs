//! Platform adapters.
//!
//! With the `desktop` feature, `SystemClipboard` talks to the OS clipboard
//! through arboard. `default_clipboard` picks it when it can connect and
//! otherwise hands out a process-local `MemoryClipboard`, so controls always
//! have something to copy into.

use tessel_core::{Clipboard, MemoryClipboard};

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("system clipboard is unavailable")]
    Unavailable(#[source] BoxError),
    #[error("failed to read from the clipboard")]
    Read(#[source] BoxError),
    #[error("failed to write to the clipboard")]
    Write(#[source] BoxError),
}

#[cfg(feature = "desktop")]
pub use desktop::SystemClipboard;

#[cfg(feature = "desktop")]
mod desktop {
    use super::ClipboardError;
    use tessel_core::Clipboard;

    fn report(err: ClipboardError) {
        log::warn!("{:#}", anyhow::Error::from(err));
    }

    /// The OS clipboard. Failures are logged and read as empty.
    pub struct SystemClipboard {
        inner: arboard::Clipboard,
    }

    impl std::fmt::Debug for SystemClipboard {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("SystemClipboard").finish_non_exhaustive()
        }
    }

    impl SystemClipboard {
        pub fn connect() -> Result<Self, ClipboardError> {
            let inner =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.into()))?;
            log::debug!("connected to system clipboard");
            Ok(Self { inner })
        }

        /// Non-text contents read as an empty string.
        pub fn try_get_text(&mut self) -> Result<String, ClipboardError> {
            match self.inner.get_text() {
                Ok(text) => Ok(text),
                Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
                Err(e) => Err(ClipboardError::Read(e.into())),
            }
        }

        pub fn try_set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.inner
                .set_text(text)
                .map_err(|e| ClipboardError::Write(e.into()))
        }

        pub fn try_clear(&mut self) -> Result<(), ClipboardError> {
            self.inner
                .clear()
                .map_err(|e| ClipboardError::Write(e.into()))
        }
    }

    impl Clipboard for SystemClipboard {
        fn set_text(&mut self, text: &str) {
            if let Err(e) = self.try_set_text(text) {
                report(e);
            }
        }

        fn get_text(&mut self) -> String {
            self.try_get_text().unwrap_or_else(|e| {
                report(e);
                String::new()
            })
        }

        fn clear(&mut self) {
            if let Err(e) = self.try_clear() {
                report(e);
            }
        }
    }
}

/// The system clipboard when one can be reached, else an in-process one.
pub fn default_clipboard() -> Box<dyn Clipboard> {
    #[cfg(feature = "desktop")]
    {
        use anyhow::Context;
        match SystemClipboard::connect().context("connecting to the system clipboard") {
            Ok(cb) => return Box::new(cb),
            Err(e) => log::warn!("{e:#}; falling back to an in-process clipboard"),
        }
    }
    Box::new(MemoryClipboard::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_keeps_its_source() {
        let err = ClipboardError::Read("no owner".into());
        assert_eq!(err.to_string(), "failed to read from the clipboard");
        let chained = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chained, "failed to read from the clipboard: no owner");
    }

    // Holds with and without a display server: the fallback is a working
    // clipboard too.
    #[test]
    fn default_clipboard_is_usable() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut cb = default_clipboard();
        cb.set_text("tessel");
        let got = cb.get_text();
        if cfg!(not(feature = "desktop")) {
            assert_eq!(got, "tessel");
        }
        cb.clear();
    }
}

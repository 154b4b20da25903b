//! # Geometry, observable fields, and collaborators
//!
//! `tessel-core` holds the pieces every Tessel control shares. There are four
//! of them:
//!
//! - `geometry`: integer `Point`, `Size`, `Rect`, `Margins` and the `Axis`
//!   selector used to write axis-generic scroll arithmetic once.
//! - `Observable<T>`: a value with change handlers that fire only when the
//!   value actually changes.
//! - `input`: the event model hosts translate their platform events into.
//! - `TextMeasure` and `Clipboard`: collaborator traits the controls consume
//!   without knowing where fonts or the system clipboard come from.
//!
//! ## Observables
//!
//! ```rust
//! use tessel_core::*;
//!
//! let mut offset = Observable::new(0);
//! let id = offset.subscribe(|old, new| println!("offset {old} -> {new}"));
//! assert!(offset.set(10));
//! assert!(!offset.set(10)); // unchanged, nobody is notified
//! offset.unsubscribe(id);
//! ```
//!
//! ## Collaborators
//!
//! Controls never reach for a global clipboard or font. Hosts pass them in:
//!
//! ```rust
//! use tessel_core::*;
//!
//! let font = MonospaceMeasure::new(8.0, 16.0);
//! assert_eq!(font.measure("abc").width, 24.0);
//!
//! let mut clipboard = MemoryClipboard::default();
//! clipboard.set_text("hello");
//! assert_eq!(clipboard.get_text(), "hello");
//! ```

pub mod clipboard;
pub mod geometry;
pub mod input;
pub mod measure;
pub mod observable;
pub mod prelude;

pub use clipboard::*;
pub use geometry::*;
pub use input::*;
pub use measure::*;
pub use observable::*;

//! Shaped text measurement backed by cosmic-text.
//!
//! One `FontSystem` is shared by the whole process behind a mutex. Widths are
//! cached per (size, string): caret hit testing measures every prefix of the
//! text on each click, so the same strings come back often.

use ahash::AHashMap;
use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping};
use once_cell::sync::OnceCell;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tessel_core::{TextMeasure, TextSize};

const CACHE_LIMIT: usize = 4096;

struct Engine {
    fs: FontSystem,
    // (px bits, text) -> advance width
    widths: AHashMap<(u32, String), f32>,
}

static ENGINE: OnceCell<Mutex<Engine>> = OnceCell::new();

fn engine() -> MutexGuard<'static, Engine> {
    ENGINE
        .get_or_init(|| {
            log::debug!("loading system fonts");
            Mutex::new(Engine {
                fs: FontSystem::new(),
                widths: AHashMap::new(),
            })
        })
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Register extra font data (TTF/OTF bytes) with the shared font system.
pub fn load_font_data(data: Vec<u8>) {
    let mut eng = engine();
    eng.fs.db_mut().load_font_data(data);
    eng.widths.clear();
}

// Shape a single line (no wrapping) and return the right edge of its last glyph.
fn shape_width(eng: &mut Engine, text: &str, px: f32, line_height: f32) -> f32 {
    let mut buf = Buffer::new(&mut eng.fs, Metrics::new(px, line_height));
    {
        let mut b = buf.borrow_with(&mut eng.fs);
        b.set_size(None, None);
        b.set_text(text, &Attrs::new(), Shaping::Advanced, None);
        b.shape_until_scroll(true);
    }

    let mut width = 0.0f32;
    for run in buf.layout_runs() {
        for g in run.glyphs {
            width = width.max(g.x + g.w);
        }
    }
    width
}

/// Measures text with the shared font system at a fixed pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CosmicMeasure {
    px: f32,
    line_height: f32,
}

impl CosmicMeasure {
    /// Line height defaults to 1.3 times the font size.
    pub fn new(px: f32) -> Self {
        Self {
            px,
            line_height: px * 1.3,
        }
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn px(&self) -> f32 {
        self.px
    }
}

impl TextMeasure for CosmicMeasure {
    fn measure(&self, text: &str) -> TextSize {
        if text.is_empty() {
            return TextSize {
                width: 0.0,
                line_height: self.line_height,
            };
        }
        let mut eng = engine();
        let key = (self.px.to_bits(), text.to_owned());
        let width = match eng.widths.get(&key) {
            Some(&w) => w,
            None => {
                let w = shape_width(&mut eng, text, self.px, self.line_height);
                if eng.widths.len() >= CACHE_LIMIT {
                    eng.widths.clear();
                }
                eng.widths.insert(key, w);
                w
            }
        };
        TextSize {
            width,
            line_height: self.line_height,
        }
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

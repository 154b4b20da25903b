use std::rc::Rc;

/// Measured extent of a single line of text, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextSize {
    pub width: f32,
    pub line_height: f32,
}

/// Font measurement, consumed as a black box.
///
/// Implementations must be monotonic in prefix length: measuring a longer
/// prefix of the same string never yields a smaller width. Caret hit testing
/// and auto-scroll rely on it.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> TextSize;

    fn line_height(&self) -> f32 {
        self.measure("").line_height
    }
}

impl<M: TextMeasure + ?Sized> TextMeasure for &M {
    fn measure(&self, text: &str) -> TextSize {
        (**self).measure(text)
    }
}

impl<M: TextMeasure + ?Sized> TextMeasure for Box<M> {
    fn measure(&self, text: &str) -> TextSize {
        (**self).measure(text)
    }
}

impl<M: TextMeasure + ?Sized> TextMeasure for Rc<M> {
    fn measure(&self, text: &str) -> TextSize {
        (**self).measure(text)
    }
}

/// Fixed advance per codepoint. Used headless and in tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
    pub line_height: f32,
}

impl MonospaceMeasure {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str) -> TextSize {
        TextSize {
            width: text.chars().count() as f32 * self.advance,
            line_height: self.line_height,
        }
    }
}

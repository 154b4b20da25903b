use std::time::Duration;

use tessel_core::TextMeasure;

use crate::text_edit::TextEditState;

/// Caret x for codepoint `index`, in unscrolled text coordinates.
pub fn caret_x(edit: &TextEditState, index: usize, measure: &dyn TextMeasure) -> f32 {
    if index == 0 {
        return 0.0;
    }
    measure.measure(&edit.prefix(index)).width
}

/// Insertion point nearest to `x` (unscrolled text coordinates).
///
/// Walks prefixes from one codepoint upward and stops at the first boundary
/// that is no closer to `x` than the one before it; ties keep the earlier
/// boundary. Past the last character the answer is the buffer length.
pub fn closest_boundary(edit: &TextEditState, x: f32, measure: &dyn TextMeasure) -> usize {
    let chars = edit.chars();
    let mut prefix = String::with_capacity(chars.len() * 2);
    let mut old_width = 0.0f32;
    for (i, c) in chars.iter().enumerate() {
        prefix.push(*c);
        let width = measure.measure(&prefix).width;
        if (old_width - x).abs() <= (width - x).abs() {
            return i;
        }
        old_width = width;
    }
    chars.len()
}

/// Elapsed-time caret blink: visible for the first half of each period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaretBlink {
    elapsed: Duration,
    period: Duration,
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

impl CaretBlink {
    pub fn new(period: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            period,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub fn visible(&self) -> bool {
        let period = self.period.as_millis();
        if period == 0 {
            return true;
        }
        self.elapsed.as_millis() % period < period / 2
    }
}

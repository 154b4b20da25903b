//! Scrollbar geometry.
//!
//! Pure conversions between content offsets and scrollbar pixels. Every
//! function is total: ratios are only taken after the zero-range cases have
//! been branched away, so no NaN or infinity can reach a rounding step.
//!
//! Rectangles are local to the scroll container's background area (its bounds
//! minus margins), with the origin at the background's top-left corner.

use tessel_core::{Axis, Margins, Rect, Size};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// When a scrollbar is drawn (and hit-tested).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScrollbarVisibility {
    /// Only while content overflows the viewport.
    #[default]
    Auto,
    AlwaysOn,
    AlwaysOff,
}

/// Whether a scrollbar is shown for one axis.
pub fn bar_visible(
    enabled: bool,
    mode: ScrollbarVisibility,
    virtual_extent: i32,
    visible_extent: i32,
) -> bool {
    enabled
        && mode != ScrollbarVisibility::AlwaysOff
        && (mode == ScrollbarVisibility::AlwaysOn || virtual_extent > visible_extent)
}

/// Track rectangle for `axis`, one `thickness` deep, hugging the trailing edge.
///
/// `other_bar_thickness` is the thickness of the perpendicular bar when that
/// bar is shown, zero otherwise. Only this bar gives up the corner square.
pub fn bar_rect(
    axis: Axis,
    background: Size,
    margins: Margins,
    other_bar_thickness: i32,
    thickness: i32,
) -> Rect {
    let bg = background.shrink(margins);
    match axis {
        Axis::Horizontal => Rect::new(
            0,
            bg.height - thickness,
            (bg.width - other_bar_thickness).max(0),
            thickness,
        ),
        Axis::Vertical => Rect::new(
            bg.width - thickness,
            0,
            thickness,
            (bg.height - other_bar_thickness).max(0),
        ),
    }
}

/// Draggable thumb inside `bar`.
///
/// The thumb is `min_len` plus the visible fraction of the remaining track.
/// With nothing to scroll it fills the whole track.
pub fn scroller_rect(
    axis: Axis,
    bar: Rect,
    virtual_extent: i32,
    visible_extent: i32,
    offset: i32,
    min_len: i32,
) -> Rect {
    let scroll_range = virtual_extent - visible_extent;
    if scroll_range <= 0 {
        return bar;
    }

    let netto = (bar.len(axis) - min_len).max(0);
    // scroll_range > 0 implies virtual_extent > 0 here
    let ratio = (visible_extent.max(0) as f64 / virtual_extent as f64).clamp(0.0, 1.0);
    let thumb_len = (netto as f64 * ratio).round() as i32 + min_len;

    let bar_range = netto - (thumb_len - min_len);
    let offset = offset.clamp(0, scroll_range);
    let pos = (bar_range as f64 * offset as f64 / scroll_range as f64).round() as i32;

    match axis {
        Axis::Horizontal => Rect::new(bar.x + pos, bar.y, thumb_len, bar.h),
        Axis::Vertical => Rect::new(bar.x, bar.y + pos, bar.w, thumb_len),
    }
}

/// Content offset for a thumb whose leading edge sits `drag_px` pixels past the
/// start of `bar`. Clamped into `0..=virtual_extent - visible_extent`.
pub fn offset_from_drag(
    axis: Axis,
    bar: Rect,
    scroller: Rect,
    drag_px: i32,
    virtual_extent: i32,
    visible_extent: i32,
) -> i32 {
    let scroll_range = virtual_extent - visible_extent;
    let range_px = bar.len(axis) - scroller.len(axis);
    if scroll_range <= 0 || range_px <= 0 {
        return 0;
    }
    let offset = (drag_px as f64 / range_px as f64 * scroll_range as f64).round() as i32;
    offset.clamp(0, scroll_range)
}

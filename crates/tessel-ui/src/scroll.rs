//! # Scroll viewport
//!
//! `ScrollViewport` owns the scroll state of one container: the offset on each
//! axis, the virtual (content) size, the visible (client) size, and the
//! scrollbar configuration. The geometry a renderer needs (scrollbar track,
//! thumb, visible content window) is derived from those fields on every query
//! and never cached.
//!
//! The one invariant, kept after every mutation:
//!
//! ```text
//! 0 <= offset(axis) <= max(0, virtual(axis) - visible(axis))
//! ```
//!
//! Setters clamp instead of failing. A viewport whose content fits simply has a
//! scroll range of zero and pins its offset at 0.
//!
//! ```rust
//! use tessel_core::*;
//! use tessel_ui::scroll::ScrollViewport;
//!
//! let mut vp = ScrollViewport::default();
//! vp.set_visible_size(Size::new(100, 100));
//! vp.set_virtual_size(Size::new(100, 400));
//! vp.set_scroll_offset(Axis::Vertical, 1_000);
//! assert_eq!(vp.offset(Axis::Vertical), 300);
//!
//! vp.set_virtual_size(Size::new(100, 150));
//! assert_eq!(vp.offset(Axis::Vertical), 50);
//! ```
//!
//! Offset changes are observable through `on_offset_changed`; handlers run
//! synchronously and only when the clamped value really moved.

use tessel_core::*;

use crate::scrollbar::{self, ScrollbarVisibility};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scrollbar metrics and step sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScrollConfig {
    pub bar_thickness: i32,
    pub min_scroller_length: i32,
    /// Pixels per wheel notch.
    pub scroll_speed: i32,
    /// Pixels per arrow key press.
    pub line_step: i32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            bar_thickness: 10,
            min_scroller_length: 10,
            scroll_speed: 20,
            line_step: 20,
        }
    }
}

impl ScrollConfig {
    pub fn with_bar_thickness(mut self, px: i32) -> Self {
        self.bar_thickness = px.max(0);
        self
    }

    pub fn with_min_scroller_length(mut self, px: i32) -> Self {
        self.min_scroller_length = px.max(0);
        self
    }

    pub fn with_scroll_speed(mut self, px: i32) -> Self {
        self.scroll_speed = px;
        self
    }

    pub fn with_line_step(mut self, px: i32) -> Self {
        self.line_step = px;
        self
    }
}

struct AxisState {
    offset: Observable<i32>,
    enabled: Observable<bool>,
    visibility: Observable<ScrollbarVisibility>,
    // pointer position minus thumb start, while dragging
    drag_grab: Option<i32>,
}

impl AxisState {
    fn new(enabled: bool, visibility: ScrollbarVisibility) -> Self {
        Self {
            offset: Observable::new(0),
            enabled: Observable::new(enabled),
            visibility: Observable::new(visibility),
            drag_grab: None,
        }
    }
}

pub struct ScrollViewport {
    config: ScrollConfig,
    horizontal: AxisState,
    vertical: AxisState,
    virtual_size: Observable<Size>,
    visible_size: Size,
    bounds: Option<Size>,
    margins: Margins,
}

impl Default for ScrollViewport {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl std::fmt::Debug for ScrollViewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollViewport")
            .field("offset", &self.scroll_offset())
            .field("virtual_size", self.virtual_size.get())
            .field("visible_size", &self.visible_size)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ScrollViewport {
    /// Vertical scrolling with an always-on bar; horizontal disabled.
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            horizontal: AxisState::new(false, ScrollbarVisibility::AlwaysOff),
            vertical: AxisState::new(true, ScrollbarVisibility::AlwaysOn),
            virtual_size: Observable::new(Size::ZERO),
            visible_size: Size::ZERO,
            bounds: None,
            margins: Margins::ZERO,
        }
    }

    pub fn with_axis(mut self, axis: Axis, enabled: bool, mode: ScrollbarVisibility) -> Self {
        self.set_bar_enabled(axis, enabled);
        self.set_bar_visibility(axis, mode);
        self
    }

    fn axis(&self, axis: Axis) -> &AxisState {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisState {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }

    // ---- sizes ----

    pub fn virtual_size(&self) -> Size {
        *self.virtual_size.get()
    }

    pub fn visible_size(&self) -> Size {
        self.visible_size
    }

    pub fn set_virtual_size(&mut self, size: Size) {
        self.virtual_size.set(size.non_negative());
        self.clamp_offsets();
    }

    pub fn set_visible_size(&mut self, size: Size) {
        self.visible_size = size.non_negative();
        self.clamp_offsets();
    }

    /// Layout hook: the client area is `visible`, the content would like to be
    /// `natural`. Content never gets less room than the client area.
    pub fn arrange(&mut self, visible: Size, natural: Size) {
        self.visible_size = visible.non_negative();
        self.virtual_size
            .set(natural.non_negative().max(self.visible_size));
        self.clamp_offsets();
    }

    /// Outer size the scrollbars are laid out in. Defaults to the visible size.
    pub fn set_bounds(&mut self, size: Size) {
        self.bounds = Some(size.non_negative());
    }

    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
    }

    fn background(&self) -> Size {
        self.bounds.unwrap_or(self.visible_size)
    }

    // ---- offsets ----

    pub fn max_offset(&self, axis: Axis) -> i32 {
        (self.virtual_size().along(axis) - self.visible_size.along(axis)).max(0)
    }

    pub fn offset(&self, axis: Axis) -> i32 {
        self.axis(axis).offset.value()
    }

    pub fn scroll_offset(&self) -> Point {
        Point::new(self.offset(Axis::Horizontal), self.offset(Axis::Vertical))
    }

    /// Clamp `value` into the scroll range and store it. Returns whether the
    /// offset moved; handlers only run when it did.
    pub fn set_scroll_offset(&mut self, axis: Axis, value: i32) -> bool {
        let clamped = value.clamp(0, self.max_offset(axis));
        let changed = self.axis_mut(axis).offset.set(clamped);
        if changed {
            log::trace!("scroll {axis:?} -> {clamped}");
        }
        changed
    }

    pub fn scroll_to(&mut self, offset: Point) -> bool {
        let h = self.set_scroll_offset(Axis::Horizontal, offset.x);
        let v = self.set_scroll_offset(Axis::Vertical, offset.y);
        h || v
    }

    pub fn scroll_by(&mut self, axis: Axis, delta: i32) -> bool {
        let target = self.offset(axis).saturating_add(delta);
        self.set_scroll_offset(axis, target)
    }

    /// 70% of the visible extent, rounded up so a page always covers it.
    pub fn page_size(&self, axis: Axis) -> i32 {
        let visible = i64::from(self.visible_size.along(axis));
        i32::try_from((visible * 7 + 9) / 10).unwrap_or(i32::MAX)
    }

    pub fn page_scroll(&mut self, axis: Axis, direction: Direction) -> bool {
        let delta = self.page_size(axis).saturating_mul(direction.signum());
        self.scroll_by(axis, delta)
    }

    pub fn line_scroll(&mut self, axis: Axis, direction: Direction) -> bool {
        let delta = self.config.line_step.saturating_mul(direction.signum());
        self.scroll_by(axis, delta)
    }

    /// Positive steps are "wheel up" and move back toward the start.
    pub fn scroll_wheel(&mut self, ev: &WheelEvent) -> bool {
        let speed = self.config.scroll_speed;
        let dy = ev.steps_y.saturating_mul(speed).saturating_neg();
        let dx = ev.steps_x.saturating_mul(speed).saturating_neg();
        let v = self.scroll_by(Axis::Vertical, dy);
        let h = self.scroll_by(Axis::Horizontal, dx);
        v || h
    }

    fn clamp_offsets(&mut self) {
        for axis in Axis::BOTH {
            let current = self.offset(axis);
            if current > self.max_offset(axis) {
                self.set_scroll_offset(axis, current);
            }
        }
    }

    // ---- scrollbar configuration ----

    pub fn bar_enabled(&self, axis: Axis) -> bool {
        self.axis(axis).enabled.value()
    }

    pub fn set_bar_enabled(&mut self, axis: Axis, enabled: bool) -> bool {
        let changed = self.axis_mut(axis).enabled.set(enabled);
        if !enabled {
            self.end_drag(axis);
        }
        changed
    }

    pub fn bar_visibility(&self, axis: Axis) -> ScrollbarVisibility {
        self.axis(axis).visibility.value()
    }

    pub fn set_bar_visibility(&mut self, axis: Axis, mode: ScrollbarVisibility) -> bool {
        self.axis_mut(axis).visibility.set(mode)
    }

    pub fn is_bar_visible(&self, axis: Axis) -> bool {
        scrollbar::bar_visible(
            self.bar_enabled(axis),
            self.bar_visibility(axis),
            self.virtual_size().along(axis),
            self.visible_size.along(axis),
        )
    }

    // ---- derived geometry ----

    /// Scrollbar track, local to the background area. `None` when hidden.
    pub fn scrollbar_rect(&self, axis: Axis) -> Option<Rect> {
        if !self.is_bar_visible(axis) {
            return None;
        }
        let t = self.config.bar_thickness;
        let other = if self.is_bar_visible(axis.other()) { t } else { 0 };
        Some(scrollbar::bar_rect(
            axis,
            self.background(),
            self.margins,
            other,
            t,
        ))
    }

    /// Draggable thumb, local to the background area. `None` when hidden.
    pub fn scroller_rect(&self, axis: Axis) -> Option<Rect> {
        let bar = self.scrollbar_rect(axis)?;
        Some(scrollbar::scroller_rect(
            axis,
            bar,
            self.virtual_size().along(axis),
            self.visible_size.along(axis),
            self.offset(axis),
            self.config.min_scroller_length,
        ))
    }

    /// Window onto the content, in content coordinates.
    pub fn visible_area(&self) -> Rect {
        let size = self.virtual_size().min(self.visible_size);
        Rect::new(
            self.offset(Axis::Horizontal),
            self.offset(Axis::Vertical),
            size.width,
            size.height,
        )
    }

    // ---- dragging ----

    /// Start dragging `axis` if `pos` is on its thumb.
    pub fn begin_drag(&mut self, axis: Axis, pos: Point) -> bool {
        let Some(thumb) = self.scroller_rect(axis) else {
            return false;
        };
        if !thumb.contains(pos) {
            return false;
        }
        let grab = pos.along(axis) - thumb.start(axis);
        self.axis_mut(axis).drag_grab = Some(grab);
        log::trace!("begin {axis:?} drag, grab {grab}px into thumb");
        true
    }

    pub fn update_drag(&mut self, axis: Axis, pos: Point) -> bool {
        let Some(grab) = self.axis(axis).drag_grab else {
            return false;
        };
        let (Some(bar), Some(thumb)) = (self.scrollbar_rect(axis), self.scroller_rect(axis)) else {
            // bar vanished mid-drag
            self.end_drag(axis);
            return false;
        };
        let drag_px = pos
            .along(axis)
            .saturating_sub(grab)
            .saturating_sub(bar.start(axis));
        let offset = scrollbar::offset_from_drag(
            axis,
            bar,
            thumb,
            drag_px,
            self.virtual_size().along(axis),
            self.visible_size.along(axis),
        );
        self.set_scroll_offset(axis, offset)
    }

    pub fn end_drag(&mut self, axis: Axis) {
        if self.axis_mut(axis).drag_grab.take().is_some() {
            log::trace!("end {axis:?} drag");
        }
    }

    pub fn is_dragging(&self, axis: Axis) -> bool {
        self.axis(axis).drag_grab.is_some()
    }

    /// Drop any drag in progress. Call on focus loss or pointer cancel.
    pub fn cancel_drags(&mut self) {
        for axis in Axis::BOTH {
            self.end_drag(axis);
        }
    }

    /// Page direction for a press on the track outside the thumb.
    pub fn hit_test_bar_click(&self, axis: Axis, pos: Point) -> Option<Direction> {
        let bar = self.scrollbar_rect(axis)?;
        let thumb = self.scroller_rect(axis)?;
        if !bar.contains(pos) || thumb.contains(pos) {
            return None;
        }
        let p = pos.along(axis);
        if p < thumb.start(axis) {
            Some(Direction::Backward)
        } else if p >= thumb.end(axis) {
            Some(Direction::Forward)
        } else {
            None
        }
    }

    // ---- input ----

    pub fn handle_pointer(&mut self, ev: &PointerEvent) -> bool {
        let pos = ev.position;
        match ev.event {
            PointerEventKind::Down(PointerButton::Primary) => {
                let mut handled = false;
                for axis in Axis::BOTH {
                    handled |= self.begin_drag(axis, pos);
                }
                if !handled {
                    for axis in Axis::BOTH {
                        if let Some(dir) = self.hit_test_bar_click(axis, pos) {
                            self.page_scroll(axis, dir);
                            handled = true;
                        }
                    }
                }
                handled
            }
            PointerEventKind::Move => {
                let mut handled = false;
                for axis in Axis::BOTH {
                    if self.is_dragging(axis) {
                        self.update_drag(axis, pos);
                        handled = true;
                    }
                }
                handled
            }
            PointerEventKind::Up(PointerButton::Primary) | PointerEventKind::Cancel => {
                let was_dragging = Axis::BOTH.iter().any(|&a| self.is_dragging(a));
                self.cancel_drags();
                was_dragging
            }
            _ => false,
        }
    }

    /// Arrow keys scroll by a line, PageUp/PageDown by a page (vertically).
    pub fn handle_key(&mut self, ev: &KeyEvent) -> bool {
        let (axis, amount) = match ev.key {
            Key::ArrowLeft => (Axis::Horizontal, Amount::Line(Direction::Backward)),
            Key::ArrowRight => (Axis::Horizontal, Amount::Line(Direction::Forward)),
            Key::ArrowUp => (Axis::Vertical, Amount::Line(Direction::Backward)),
            Key::ArrowDown => (Axis::Vertical, Amount::Line(Direction::Forward)),
            Key::PageUp => (Axis::Vertical, Amount::Page(Direction::Backward)),
            Key::PageDown => (Axis::Vertical, Amount::Page(Direction::Forward)),
            _ => return false,
        };
        if self.bar_enabled(axis) {
            match amount {
                Amount::Line(dir) => self.line_scroll(axis, dir),
                Amount::Page(dir) => self.page_scroll(axis, dir),
            };
        }
        true
    }

    pub fn handle_input(&mut self, ev: &InputEvent) -> bool {
        match ev {
            InputEvent::Pointer(p) => self.handle_pointer(p),
            InputEvent::Wheel(w) => {
                self.scroll_wheel(w);
                true
            }
            InputEvent::Key(k) => self.handle_key(k),
            InputEvent::FocusLost => {
                self.cancel_drags();
                false
            }
            InputEvent::Text(_) => false,
        }
    }

    // ---- notifications ----

    pub fn on_offset_changed(&mut self, axis: Axis, f: impl Fn(&i32, &i32) + 'static) -> SubId {
        self.axis_mut(axis).offset.subscribe(f)
    }

    pub fn remove_offset_handler(&mut self, axis: Axis, id: SubId) -> bool {
        self.axis_mut(axis).offset.unsubscribe(id)
    }

    pub fn on_virtual_size_changed(&mut self, f: impl Fn(&Size, &Size) + 'static) -> SubId {
        self.virtual_size.subscribe(f)
    }

    pub fn remove_virtual_size_handler(&mut self, id: SubId) -> bool {
        self.virtual_size.unsubscribe(id)
    }

    pub fn on_bar_enabled_changed(
        &mut self,
        axis: Axis,
        f: impl Fn(&bool, &bool) + 'static,
    ) -> SubId {
        self.axis_mut(axis).enabled.subscribe(f)
    }

    pub fn on_bar_visibility_changed(
        &mut self,
        axis: Axis,
        f: impl Fn(&ScrollbarVisibility, &ScrollbarVisibility) + 'static,
    ) -> SubId {
        self.axis_mut(axis).visibility.subscribe(f)
    }
}

#[derive(Clone, Copy)]
enum Amount {
    Line(Direction),
    Page(Direction),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn assert_invariant(vp: &ScrollViewport) {
        for axis in Axis::BOTH {
            let max = (vp.virtual_size().along(axis) - vp.visible_size().along(axis)).max(0);
            let off = vp.offset(axis);
            assert!((0..=max).contains(&off), "{axis:?} offset {off} outside 0..={max}");
        }
    }

    /// virtual (500,100), visible (100,100), horizontal bar only.
    fn wide() -> ScrollViewport {
        let mut vp = ScrollViewport::default()
            .with_axis(Axis::Horizontal, true, ScrollbarVisibility::Auto)
            .with_axis(Axis::Vertical, true, ScrollbarVisibility::Auto);
        vp.set_bounds(Size::new(100, 110));
        vp.set_visible_size(Size::new(100, 100));
        vp.set_virtual_size(Size::new(500, 100));
        vp
    }

    #[test]
    fn offset_invariant_under_mixed_setters() {
        let mut vp = ScrollViewport::default();
        let sizes = [
            (Size::new(300, 900), Size::new(100, 100)),
            (Size::new(50, 50), Size::new(100, 100)),
            (Size::new(1000, 1000), Size::new(0, 0)),
            (Size::new(-5, 200), Size::new(10, -10)),
            (Size::new(120, 130), Size::new(100, 100)),
        ];
        for (i, (virt, vis)) in sizes.into_iter().enumerate() {
            vp.set_scroll_offset(Axis::Vertical, 10_000);
            vp.set_scroll_offset(Axis::Horizontal, 10_000 * i as i32);
            assert_invariant(&vp);
            vp.set_virtual_size(virt);
            assert_invariant(&vp);
            vp.set_scroll_offset(Axis::Horizontal, -17);
            assert_invariant(&vp);
            vp.set_visible_size(vis);
            assert_invariant(&vp);
            vp.set_scroll_offset(Axis::Vertical, 33);
            assert_invariant(&vp);
        }
    }

    #[test]
    fn shrinking_content_clamps_and_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut vp = ScrollViewport::default();
        vp.set_visible_size(Size::new(100, 100));
        vp.set_virtual_size(Size::new(100, 500));
        let seen_clone = seen.clone();
        vp.on_offset_changed(Axis::Vertical, move |old, new| {
            seen_clone.borrow_mut().push((*old, *new))
        });

        vp.set_scroll_offset(Axis::Vertical, 400);
        vp.set_virtual_size(Size::new(100, 250));
        vp.set_visible_size(Size::new(100, 250));
        assert_eq!(*seen.borrow(), vec![(0, 400), (400, 150), (150, 0)]);
    }

    #[test]
    fn setting_same_offset_is_silent() {
        let calls = Rc::new(RefCell::new(0));
        let mut vp = wide();
        let calls_clone = calls.clone();
        vp.on_offset_changed(Axis::Horizontal, move |_, _| *calls_clone.borrow_mut() += 1);

        assert!(vp.set_scroll_offset(Axis::Horizontal, 400));
        assert!(!vp.set_scroll_offset(Axis::Horizontal, 999));
        assert!(!vp.set_scroll_offset(Axis::Horizontal, 400));
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn pages_are_seventy_percent_rounded_up() {
        let mut vp = ScrollViewport::default();
        vp.set_visible_size(Size::new(15, 100));
        vp.set_virtual_size(Size::new(100, 1000));
        assert_eq!(vp.page_size(Axis::Vertical), 70);
        assert_eq!(vp.page_size(Axis::Horizontal), 11);

        vp.page_scroll(Axis::Vertical, Direction::Forward);
        vp.page_scroll(Axis::Vertical, Direction::Forward);
        assert_eq!(vp.offset(Axis::Vertical), 140);
        vp.page_scroll(Axis::Vertical, Direction::Backward);
        assert_eq!(vp.offset(Axis::Vertical), 70);
        vp.scroll_by(Axis::Vertical, -500);
        assert_eq!(vp.offset(Axis::Vertical), 0);
    }

    #[test]
    fn wheel_moves_by_scroll_speed() {
        let mut vp = ScrollViewport::default();
        vp.set_visible_size(Size::new(100, 100));
        vp.set_virtual_size(Size::new(100, 1000));
        vp.scroll_wheel(&WheelEvent {
            steps_y: -3,
            ..Default::default()
        });
        assert_eq!(vp.offset(Axis::Vertical), 60);
        vp.scroll_wheel(&WheelEvent {
            steps_y: 1,
            ..Default::default()
        });
        assert_eq!(vp.offset(Axis::Vertical), 40);
    }

    #[test]
    fn huge_extents_page_without_overflow() {
        let mut vp = ScrollViewport::default();
        vp.set_visible_size(Size::new(100, 400_000_000));
        vp.set_virtual_size(Size::new(100, 2_000_000_000));
        assert_eq!(vp.page_size(Axis::Vertical), 280_000_000);
        vp.page_scroll(Axis::Vertical, Direction::Forward);
        assert_eq!(vp.offset(Axis::Vertical), 280_000_000);

        vp.set_visible_size(Size::new(100, i32::MAX));
        assert_eq!(vp.page_size(Axis::Vertical), 1_503_238_553);
        vp.page_scroll(Axis::Vertical, Direction::Backward);
        assert_invariant(&vp);
    }

    #[test]
    fn extreme_wheel_steps_clamp() {
        let mut vp = ScrollViewport::default();
        vp.set_visible_size(Size::new(100, 100));
        vp.set_virtual_size(Size::new(100, 1000));
        for steps in [i32::MIN, i32::MIN / 2] {
            vp.scroll_wheel(&WheelEvent {
                steps_y: steps,
                ..Default::default()
            });
            assert_eq!(vp.offset(Axis::Vertical), 900);
        }
        vp.scroll_wheel(&WheelEvent {
            steps_y: i32::MAX,
            steps_x: i32::MIN,
            ..Default::default()
        });
        assert_eq!(vp.offset(Axis::Vertical), 0);
        assert_invariant(&vp);

        vp.set_config(ScrollConfig::default().with_line_step(i32::MIN));
        vp.line_scroll(Axis::Vertical, Direction::Backward);
        assert_eq!(vp.offset(Axis::Vertical), 900);
    }

    #[test]
    fn drag_to_extreme_pointer_positions() {
        let mut vp = wide();
        assert!(vp.begin_drag(Axis::Horizontal, Point::new(4, 105)));
        vp.update_drag(Axis::Horizontal, Point::new(i32::MIN, 105));
        assert_eq!(vp.offset(Axis::Horizontal), 0);
        vp.update_drag(Axis::Horizontal, Point::new(i32::MAX, 105));
        assert_eq!(vp.offset(Axis::Horizontal), 400);
    }

    #[test]
    fn scrollbar_geometry_scenario() {
        let mut vp = wide();
        assert!(vp.is_bar_visible(Axis::Horizontal));
        assert!(!vp.is_bar_visible(Axis::Vertical));
        assert_eq!(vp.scrollbar_rect(Axis::Horizontal), Some(Rect::new(0, 100, 100, 10)));
        assert_eq!(vp.scroller_rect(Axis::Horizontal), Some(Rect::new(0, 100, 28, 10)));

        vp.set_scroll_offset(Axis::Horizontal, 400);
        let thumb = vp.scroller_rect(Axis::Horizontal).unwrap();
        assert_eq!(thumb.right(), 100);
        assert_eq!(vp.visible_area(), Rect::new(400, 0, 100, 100));
    }

    #[test]
    fn both_bars_reduce_each_other_once() {
        let mut vp = ScrollViewport::default()
            .with_axis(Axis::Horizontal, true, ScrollbarVisibility::AlwaysOn)
            .with_axis(Axis::Vertical, true, ScrollbarVisibility::AlwaysOn);
        vp.set_bounds(Size::new(200, 150));
        vp.set_visible_size(Size::new(190, 140));
        vp.set_virtual_size(Size::new(400, 400));
        assert_eq!(vp.scrollbar_rect(Axis::Horizontal), Some(Rect::new(0, 140, 190, 10)));
        assert_eq!(vp.scrollbar_rect(Axis::Vertical), Some(Rect::new(190, 0, 10, 140)));
    }

    #[test]
    fn hidden_bars_have_no_geometry() {
        let mut vp = wide();
        vp.set_bar_visibility(Axis::Horizontal, ScrollbarVisibility::AlwaysOff);
        assert_eq!(vp.scrollbar_rect(Axis::Horizontal), None);
        assert_eq!(vp.scroller_rect(Axis::Horizontal), None);
        assert!(!vp.begin_drag(Axis::Horizontal, Point::new(5, 105)));
        assert_eq!(vp.hit_test_bar_click(Axis::Horizontal, Point::new(50, 105)), None);
    }

    #[test]
    fn drag_moves_content_and_clears_on_release() {
        let mut vp = wide();
        // grab the thumb 4px in
        assert!(vp.begin_drag(Axis::Horizontal, Point::new(4, 105)));
        assert!(!vp.begin_drag(Axis::Vertical, Point::new(4, 105)));

        vp.update_drag(Axis::Horizontal, Point::new(40, 105));
        // thumb start at 36px of a 72px range
        assert_eq!(vp.offset(Axis::Horizontal), 200);
        vp.update_drag(Axis::Horizontal, Point::new(500, 105));
        assert_eq!(vp.offset(Axis::Horizontal), 400);
        vp.update_drag(Axis::Horizontal, Point::new(-50, 105));
        assert_eq!(vp.offset(Axis::Horizontal), 0);

        let up = PointerEvent::new(PointerEventKind::Up(PointerButton::Primary), Point::new(0, 0));
        assert!(vp.handle_pointer(&up));
        assert!(!vp.is_dragging(Axis::Horizontal));
        assert!(!vp.update_drag(Axis::Horizontal, Point::new(60, 105)));
        assert_eq!(vp.offset(Axis::Horizontal), 0);
    }

    #[test]
    fn two_axes_drag_independently() {
        let mut vp = ScrollViewport::default()
            .with_axis(Axis::Horizontal, true, ScrollbarVisibility::AlwaysOn);
        vp.set_bounds(Size::new(110, 110));
        vp.set_visible_size(Size::new(100, 100));
        vp.set_virtual_size(Size::new(500, 500));

        assert!(vp.begin_drag(Axis::Horizontal, Point::new(1, 105)));
        assert!(vp.begin_drag(Axis::Vertical, Point::new(105, 1)));
        vp.update_drag(Axis::Vertical, Point::new(105, 200));
        assert_eq!(vp.offset(Axis::Vertical), 400);
        assert_eq!(vp.offset(Axis::Horizontal), 0);

        vp.handle_input(&InputEvent::FocusLost);
        assert!(!vp.is_dragging(Axis::Horizontal));
        assert!(!vp.is_dragging(Axis::Vertical));
    }

    #[test]
    fn track_clicks_page_toward_the_pointer() {
        let mut vp = wide();
        vp.set_scroll_offset(Axis::Horizontal, 200);
        // thumb now spans 36..64
        assert_eq!(
            vp.hit_test_bar_click(Axis::Horizontal, Point::new(10, 105)),
            Some(Direction::Backward)
        );
        assert_eq!(
            vp.hit_test_bar_click(Axis::Horizontal, Point::new(64, 105)),
            Some(Direction::Forward)
        );
        assert_eq!(vp.hit_test_bar_click(Axis::Horizontal, Point::new(40, 105)), None);
        assert_eq!(vp.hit_test_bar_click(Axis::Horizontal, Point::new(40, 50)), None);

        let down = PointerEvent::new(
            PointerEventKind::Down(PointerButton::Primary),
            Point::new(90, 105),
        );
        assert!(vp.handle_pointer(&down));
        assert_eq!(vp.offset(Axis::Horizontal), 270);
        assert!(!vp.is_dragging(Axis::Horizontal));
    }

    #[test]
    fn keys_scroll_enabled_axes_only() {
        let mut vp = ScrollViewport::default();
        vp.set_visible_size(Size::new(100, 100));
        vp.set_virtual_size(Size::new(300, 300));

        assert!(vp.handle_key(&KeyEvent::new(Key::ArrowDown, Modifiers::NONE)));
        assert!(vp.handle_key(&KeyEvent::new(Key::ArrowRight, Modifiers::NONE)));
        assert!(vp.handle_key(&KeyEvent::new(Key::PageDown, Modifiers::NONE)));
        assert!(!vp.handle_key(&KeyEvent::new(Key::Home, Modifiers::NONE)));
        assert_eq!(vp.scroll_offset(), Point::new(0, 90));
    }

    #[test]
    fn arrange_grows_content_to_client_area() {
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let mut vp = ScrollViewport::default();
        let sizes_clone = sizes.clone();
        vp.on_virtual_size_changed(move |_, new| sizes_clone.borrow_mut().push(*new));

        vp.arrange(Size::new(100, 100), Size::new(40, 300));
        assert_eq!(vp.virtual_size(), Size::new(100, 300));
        vp.set_scroll_offset(Axis::Vertical, 200);
        vp.arrange(Size::new(100, 100), Size::new(40, 30));
        assert_eq!(vp.virtual_size(), Size::new(100, 100));
        assert_eq!(vp.offset(Axis::Vertical), 0);
        assert_eq!(*sizes.borrow(), vec![Size::new(100, 300), Size::new(100, 100)]);
    }

    #[test]
    fn disabling_an_axis_stops_its_drag() {
        let flips = Rc::new(RefCell::new(0));
        let mut vp = wide();
        let flips_clone = flips.clone();
        vp.on_bar_enabled_changed(Axis::Horizontal, move |_, _| *flips_clone.borrow_mut() += 1);
        assert!(vp.begin_drag(Axis::Horizontal, Point::new(4, 105)));
        assert!(vp.set_bar_enabled(Axis::Horizontal, false));
        assert!(!vp.is_dragging(Axis::Horizontal));
        assert!(!vp.set_bar_enabled(Axis::Horizontal, false));
        assert_eq!(*flips.borrow(), 1);
    }
}

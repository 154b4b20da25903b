use std::time::Duration;

use anyhow::ensure;
use tessel_core::prelude::*;
use tessel_platform::default_clipboard;
use tessel_text::CosmicMeasure;
use tessel_ui::{ScrollViewport, ScrollbarVisibility, TextBox};

fn textbox_session(clipboard: &mut dyn Clipboard) -> anyhow::Result<()> {
    let mut tb = TextBox::new(CosmicMeasure::new(16.0));
    tb.on_text_changed(|_, new| log::info!("text changed: {new:?}"));
    tb.arrange(Size::new(120, 24));
    tb.set_focused(true);

    let script = [
        InputEvent::text("The quick brown fox"),
        InputEvent::key(Key::Home, Modifiers::NONE),
        InputEvent::key(Key::ArrowRight, Modifiers::CTRL_SHIFT),
        InputEvent::key(Key::Character('x'), Modifiers::CTRL),
        InputEvent::key(Key::End, Modifiers::NONE),
        InputEvent::text(" "),
        InputEvent::key(Key::Character('v'), Modifiers::CTRL),
        InputEvent::key(Key::Tab, Modifiers::NONE),
    ];
    for ev in &script {
        let handled = tb.handle_input(ev, clipboard);
        log::info!(
            "{ev:?} handled={handled} cursor={} selection={:?} scroll_x={}",
            tb.cursor(),
            tb.selection(),
            tb.scroll_x()
        );
        tb.advance(Duration::from_millis(16));
    }

    ensure!(
        tb.text().ends_with(" The "),
        "unexpected text after paste: {:?}",
        tb.text()
    );
    log::info!("caret {:?}", tb.caret_rect());
    println!("{}", tb.text());
    Ok(())
}

fn viewport_session() {
    let mut vp = ScrollViewport::default()
        .with_axis(Axis::Horizontal, true, ScrollbarVisibility::Auto)
        .with_axis(Axis::Vertical, true, ScrollbarVisibility::Auto);
    vp.on_offset_changed(Axis::Vertical, |old, new| log::info!("vertical {old} -> {new}"));
    vp.set_bounds(Size::new(200, 150));
    vp.arrange(Size::new(190, 140), Size::new(600, 1200));

    vp.scroll_wheel(&WheelEvent {
        steps_y: -3,
        ..Default::default()
    });
    vp.handle_key(&KeyEvent::new(Key::PageDown, Modifiers::NONE));

    if let Some(thumb) = vp.scroller_rect(Axis::Vertical) {
        let grab = Point::new(thumb.x + 2, thumb.y + 2);
        vp.handle_pointer(&PointerEvent::new(
            PointerEventKind::Down(PointerButton::Primary),
            grab,
        ));
        vp.handle_pointer(&PointerEvent::new(
            PointerEventKind::Move,
            grab.offset(0, 40),
        ));
        vp.handle_pointer(&PointerEvent::new(
            PointerEventKind::Up(PointerButton::Primary),
            grab.offset(0, 40),
        ));
    }

    for axis in Axis::BOTH {
        log::info!(
            "{axis:?}: bar={:?} thumb={:?}",
            vp.scrollbar_rect(axis),
            vp.scroller_rect(axis)
        );
    }
    println!("visible area {:?}", vp.visible_area());
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut clipboard = default_clipboard();
    textbox_session(&mut *clipboard)?;
    viewport_session();
    Ok(())
}

use log::{debug, error};

use crate::event::{Event, EventKind};
use crate::host::{Host, PaintRegion};

/// The window procedure. Keeps no state between calls; the host invokes it
/// for every message routed to the window.
pub fn handle_event<H: Host>(host: &H, event: &Event<H::Window>) -> isize {
    match event.kind {
        EventKind::Close => {
            debug!("window {:?} destroyed, requesting quit", event.window);
            host.post_quit(0);
            0
        }
        EventKind::Repaint => {
            paint(host, event.window);
            0
        }
        _ => host.default_handling(event),
    }
}

fn paint<H: Host>(host: &H, window: H::Window) {
    let region = host.begin_paint(window);
    debug_assert!(region.is_some(), "no device context for an invalidated window");
    let Some(mut region) = region else {
        error!("window {:?} could not begin painting", window);
        return;
    };
    if region.rect().is_empty() {
        return;
    }
    region.fill_background();
}

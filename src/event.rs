/// Raw message codes the callback cares about. Kept here so the dispatch table
/// can be exercised without the Win32 headers.
pub const WM_DESTROY: u32 = 0x0002;
pub const WM_PAINT: u32 = 0x000F;
#[cfg(test)]
pub const WM_CLOSE: u32 = 0x0010;
pub const WM_QUIT: u32 = 0x0012;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EventKind {
    /// The window is being destroyed; nothing else will arrive for it.
    Close,
    /// Part of the client area was invalidated.
    Repaint,
    /// Posted by `PostQuitMessage`, never routed to a window.
    Quit,
    Other(u32),
}

impl EventKind {
    pub fn from_raw(message: u32) -> Self {
        match message {
            WM_DESTROY => Self::Close,
            WM_PAINT => Self::Repaint,
            WM_QUIT => Self::Quit,
            other => Self::Other(other),
        }
    }

    pub fn raw(self) -> u32 {
        match self {
            Self::Close => WM_DESTROY,
            Self::Repaint => WM_PAINT,
            Self::Quit => WM_QUIT,
            Self::Other(message) => message,
        }
    }
}

/// A message as delivered by the host, normalized to an `EventKind`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Event<W> {
    pub window: W,
    pub kind: EventKind,
    pub wparam: usize,
    pub lparam: isize,
}

impl<W> Event<W> {
    pub fn new(window: W, message: u32, wparam: usize, lparam: isize) -> Self {
        Self {
            window,
            kind: EventKind::from_raw(message),
            wparam,
            lparam,
        }
    }

    #[cfg(test)]
    pub fn of_kind(window: W, kind: EventKind) -> Self {
        Self {
            window,
            kind,
            wparam: 0,
            lparam: 0,
        }
    }

    pub fn message(&self) -> u32 {
        self.kind.raw()
    }
}

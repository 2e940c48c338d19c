use std::fmt::Debug;

use crate::event::Event;
use crate::window::WindowClass;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }
}

/// Failure reported by the windowing host for a single call.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message} (0x{code:08X})")]
pub struct HostError {
    pub code: u32,
    pub message: String,
}

impl HostError {
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[cfg(windows)]
impl From<windows::core::Error> for HostError {
    fn from(error: windows::core::Error) -> Self {
        Self::new(error.code().0 as u32, error.message())
    }
}

pub enum Retrieved<M> {
    Message(M),
    /// A quit request reached the front of the queue; carries its exit code.
    Quit(i32),
}

/// The invalidated area of a window and the device context to paint it with.
/// Dropping the region ends the paint.
pub trait PaintRegion {
    fn rect(&self) -> Rect;
    fn fill_background(&mut self);
}

/// Everything the window, the loop and the window procedure need from the
/// windowing subsystem. All calls are made from the thread that owns the window.
pub trait Host {
    type Window: Copy + Debug + PartialEq;
    type Message;
    type Paint<'a>: PaintRegion
    where
        Self: 'a;

    fn register_class(&self, class: &WindowClass) -> Result<(), HostError>;
    fn create_window(&self, class: &WindowClass) -> Result<Self::Window, HostError>;
    fn show(&self, window: Self::Window);

    /// Blocks until a message is available for any window of this thread.
    fn next_message(&self) -> Result<Retrieved<Self::Message>, HostError>;
    fn event(message: &Self::Message) -> Event<Self::Window>;
    fn translate(&self, message: &Self::Message);
    /// Routes the message to the procedure of its target window.
    fn dispatch(&self, message: &Self::Message);

    fn post_quit(&self, exit_code: i32);
    fn begin_paint(&self, window: Self::Window) -> Option<Self::Paint<'_>>;
    fn default_handling(&self, event: &Event<Self::Window>) -> isize;
}

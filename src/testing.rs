//! Scripted in-memory host for unit tests. It keeps a class registry, a
//! message queue and a record of every host call in order.

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};

use crate::event::{Event, EventKind, WM_CLOSE};
use crate::host::{Host, HostError, PaintRegion, Rect, Retrieved};
use crate::procedure;
use crate::window::WindowClass;

const ERROR_CLASS_ALREADY_EXISTS: u32 = 0x582;
const ERROR_NOT_ENOUGH_MEMORY: u32 = 0x8;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FakeWindow(pub u32);

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Op {
    Registered(String),
    Created(FakeWindow, String),
    Shown(FakeWindow),
    Retrieved(EventKind),
    Translated(EventKind),
    Dispatched(EventKind),
    PostedQuit(i32),
    BeganPaint(FakeWindow),
    Filled(FakeWindow, Rect),
    EndedPaint(FakeWindow),
    Defaulted(EventKind),
}

pub struct FakeHost {
    classes: RefCell<HashSet<String>>,
    queue: RefCell<VecDeque<Event<FakeWindow>>>,
    quit: Cell<Option<i32>>,
    ops: RefCell<Vec<Op>>,
    next_window: Cell<u32>,
    fail_creation: bool,
    client: Rect,
    default_result: isize,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            classes: RefCell::new(HashSet::new()),
            queue: RefCell::new(VecDeque::new()),
            quit: Cell::new(None),
            ops: RefCell::new(vec![]),
            next_window: Cell::new(1),
            fail_creation: false,
            client: Rect::new(0, 0, 800, 600),
            default_result: 0,
        }
    }

    pub fn failing_creation(mut self) -> Self {
        self.fail_creation = true;
        self
    }

    pub fn with_client_rect(mut self, client: Rect) -> Self {
        self.client = client;
        self
    }

    pub fn with_default_result(mut self, result: isize) -> Self {
        self.default_result = result;
        self
    }

    /// Queues messages for the first window the host will create.
    pub fn with_messages(self, messages: &[u32]) -> Self {
        for &message in messages {
            self.queue
                .borrow_mut()
                .push_back(Event::new(FakeWindow(1), message, 0, 0));
        }
        self
    }

    pub fn ops(&self) -> Vec<Op> {
        self.ops.borrow().clone()
    }

    pub fn fills(&self) -> Vec<(FakeWindow, Rect)> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                Op::Filled(window, rect) => Some((*window, *rect)),
                _ => None,
            })
            .collect()
    }

    pub fn dispatched(&self) -> Vec<EventKind> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                Op::Dispatched(kind) => Some(*kind),
                _ => None,
            })
            .collect()
    }

    pub fn windows_created(&self) -> Vec<FakeWindow> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                Op::Created(window, _) => Some(*window),
                _ => None,
            })
            .collect()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    fn record(&self, op: Op) {
        self.ops.borrow_mut().push(op);
    }
}

pub struct FakePaint<'a> {
    host: &'a FakeHost,
    window: FakeWindow,
}

impl PaintRegion for FakePaint<'_> {
    fn rect(&self) -> Rect {
        self.host.client
    }

    fn fill_background(&mut self) {
        self.host.record(Op::Filled(self.window, self.rect()));
    }
}

impl Drop for FakePaint<'_> {
    fn drop(&mut self) {
        self.host.record(Op::EndedPaint(self.window));
    }
}

impl Host for FakeHost {
    type Window = FakeWindow;
    type Message = Event<FakeWindow>;
    type Paint<'a> = FakePaint<'a>;

    fn register_class(&self, class: &WindowClass) -> Result<(), HostError> {
        if !self.classes.borrow_mut().insert(class.name.to_string()) {
            return Err(HostError::new(ERROR_CLASS_ALREADY_EXISTS, "Class already exists."));
        }
        self.record(Op::Registered(class.name.to_string()));
        Ok(())
    }

    fn create_window(&self, class: &WindowClass) -> Result<FakeWindow, HostError> {
        if self.fail_creation {
            return Err(HostError::new(
                ERROR_NOT_ENOUGH_MEMORY,
                "Not enough memory resources are available to process this command.",
            ));
        }
        let window = FakeWindow(self.next_window.get());
        self.next_window.set(window.0 + 1);
        self.record(Op::Created(window, class.title.to_string()));
        Ok(window)
    }

    fn show(&self, window: FakeWindow) {
        self.record(Op::Shown(window));
    }

    fn next_message(&self) -> Result<Retrieved<Event<FakeWindow>>, HostError> {
        if let Some(event) = self.queue.borrow_mut().pop_front() {
            self.record(Op::Retrieved(event.kind));
            return Ok(Retrieved::Message(event));
        }
        match self.quit.get() {
            Some(exit_code) => Ok(Retrieved::Quit(exit_code)),
            // A real host would block here forever.
            None => Err(HostError::new(0, "message queue drained without a quit")),
        }
    }

    fn event(message: &Event<FakeWindow>) -> Event<FakeWindow> {
        *message
    }

    fn translate(&self, message: &Event<FakeWindow>) {
        self.record(Op::Translated(message.kind));
    }

    fn dispatch(&self, message: &Event<FakeWindow>) {
        self.record(Op::Dispatched(message.kind));
        procedure::handle_event(self, message);
    }

    fn post_quit(&self, exit_code: i32) {
        self.quit.set(Some(exit_code));
        self.record(Op::PostedQuit(exit_code));
    }

    fn begin_paint(&self, window: FakeWindow) -> Option<FakePaint<'_>> {
        self.record(Op::BeganPaint(window));
        Some(FakePaint { host: self, window })
    }

    fn default_handling(&self, event: &Event<FakeWindow>) -> isize {
        self.record(Op::Defaulted(event.kind));
        if event.message() == WM_CLOSE {
            // Default close handling destroys the window, which sends the
            // destroy message straight to the procedure.
            return procedure::handle_event(self, &Event::of_kind(event.window, EventKind::Close));
        }
        self.default_result
    }
}

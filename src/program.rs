use log::{debug, info, trace};

use crate::error::{Error, Result};
use crate::host::{Host, Retrieved};
use crate::window::{self, WindowClass};

pub struct Program<H: Host> {
    host: H,
    window: H::Window,
}

impl<H: Host> Program<H> {
    pub fn new(host: H) -> Result<Self> {
        let window = window::create(&host, &WindowClass::default())?;
        Ok(Self { host, window })
    }

    /// Runs the message loop until a quit request is retrieved and returns
    /// the exit code it carries.
    pub fn run(&self) -> Result<i32> {
        loop {
            match self.host.next_message().map_err(Error::MessageRetrieval)? {
                Retrieved::Message(message) => {
                    trace!("{:?}", H::event(&message));
                    self.host.translate(&message);
                    self.host.dispatch(&message);
                }
                Retrieved::Quit(exit_code) => {
                    info!("quit requested with exit code {}", exit_code);
                    return Ok(exit_code);
                }
            }
        }
    }
}

impl<H: Host> Drop for Program<H> {
    fn drop(&mut self) {
        debug!("leaving window {:?} to the host", self.window);
    }
}

#![windows_subsystem = "windows"]
#![cfg_attr(not(windows), allow(dead_code))]

mod error;
mod event;
mod host;
mod procedure;
mod program;
#[cfg(test)]
mod testing;
#[cfg(windows)]
mod win32;
mod window;

use std::process::ExitCode;

use env_logger::Env;
use log::{error, info};

use crate::error::Result;

fn main() -> ExitCode {
    #[cfg(windows)]
    win32::attach_console();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    info!("hellowin v{}", env!("CARGO_PKG_VERSION"));

    match run() {
        Ok(exit_code) => u8::try_from(exit_code).map_or(ExitCode::FAILURE, ExitCode::from),
        Err(error) => {
            error!("{}", error);
            ExitCode::from(error.exit_code())
        }
    }
}

#[cfg(windows)]
fn run() -> Result<i32> {
    let program = program::Program::new(win32::Win32Host)?;
    program.run()
}

#[cfg(not(windows))]
fn run() -> Result<i32> {
    Err(error::Error::UnsupportedPlatform)
}

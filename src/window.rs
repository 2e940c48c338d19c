use log::{debug, info};

use crate::error::{Error, Result};
use crate::host::Host;

const WINDOW_CLASS_NAME: &str = "Sample Window Class";
const WINDOW_TITLE: &str = "Hello World Windows";

/// Template shared by every window created from it. The host binds it to the
/// module handle and the window procedure when it is registered.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WindowClass {
    pub name: &'static str,
    pub title: &'static str,
}

impl Default for WindowClass {
    fn default() -> Self {
        Self {
            name: WINDOW_CLASS_NAME,
            title: WINDOW_TITLE,
        }
    }
}

pub fn register<H: Host>(host: &H, class: &WindowClass) -> Result<()> {
    host.register_class(class)
        .map_err(|source| Error::ClassRegistration {
            class: class.name.to_string(),
            source,
        })?;
    debug!("registered window class {:?}", class.name);
    Ok(())
}

/// Registers `class` and opens one visible top-level window of it.
pub fn create<H: Host>(host: &H, class: &WindowClass) -> Result<H::Window> {
    register(host, class)?;
    let window = host.create_window(class).map_err(Error::WindowCreation)?;
    host.show(window);
    info!("window {:?} created: {:?}", window, class.title);
    Ok(window)
}

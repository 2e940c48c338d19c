use crate::host::HostError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("window class {class:?} could not be registered: {source}")]
    ClassRegistration { class: String, source: HostError },

    #[error("window could not be created: {0}")]
    WindowCreation(#[source] HostError),

    #[error("message retrieval failed: {0}")]
    MessageRetrieval(#[source] HostError),

    #[error("no windowing host on this platform")]
    UnsupportedPlatform,
}

impl Error {
    /// Process status for each fatal path; a normal quit exits with the quit code.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ClassRegistration { .. } => 1,
            Self::WindowCreation(_) => 2,
            Self::MessageRetrieval(_) => 3,
            Self::UnsupportedPlatform => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

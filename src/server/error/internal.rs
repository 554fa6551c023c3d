use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored intake method is not one of the known values.
    #[error("Unknown contact method '{0}' stored for service request")]
    UnknownContactMethod(String),

    /// A record vanished between being written and being read back.
    #[error("{resource} with id {id} not found after write")]
    MissingAfterWrite { resource: &'static str, id: i32 },
}

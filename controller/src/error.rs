use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("bad configuration of snake controller: {reason}")]
    Configuration { reason: String },

    #[error("unexpected event received: {name} (0x{message_id:02x})")]
    UnexpectedEvent {
        message_id: u32,
        name: &'static str,
    },
}

impl ControllerError {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        ControllerError::Configuration {
            reason: reason.into(),
        }
    }
}

use thiserror::Error;

/// Error taxonomy shared by every stage of the polling pipeline.
///
/// Only [`HeraldError::Config`] is fatal; everything else is caught at the
/// poll loop boundary and retried on the next cycle.
#[derive(Debug, Error)]
pub enum HeraldError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Unknown homework status: {0}")]
    UnknownVerdict(String),

    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl HeraldError {
    /// Whether the error must stop the process instead of failing one cycle.
    pub fn is_fatal(&self) -> bool {
        matches!(self, HeraldError::Config(_))
    }

    /// Short machine-friendly name used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            HeraldError::Config(_) => "config",
            HeraldError::Transport(_) => "transport",
            HeraldError::Decode(_) => "decode",
            HeraldError::Schema(_) => "schema",
            HeraldError::UnknownVerdict(_) => "unknown_verdict",
            HeraldError::Delivery(_) => "delivery",
        }
    }
}

pub type Result<T> = std::result::Result<T, HeraldError>;

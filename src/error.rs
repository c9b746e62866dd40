//! Error types for Flowbot.

use crate::state::TopicId;

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Internal failures inside a flow handler.
///
/// These never reach the caller as protocol errors: the router converts
/// them into a forced reset plus a plain-text apology.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Conversation data does not belong to the {topic} flow")]
    DataMismatch { topic: TopicId },

    #[error("The {topic} flow has no phase {phase}")]
    PhaseOutOfRange { topic: TopicId, phase: u8 },

    #[error("Field {field} was never collected before the summary")]
    MissingField { field: &'static str },

    #[error("The riddle bank is empty")]
    EmptyRiddleBank,
}

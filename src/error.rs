//! Error types for krypton

use thiserror::Error;

/// Errors that can occur when fetching market data from a provider
///
/// A non-200 status is not an error here: it is a regular
/// [`FetchOutcome`](crate::provider::FetchOutcome) the caller reports.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network request failed (connect, DNS, body read or timeout)
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

/// Errors raised while extracting a quote from a success body
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Body is not the expected market-data shape
    #[error("Invalid market data payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Errors from the terminal collaborator
#[derive(Debug, Error)]
pub enum UiError {
    /// Prompt library failed to read from the terminal
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// No more input is available
    #[error("Input closed")]
    Closed,

    /// Scripted answer does not fit the prompt it was given to
    #[error("Script mismatch: {0}")]
    Script(String),
}

/// Errors that end the interaction cycle
///
/// Everything recoverable (transport failures, non-200 statuses) is handled
/// inside the cycle; what reaches this type stops the loop.
#[derive(Debug, Error)]
pub enum CycleError {
    /// Terminal interaction failed
    #[error(transparent)]
    Ui(#[from] UiError),

    /// Success response could not be turned into a quote
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// A menu label that is not in the registry
    #[error("Unknown selection: {0}")]
    UnknownSelection(String),
}

impl CycleError {
    /// Creates an UnknownSelection error
    pub fn unknown_selection(label: impl Into<String>) -> Self {
        Self::UnknownSelection(label.into())
    }
}

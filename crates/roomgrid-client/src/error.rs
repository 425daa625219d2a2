//! Error types for the provider boundary.

use roomgrid_engine::EngineError;
use thiserror::Error;

/// Errors surfaced by provider queries. Exactly one layer above the network
/// boundary converts these into user-facing messages; nothing below retries.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Request validation failed before any network call.
    #[error(transparent)]
    Invalid(#[from] EngineError),

    /// The sharing identifier is missing or blank.
    #[error("no sharing map id was provided")]
    MissingSharingId,

    /// HTTP transport failed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered non-2xx. Carries the provider's own message
    /// when the body had one.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A 2xx response whose body was not a JSON object.
    #[error("the server response was not in the expected shape")]
    MalformedResponse,

    /// The map lookup answered without an integer map id.
    #[error("could not load the map information")]
    MissingMapId,
}

/// Convenience alias used throughout roomgrid-client.
pub type Result<T> = std::result::Result<T, ClientError>;

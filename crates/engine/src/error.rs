use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The only error the planning entry point surfaces: input no plan can be
/// built from. Every other failure mode resolves to the fallback plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    #[error("cannot plan an edit from zero clips")]
    EmptyClipSet,
    #[error("clip collection has {count} clips, limit is {limit}")]
    TooManyClips { count: usize, limit: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipSetError {
    #[error("clip set is full ({0} clips max)")]
    Full(usize),
    #[error("clip id {0} is already in the set")]
    DuplicateId(Uuid),
}

/// Result of one remote generation attempt. Consumed exhaustively by the
/// validator; only `Success` can yield a generated plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Raw textual payload, expected (not trusted) to match the schema.
    Success(String),
    /// No credential resolvable; the network was never touched.
    CredentialMissing,
    /// Network fault, remote error status, or empty response body.
    TransportFailure(String),
    /// Payload that failed structural or semantic validation.
    MalformedPayload(String),
}

/// Where a resolved plan came from. Failures never surface as errors, so
/// this tag is the only way a caller can tell a degraded plan apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanSource {
    Generated,
    Fallback { reason: String },
}

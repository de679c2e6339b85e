//! Presence checks on a parsed secret.

use thiserror::Error;

use super::Secret;

/// Why a secret was rejected by [`Secret::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Invalid {
    #[error("missing apiVersion")]
    MissingApiVersion,
    #[error("missing kind")]
    MissingKind,
    #[error("missing data")]
    MissingData,
}

impl Secret {
    /// Check that the required fields are present.
    ///
    /// An empty `data` mapping is valid; only a missing or null one is not.
    /// The first failing check wins, in field order.
    pub fn validate(&self) -> Result<(), Invalid> {
        if self.api_version.is_empty() {
            return Err(Invalid::MissingApiVersion);
        }
        if self.kind.is_empty() {
            return Err(Invalid::MissingKind);
        }
        if self.data.is_none() {
            return Err(Invalid::MissingData);
        }
        Ok(())
    }
}

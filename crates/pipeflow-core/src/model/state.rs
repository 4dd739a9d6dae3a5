use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TypesError;

/// Estado de un Artifact respecto al metadata store.
///
/// Se persiste como string en la propiedad `state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactState {
    /// Declarado pero aún sin datos producidos.
    Pending,
    /// Registrado en el metadata store.
    Published,
    /// El store lo conoce pero su uri ya no existe.
    Missing,
    Deleted,
}

impl ArtifactState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactState::Pending => "pending",
            ArtifactState::Published => "published",
            ArtifactState::Missing => "missing",
            ArtifactState::Deleted => "deleted",
        }
    }
}

impl fmt::Display for ArtifactState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactState {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ArtifactState::Pending),
            "published" => Ok(ArtifactState::Published),
            "missing" => Ok(ArtifactState::Missing),
            "deleted" => Ok(ArtifactState::Deleted),
            other => Err(TypesError::InvalidArgument(format!("unknown artifact state '{other}'"))),
        }
    }
}

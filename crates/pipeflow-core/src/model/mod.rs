//! Modelos neutrales (Artifact, PropertyValue, ArtifactState,...)

pub mod artifact;
pub mod property;
pub mod state;
pub mod type_name;

pub use artifact::{Artifact, ArtifactSnapshot};
pub use property::PropertyValue;
pub use state::ArtifactState;
pub use type_name::validate_type_name;

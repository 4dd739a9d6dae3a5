//! pipeflow-core: capa tipada de intercambio de datos entre componentes.
//!
//! Los componentes declaran Channels de input/output; el orquestador conecta
//! outputs con inputs validando con `Channel::type_check` al construir el
//! grafo, y el executor recibe listas planas de artifacts vía
//! `unwrap_channel_dict`.
pub mod artifact_utils;
pub mod channel;
pub mod config;
pub mod constants;
pub mod errors;
pub mod model;
pub mod store;

pub use channel::{as_channel, unwrap_channel_dict, Channel, ChannelSource};
pub use config::{TypesConfig, CONFIG};
pub use errors::{TypesError, TypesResult};
pub use model::{Artifact, ArtifactSnapshot, ArtifactState, PropertyValue};
pub use store::{ArtifactRecord, InMemoryMetadataStore, MetadataStore};

//! Contrato con el metadata store externo.
//!
//! El core no persiste nada por sí mismo: sólo consume `MetadataStore` para
//! asignar ids y registrar propiedades. `InMemoryMetadataStore` sirve para
//! tests y para cablear pipelines localmente.

mod memory;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::TypesResult;
use crate::model::{Artifact, PropertyValue};

pub use memory::InMemoryMetadataStore;

/// Registro persistido de un artifact en el momento del publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    pub id: i64,
    pub type_name: String,
    pub uri: String,
    pub properties: BTreeMap<String, PropertyValue>,
    pub recorded_at: DateTime<Utc>, // metadato del store
}

pub trait MetadataStore: Send + Sync {
    /// Registra el artifact: le asigna id si no tiene, marca `state =
    /// published` y guarda una copia de sus datos. Idempotente: publicar de
    /// nuevo devuelve el mismo id y refresca el registro.
    fn publish(&self, artifact: &Artifact) -> TypesResult<i64>;

    /// Registro por id; `NotFound` si no existe.
    fn get(&self, id: i64) -> TypesResult<ArtifactRecord>;

    /// Registros con type name exactamente igual, ordenados por id.
    fn list_by_type(&self, type_name: &str) -> Vec<ArtifactRecord>;
}

//! Channel: colección tipada de Artifacts que viaja entre componentes.
//!
//! Invariante: todo artifact contenido tiene el mismo `type_name` que el
//! Channel. Se valida al construir y en cada mutación (`push`,
//! `set_artifacts`); por eso `type_check` compara sólo el type name del
//! Channel sin recorrer los miembros.
use std::fmt;

use log::{debug, warn};

use crate::errors::{TypesError, TypesResult};
use crate::model::{validate_type_name, Artifact};

/// Igualdad: mismo type name y misma secuencia (ordenada) de referencias a
/// artifacts. Dos Channels con artifacts distintos pero estructuralmente
/// iguales NO son iguales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    type_name: String,
    artifacts: Vec<Artifact>,
}

impl Channel {
    /// Channel vacío del tipo dado.
    pub fn new(type_name: &str) -> TypesResult<Self> {
        Self::with_artifacts(type_name, Vec::new())
    }

    /// Channel con colección inicial. Falla con `TypeMismatch` si algún
    /// artifact tiene otro type name.
    pub fn with_artifacts(type_name: &str, artifacts: Vec<Artifact>) -> TypesResult<Self> {
        validate_type_name(type_name)?;
        check_homogeneous(type_name, &artifacts)?;
        debug!("channel '{}' created with {} artifact(s)", type_name, artifacts.len());
        Ok(Self { type_name: type_name.to_string(),
                  artifacts })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Copia de la lista de referencias actual. Modificar el `Vec` devuelto no
    /// afecta al Channel (los artifacts en sí sí son compartidos).
    pub fn get(&self) -> Vec<Artifact> {
        self.artifacts.clone()
    }

    /// Vista prestada sin copiar.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Reemplaza la colección completa. Si falla, el Channel queda intacto.
    pub fn set_artifacts(&mut self, artifacts: Vec<Artifact>) -> TypesResult<()> {
        check_homogeneous(&self.type_name, &artifacts)?;
        self.artifacts = artifacts;
        Ok(())
    }

    /// Agrega un artifact al final. Si falla, el Channel queda intacto.
    pub fn push(&mut self, artifact: Artifact) -> TypesResult<()> {
        check_homogeneous(&self.type_name, std::slice::from_ref(&artifact))?;
        self.artifacts.push(artifact);
        Ok(())
    }

    /// Verifica que el Channel sea del tipo esperado. Es la compuerta que el
    /// constructor del grafo usa antes de conectar un output con un input.
    pub fn type_check(&self, expected_type_name: &str) -> TypesResult<()> {
        if expected_type_name != self.type_name {
            return Err(TypesError::TypeCheck { expected: expected_type_name.to_string(),
                                               actual: self.type_name.clone() });
        }
        Ok(())
    }
}

fn check_homogeneous(type_name: &str, artifacts: &[Artifact]) -> TypesResult<()> {
    if let Some(bad) = artifacts.iter().find(|a| a.type_name() != type_name) {
        warn!("artifact of type '{}' rejected by channel '{}'", bad.type_name(), type_name);
        return Err(TypesError::TypeMismatch { expected: type_name.to_string(),
                                              found: bad.type_name().to_string() });
    }
    Ok(())
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.artifacts.iter().map(|a| a.to_string()).collect();
        write!(f, "Channel(type_name: {}, artifacts: [{}])", self.type_name, items.join(", "))
    }
}

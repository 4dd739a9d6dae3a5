//! Helpers para componentes que esperan un único artifact o un split concreto
//! dentro de la lista que entrega `unwrap_channel_dict`.

use crate::errors::{TypesError, TypesResult};
use crate::model::Artifact;

/// Devuelve el único artifact de la lista; `InvalidArgument` si hay cero o
/// más de uno.
pub fn get_single_instance(artifacts: &[Artifact]) -> TypesResult<Artifact> {
    match artifacts {
        [single] => Ok(single.clone()),
        other => Err(TypesError::InvalidArgument(format!("expected exactly one artifact, got {}", other.len()))),
    }
}

pub fn get_single_uri(artifacts: &[Artifact]) -> TypesResult<String> {
    Ok(get_single_instance(artifacts)?.uri())
}

/// Uri del único artifact con el split dado.
pub fn get_split_uri(artifacts: &[Artifact], split: &str) -> TypesResult<String> {
    let matching: Vec<&Artifact> = artifacts.iter().filter(|a| a.split() == split).collect();
    match matching.as_slice() {
        [single] => Ok(single.uri()),
        other => Err(TypesError::InvalidArgument(format!("expected exactly one artifact with split '{split}', got {}", other.len()))),
    }
}

//! Binding de inputs de un componente.
//!
//! El orquestador entrega, por nombre de input, "un channel" en cualquiera de
//! sus formas legales. `bind_inputs` normaliza cada uno con `as_channel` y lo
//! valida con `type_check` contra el type name declarado. Falla en el primer
//! error: no se devuelve un binding parcial.
use indexmap::IndexMap;
use log::{debug, warn};

use pipeflow_core::{as_channel, Channel, ChannelSource, TypesError, TypesResult};

/// Input declarado por un componente: nombre del slot y type name esperado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub name: String,
    pub type_name: String,
}

impl InputSpec {
    pub fn new(name: &str, type_name: &str) -> Self {
        Self { name: name.to_string(),
               type_name: type_name.to_string() }
    }
}

/// Devuelve los Channels en el orden de `declared`.
///
/// Errores:
/// - `InvalidArgument` si falta un input declarado o sobra uno no declarado.
/// - Los de `as_channel` (`InvalidArgument`, `TypeMismatch`).
/// - `TypeCheck` si el Channel no es del tipo declarado.
pub fn bind_inputs<S>(declared: &[InputSpec], mut provided: IndexMap<String, S>) -> TypesResult<IndexMap<String, Channel>>
    where S: Into<ChannelSource>
{
    let mut bound = IndexMap::with_capacity(declared.len());
    for spec in declared {
        let source = provided.shift_remove(&spec.name)
                             .ok_or_else(|| TypesError::InvalidArgument(format!("missing input '{}'", spec.name)))?;
        let channel = as_channel(source)?;
        if let Err(e) = channel.type_check(&spec.type_name) {
            warn!("input '{}' rejected: {}", spec.name, e);
            return Err(e);
        }
        bound.insert(spec.name.clone(), channel);
    }
    if let Some(extra) = provided.keys().next() {
        return Err(TypesError::InvalidArgument(format!("undeclared input '{extra}'")));
    }
    debug!("bound {} input(s)", bound.len());
    Ok(bound)
}

//! Validación de type names compartida por Artifact y Channel.

use crate::config::CONFIG;
use crate::errors::{TypesError, TypesResult};

/// Un type name válido es no vacío, sin espacios en los extremos, sin
/// caracteres de control y de longitud acotada por `CONFIG`.
///
/// La comparación entre type names es igualdad exacta (sensible a
/// mayúsculas); no se normaliza nada aquí.
pub fn validate_type_name(type_name: &str) -> TypesResult<()> {
    validate_type_name_with(type_name, CONFIG.type_name_max_len)
}

pub(crate) fn validate_type_name_with(type_name: &str, max_len: usize) -> TypesResult<()> {
    if type_name.trim().is_empty() {
        return Err(TypesError::InvalidArgument("type name must be a non-empty string".into()));
    }
    if type_name.trim() != type_name {
        return Err(TypesError::InvalidArgument(format!("type name '{type_name}' has leading or trailing whitespace")));
    }
    if type_name.chars().any(char::is_control) {
        return Err(TypesError::InvalidArgument(format!("type name {type_name:?} contains control characters")));
    }
    if type_name.chars().count() > max_len {
        return Err(TypesError::InvalidArgument(format!("type name exceeds {max_len} characters")));
    }
    Ok(())
}

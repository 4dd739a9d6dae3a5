//! Errores del core de tipos.
//!
//! Todas las violaciones se devuelven en el punto donde ocurren (construcción
//! o chequeo) y nunca se recuperan internamente: un error de tipos indica una
//! definición de pipeline inválida que el constructor del grafo debe abortar.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TypesError {
    /// Entrada mal formada o vacía (type name inválido, colección vacía,
    /// fuente que no es Channel ni colección de artifacts).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Un Channel recibió artifacts cuyo type name no coincide con el suyo.
    #[error("type mismatch: channel expects '{expected}' but artifact has type '{found}'")]
    TypeMismatch { expected: String, found: String },
    /// `Channel::type_check` con un type name esperado distinto del real.
    #[error("type check failed: expected type '{expected}' but channel has type '{actual}'")]
    TypeCheck { expected: String, actual: String },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TypesError {
    fn from(e: serde_json::Error) -> Self {
        TypesError::Serialization(e.to_string())
    }
}

pub type TypesResult<T> = Result<T, TypesError>;

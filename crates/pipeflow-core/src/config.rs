//! Carga de configuración desde variables de entorno.
//! Usa `.env` si existe (cargado una sola vez) y defaults en otro caso.

use std::env;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::constants::{DEFAULT_TYPE_NAME_MAX_LEN, ENV_TYPE_NAME_MAX_LEN};

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypesConfig {
    /// Longitud máxima aceptada para un type name de Artifact o Channel.
    pub type_name_max_len: usize,
}

impl Default for TypesConfig {
    fn default() -> Self {
        Self { type_name_max_len: DEFAULT_TYPE_NAME_MAX_LEN }
    }
}

impl TypesConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let raw = env::var(ENV_TYPE_NAME_MAX_LEN).ok();
        Self { type_name_max_len: parse_max_len(raw.as_deref()) }
    }
}

/// Valores ausentes, no numéricos o cero caen al default.
fn parse_max_len(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse().ok())
       .filter(|n: &usize| *n > 0)
       .unwrap_or(DEFAULT_TYPE_NAME_MAX_LEN)
}

/// Instancia global perezosa, evaluada una sola vez por proceso.
pub static CONFIG: Lazy<TypesConfig> = Lazy::new(TypesConfig::from_env);

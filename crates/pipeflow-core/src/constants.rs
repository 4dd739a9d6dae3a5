//! Constantes del core de tipos.
//!
//! Las claves de propiedades bien conocidas se guardan en el mismo mapa de
//! propiedades que cualquier otra; el metadata store no las distingue.

/// Longitud máxima por defecto de un type name (ancho de la columna de tipos
/// del metadata store).
pub const DEFAULT_TYPE_NAME_MAX_LEN: usize = 255;

/// Variable de entorno que sobreescribe `DEFAULT_TYPE_NAME_MAX_LEN`.
pub const ENV_TYPE_NAME_MAX_LEN: &str = "PIPEFLOW_TYPE_NAME_MAX_LEN";

pub const PROPERTY_SPLIT: &str = "split";
pub const PROPERTY_SPAN: &str = "span";
pub const PROPERTY_NAME: &str = "name";
pub const PROPERTY_PRODUCER_COMPONENT: &str = "producer_component";
pub const PROPERTY_STATE: &str = "state";

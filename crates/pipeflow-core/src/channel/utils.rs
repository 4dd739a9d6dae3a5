//! Utilidades de normalización sobre Channels.
//!
//! - `as_channel`: único punto de coerción "Channel o artifacts crudos" →
//!   `Channel`.
//! - `unwrap_channel_dict`: aplana un mapa nombre → Channel en nombre →
//!   artifacts para el executor, una vez hecho el chequeo de tipos.
use indexmap::IndexMap;
use log::debug;
use serde_json::Value;

use super::Channel;
use crate::errors::{TypesError, TypesResult};
use crate::model::Artifact;

/// Formas aceptadas donde se espera "un channel".
///
/// Conjunto cerrado: cada variante tiene un único camino en `as_channel`.
#[derive(Debug, Clone)]
pub enum ChannelSource {
    Channel(Channel),
    Artifacts(Vec<Artifact>),
    /// Cualquier otra forma; guarda una descripción para el mensaje de error.
    Invalid(String),
}

impl ChannelSource {
    /// Resuelve un valor JSON de capas externas. Sólo un array de registros de
    /// artifact (ver `Artifact::to_json`) cuenta como colección; los
    /// artifacts decodificados son nuevos. Un registro mal formado propaga
    /// su error.
    pub fn from_value(value: &Value) -> TypesResult<Self> {
        match value {
            Value::Array(items) => {
                if items.iter().any(|v| !v.is_object()) {
                    return Ok(ChannelSource::Invalid("array containing non-artifact values".into()));
                }
                let artifacts = items.iter().map(Artifact::from_json).collect::<TypesResult<Vec<_>>>()?;
                Ok(ChannelSource::Artifacts(artifacts))
            }
            other => Ok(ChannelSource::Invalid(format!("json {}", json_kind(other)))),
        }
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<Channel> for ChannelSource {
    fn from(ch: Channel) -> Self { ChannelSource::Channel(ch) }
}

impl From<Vec<Artifact>> for ChannelSource {
    fn from(artifacts: Vec<Artifact>) -> Self { ChannelSource::Artifacts(artifacts) }
}

/// Clona las referencias, no los artifacts.
impl From<&[Artifact]> for ChannelSource {
    fn from(artifacts: &[Artifact]) -> Self { ChannelSource::Artifacts(artifacts.to_vec()) }
}

impl<const N: usize> From<[Artifact; N]> for ChannelSource {
    fn from(artifacts: [Artifact; N]) -> Self { ChannelSource::Artifacts(artifacts.into()) }
}

impl From<&str> for ChannelSource {
    fn from(s: &str) -> Self { ChannelSource::Invalid(format!("string '{s}'")) }
}

impl From<String> for ChannelSource {
    fn from(s: String) -> Self { ChannelSource::from(s.as_str()) }
}

/// Convierte la fuente en un Channel.
///
/// - Channel: se devuelve tal cual (idempotente).
/// - Colección no vacía: type name inferido del primer elemento; la
///   construcción vuelve a validar la homogeneidad (`TypeMismatch`).
/// - Colección vacía u otra forma: `InvalidArgument`.
pub fn as_channel(source: impl Into<ChannelSource>) -> TypesResult<Channel> {
    match source.into() {
        ChannelSource::Channel(ch) => Ok(ch),
        ChannelSource::Artifacts(artifacts) => {
            let type_name = match artifacts.first() {
                Some(first) => first.type_name().to_string(),
                None => return Err(TypesError::InvalidArgument("cannot infer type from empty collection".into())),
            };
            debug!("inferred channel type '{}' from {} artifact(s)", type_name, artifacts.len());
            Channel::with_artifacts(&type_name, artifacts)
        }
        ChannelSource::Invalid(shape) => {
            Err(TypesError::InvalidArgument(format!("invalid source for channel: {shape}; expected a channel or a collection of artifacts")))
        }
    }
}

/// Reemplaza cada Channel por su lista de artifacts, preservando claves y
/// orden de iteración de la entrada.
pub fn unwrap_channel_dict<'a, K, I>(channels: I) -> IndexMap<String, Vec<Artifact>>
    where I: IntoIterator<Item = (K, &'a Channel)>,
          K: AsRef<str>
{
    channels.into_iter()
            .map(|(key, ch)| (key.as_ref().to_string(), ch.get()))
            .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invalid_source_message_describes_shape() {
        let err = as_channel("invalid source").unwrap_err();
        match err {
            TypesError::InvalidArgument(msg) => assert!(msg.contains("string 'invalid source'")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_value_rejects_scalars_and_objects() {
        for v in [json!(null), json!(3), json!("x"), json!({"type_name": "T"})] {
            let src = ChannelSource::from_value(&v).unwrap();
            assert!(matches!(src, ChannelSource::Invalid(_)), "{v} should be invalid");
        }
        let src = ChannelSource::from_value(&json!([1, 2])).unwrap();
        assert!(matches!(src, ChannelSource::Invalid(_)));
    }

    #[test]
    fn from_value_decodes_artifact_records() {
        let v = json!([{"type_name": "Examples", "uri": "/a"}, {"type_name": "Examples", "uri": "/b"}]);
        let ch = as_channel(ChannelSource::from_value(&v).unwrap()).unwrap();
        assert_eq!(ch.type_name(), "Examples");
        let uris: Vec<String> = ch.get().iter().map(Artifact::uri).collect();
        assert_eq!(uris, vec!["/a", "/b"]);
    }

    #[test]
    fn from_value_empty_array_fails_in_as_channel() {
        let src = ChannelSource::from_value(&json!([])).unwrap();
        assert!(matches!(as_channel(src), Err(TypesError::InvalidArgument(_))));
    }

    #[test]
    fn heterogeneous_collection_fails_with_type_mismatch() {
        let a = Artifact::new("Examples").unwrap();
        let b = Artifact::new("Schema").unwrap();
        let err = as_channel(vec![a, b]).unwrap_err();
        assert!(matches!(err, TypesError::TypeMismatch { .. }));
    }
}

//! Artifact: unidad de datos producida/consumida por los componentes.
//!
//! Un `Artifact` es un handle barato (un `Arc` interno):
//! - `clone()` devuelve otra referencia al MISMO artifact, no una copia. Varios
//!   Channels pueden referenciar el mismo artifact y ver sus cambios.
//! - La igualdad es identidad de referencia, no comparación estructural.
//! - `type_name` es inmutable tras la construcción; no existe setter.
//! - Propiedades y `uri` son mutables por el componente productor. El `id` lo
//!   asigna el metadata store (ver `store::MetadataStore::publish`).
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::property::PropertyValue;
use super::state::ArtifactState;
use super::type_name::validate_type_name;
use crate::constants::{PROPERTY_NAME, PROPERTY_PRODUCER_COMPONENT, PROPERTY_SPAN, PROPERTY_SPLIT,
                       PROPERTY_STATE};
use crate::errors::{TypesError, TypesResult};

#[derive(Debug, Default)]
struct ArtifactData {
    id: Option<i64>,
    uri: String,
    properties: BTreeMap<String, PropertyValue>,
}

struct ArtifactInner {
    type_name: String,
    data: RwLock<ArtifactData>,
}

#[derive(Clone)]
pub struct Artifact {
    inner: Arc<ArtifactInner>,
}

/// Forma serializable de un artifact (registro del metadata store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactSnapshot {
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl Artifact {
    /// Crea un artifact sin propiedades. Falla con `InvalidArgument` si el
    /// type name no es válido.
    pub fn new(type_name: &str) -> TypesResult<Self> {
        validate_type_name(type_name)?;
        Ok(Self { inner: Arc::new(ArtifactInner { type_name: type_name.to_string(),
                                                  data: RwLock::new(ArtifactData::default()) }) })
    }

    // Los datos son planos: un lock envenenado sigue siendo legible.
    fn read(&self) -> RwLockReadGuard<'_, ArtifactData> {
        self.inner.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ArtifactData> {
        self.inner.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn type_name(&self) -> &str {
        &self.inner.type_name
    }

    /// Mismo tipo: igualdad exacta de type names.
    pub fn same_kind(&self, other: &Artifact) -> bool {
        self.type_name() == other.type_name()
    }

    pub fn id(&self) -> Option<i64> {
        self.read().id
    }

    /// Ejecuta `f` sobre el slot del id con el lock de escritura tomado, de
    /// modo que leer y asignar el id sea atómico para este artifact. `f` no
    /// debe volver a tocar el artifact.
    pub(crate) fn with_id_slot<R>(&self, f: impl FnOnce(&mut Option<i64>) -> R) -> R {
        let mut data = self.write();
        f(&mut data.id)
    }

    pub(crate) fn downgrade(&self) -> WeakArtifact {
        WeakArtifact(Arc::downgrade(&self.inner))
    }

    pub fn uri(&self) -> String {
        self.read().uri.clone()
    }

    pub fn set_uri(&self, uri: impl Into<String>) {
        self.write().uri = uri.into();
    }

    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        self.read().properties.get(name).cloned()
    }

    /// Guarda una propiedad sin validar contra ningún esquema.
    pub fn set_property(&self, name: &str, value: impl Into<PropertyValue>) {
        self.write().properties.insert(name.to_string(), value.into());
    }

    pub fn remove_property(&self, name: &str) -> Option<PropertyValue> {
        self.write().properties.remove(name)
    }

    /// Copia de las propiedades actuales.
    pub fn properties(&self) -> BTreeMap<String, PropertyValue> {
        self.read().properties.clone()
    }

    pub fn string_property(&self, name: &str) -> Option<String> {
        self.read().properties.get(name).and_then(|v| v.as_str()).map(str::to_string)
    }

    pub fn int_property(&self, name: &str) -> Option<i64> {
        self.read().properties.get(name).and_then(PropertyValue::as_int)
    }

    pub fn float_property(&self, name: &str) -> Option<f64> {
        self.read().properties.get(name).and_then(PropertyValue::as_float)
    }

    pub fn split(&self) -> String {
        self.string_property(PROPERTY_SPLIT).unwrap_or_default()
    }

    pub fn set_split(&self, split: &str) {
        self.set_property(PROPERTY_SPLIT, split);
    }

    pub fn span(&self) -> i64 {
        self.int_property(PROPERTY_SPAN).unwrap_or(0)
    }

    pub fn set_span(&self, span: i64) {
        self.set_property(PROPERTY_SPAN, span);
    }

    pub fn name(&self) -> String {
        self.string_property(PROPERTY_NAME).unwrap_or_default()
    }

    pub fn set_name(&self, name: &str) {
        self.set_property(PROPERTY_NAME, name);
    }

    pub fn producer_component(&self) -> String {
        self.string_property(PROPERTY_PRODUCER_COMPONENT).unwrap_or_default()
    }

    pub fn set_producer_component(&self, component_id: &str) {
        self.set_property(PROPERTY_PRODUCER_COMPONENT, component_id);
    }

    /// `None` si nunca se fijó o si el valor guardado no es un estado conocido.
    pub fn state(&self) -> Option<ArtifactState> {
        self.string_property(PROPERTY_STATE).and_then(|s| s.parse().ok())
    }

    pub fn set_state(&self, state: ArtifactState) {
        self.set_property(PROPERTY_STATE, state.as_str());
    }

    pub fn snapshot(&self) -> ArtifactSnapshot {
        let data = self.read();
        ArtifactSnapshot { type_name: self.type_name().to_string(),
                           id: data.id,
                           uri: data.uri.clone(),
                           properties: data.properties.clone() }
    }

    /// Reconstruye un artifact NUEVO (identidad distinta) desde su registro.
    /// Los ids del store son positivos; cualquier otro valor se rechaza.
    pub fn from_snapshot(snapshot: ArtifactSnapshot) -> TypesResult<Self> {
        if let Some(id) = snapshot.id.filter(|id| *id < 1) {
            return Err(TypesError::InvalidArgument(format!("artifact id must be positive, got {id}")));
        }
        let artifact = Self::new(&snapshot.type_name)?;
        {
            let mut data = artifact.write();
            data.id = snapshot.id;
            data.uri = snapshot.uri;
            data.properties = snapshot.properties;
        }
        Ok(artifact)
    }

    pub fn to_json(&self) -> TypesResult<Value> {
        Ok(serde_json::to_value(self.snapshot())?)
    }

    pub fn from_json(value: &Value) -> TypesResult<Self> {
        let snapshot: ArtifactSnapshot = serde_json::from_value(value.clone())?;
        Self::from_snapshot(snapshot)
    }
}

/// Referencia débil usada por el store para recordar a qué artifact pertenece
/// un id. Mantiene viva la asignación, así que la dirección no se reutiliza.
pub(crate) struct WeakArtifact(Weak<ArtifactInner>);

impl WeakArtifact {
    pub(crate) fn refers_to(&self, artifact: &Artifact) -> bool {
        std::ptr::eq(self.0.as_ptr(), Arc::as_ptr(&artifact.inner))
    }
}

impl PartialEq for Artifact {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Artifact {}

impl Hash for Artifact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.inner).hash(state);
    }
}

impl fmt::Debug for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read();
        f.debug_struct("Artifact")
         .field("type_name", &self.inner.type_name)
         .field("id", &data.id)
         .field("uri", &data.uri)
         .field("properties", &data.properties)
         .finish()
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id().map(|i| i.to_string()).unwrap_or_else(|| "none".to_string());
        write!(f, "Artifact(type_name: {}, uri: {}, split: {}, id: {})", self.type_name(), self.uri(), self.split(), id)
    }
}

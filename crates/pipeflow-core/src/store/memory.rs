use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::debug;

use super::{ArtifactRecord, MetadataStore};
use crate::errors::{TypesError, TypesResult};
use crate::model::artifact::WeakArtifact;
use crate::model::{Artifact, ArtifactState};

/// Un id reservado y el artifact dueño. `record` es `None` sólo mientras el
/// publish que reservó el id aún no escribió el registro.
struct StoredArtifact {
    owner: WeakArtifact,
    record: Option<ArtifactRecord>,
}

/// Store en memoria; ids secuenciales desde 1.
///
/// Un id pertenece a un único artifact: un artifact importado (p.ej. vía JSON)
/// cuyo id ya está reservado por otro artifact se rechaza sin tocar el store.
pub struct InMemoryMetadataStore {
    records: DashMap<i64, StoredArtifact>,
    next_id: AtomicI64,
}

impl InMemoryMetadataStore {
    pub fn new() -> Self {
        Self { records: DashMap::new(),
               next_id: AtomicI64::new(1) }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reserva el id que el artifact ya trae, si está libre o ya es suyo.
    fn claim_existing(&self, id: i64, artifact: &Artifact) -> TypesResult<()> {
        let next = id.checked_add(1)
                     .ok_or_else(|| TypesError::InvalidArgument(format!("artifact id {id} leaves no room for later ids")))?;
        match self.records.entry(id) {
            Entry::Occupied(e) if !e.get().owner.refers_to(artifact) => {
                return Err(TypesError::InvalidArgument(format!("artifact id {id} already assigned to another artifact")));
            }
            Entry::Occupied(_) => {}
            Entry::Vacant(e) => {
                e.insert(StoredArtifact { owner: artifact.downgrade(),
                                          record: None });
            }
        }
        self.next_id.fetch_max(next, Ordering::SeqCst);
        Ok(())
    }

    /// Reserva el siguiente id libre; salta los ocupados por importados.
    fn claim_fresh(&self, artifact: &Artifact) -> TypesResult<i64> {
        loop {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            if id < 1 {
                return Err(TypesError::InvalidArgument("artifact id space exhausted".into()));
            }
            if let Entry::Vacant(e) = self.records.entry(id) {
                e.insert(StoredArtifact { owner: artifact.downgrade(),
                                          record: None });
                return Ok(id);
            }
        }
    }
}

impl Default for InMemoryMetadataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataStore for InMemoryMetadataStore {
    fn publish(&self, artifact: &Artifact) -> TypesResult<i64> {
        let id = artifact.with_id_slot(|slot| {
                             let current = *slot;
                             match current {
                                 Some(id) => self.claim_existing(id, artifact).map(|_| id),
                                 None => {
                                     let id = self.claim_fresh(artifact)?;
                                     *slot = Some(id);
                                     Ok(id)
                                 }
                             }
                         })?;
        artifact.set_state(ArtifactState::Published);

        let snapshot = artifact.snapshot();
        let record = ArtifactRecord { id,
                                      type_name: snapshot.type_name,
                                      uri: snapshot.uri,
                                      properties: snapshot.properties,
                                      recorded_at: Utc::now() };
        if let Some(mut stored) = self.records.get_mut(&id) {
            stored.record = Some(record);
        }
        debug!("published artifact {} of type '{}'", id, artifact.type_name());
        Ok(id)
    }

    fn get(&self, id: i64) -> TypesResult<ArtifactRecord> {
        self.records
            .get(&id)
            .and_then(|s| s.record.clone())
            .ok_or_else(|| TypesError::NotFound(format!("artifact id {id}")))
    }

    fn list_by_type(&self, type_name: &str) -> Vec<ArtifactRecord> {
        let mut out: Vec<ArtifactRecord> = self.records
                                               .iter()
                                               .filter_map(|s| s.record.clone())
                                               .filter(|r| r.type_name == type_name)
                                               .collect();
        out.sort_by_key(|r| r.id);
        out
    }
}

use pipeflow_core::{as_channel, Artifact, Channel, InMemoryMetadataStore, MetadataStore, TypesError};
use rayon::prelude::*;

#[test]
fn channels_built_and_checked_in_parallel() {
    let type_names: Vec<String> = (0..64).map(|i| format!("Type{}", i % 4)).collect();
    let channels: Vec<Channel> = type_names.par_iter()
                                           .map(|t| {
                                               let arts = vec![Artifact::new(t).unwrap(), Artifact::new(t).unwrap()];
                                               let ch = as_channel(arts).unwrap();
                                               ch.type_check(t).unwrap();
                                               ch
                                           })
                                           .collect();
    assert_eq!(channels.len(), 64);
    assert!(channels.iter().zip(&type_names).all(|(ch, t)| ch.type_name() == t.as_str() && ch.len() == 2));
}

#[test]
fn parallel_publish_assigns_unique_ids() {
    let store = InMemoryMetadataStore::new();
    let shared = Artifact::new("Model").unwrap();
    let fresh: Vec<Artifact> = (0..100).map(|_| Artifact::new("Model").unwrap()).collect();

    let mut ids: Vec<i64> = fresh.par_iter().map(|a| store.publish(a).unwrap()).collect();
    // el mismo artifact publicado desde muchos hilos conserva un único id
    let shared_ids: Vec<i64> = (0..16).into_par_iter().map(|_| store.publish(&shared).unwrap()).collect();

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 100);
    assert!(shared_ids.iter().all(|id| Some(*id) == shared.id()));
    assert_eq!(store.len(), 101);
}

#[test]
fn parallel_imports_and_fresh_publishes_never_share_an_id() {
    let store = InMemoryMetadataStore::new();
    // intercalados: fresco, importado con id i, fresco, ...
    let mixed: Vec<Artifact> = (1..=200).flat_map(|id| {
                                            let imported = Artifact::from_json(&serde_json::json!({"type_name": "Model", "id": id})).unwrap();
                                            [Artifact::new("Examples").unwrap(), imported]
                                        })
                                        .collect();

    let results: Vec<Result<i64, TypesError>> = mixed.par_iter().map(|a| store.publish(a)).collect();

    let mut ids = Vec::new();
    for (artifact, r) in mixed.iter().zip(&results) {
        match r {
            Ok(id) => ids.push(*id),
            Err(e) => {
                assert_eq!(artifact.type_name(), "Model", "fresh publishes never fail");
                assert!(matches!(e, TypesError::InvalidArgument(_)), "unexpected error: {e:?}");
            }
        }
    }
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert_eq!(store.len(), total);
    assert_eq!(store.list_by_type("Examples").len(), 200);
}

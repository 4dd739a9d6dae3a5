use pipeflow_core::{artifact_utils, as_channel, unwrap_channel_dict, Artifact, ArtifactState, Channel, InMemoryMetadataStore,
                    MetadataStore, PropertyValue, TypesError};
use indexmap::IndexMap;
use serde_json::json;

#[test]
fn mutation_is_visible_through_every_channel() {
    let a = Artifact::new("Examples").unwrap();
    let ch1 = Channel::with_artifacts("Examples", vec![a.clone()]).unwrap();
    let ch2 = as_channel(vec![a.clone()]).unwrap();

    a.set_uri("/pipeline/CsvExampleGen/examples/1");
    a.set_property("file_format", "tfrecords_gzip");

    for ch in [&ch1, &ch2] {
        let arts = ch.get();
        let seen = &arts[0];
        assert_eq!(seen.uri(), "/pipeline/CsvExampleGen/examples/1");
        assert_eq!(seen.property("file_format"), Some(PropertyValue::from("tfrecords_gzip")));
    }
}

#[test]
fn over_long_type_name_is_rejected() {
    let name = "T".repeat(256);
    assert!(matches!(Artifact::new(&name), Err(TypesError::InvalidArgument(_))));
    assert!(matches!(Channel::new(&name), Err(TypesError::InvalidArgument(_))));
}

#[test]
fn typed_property_accessors() {
    let a = Artifact::new("ModelEvaluation").unwrap();
    a.set_property("accuracy", 0.92);
    a.set_property("examples", 1200);
    a.set_property("slice", "overall");
    assert_eq!(a.float_property("accuracy"), Some(0.92));
    assert_eq!(a.int_property("examples"), Some(1200));
    assert_eq!(a.float_property("examples"), Some(1200.0));
    assert_eq!(a.string_property("slice").as_deref(), Some("overall"));
    assert_eq!(a.string_property("accuracy"), None);
    assert_eq!(a.remove_property("slice"), Some(PropertyValue::from("overall")));
    assert_eq!(a.property("slice"), None);
}

#[test]
fn unknown_state_string_reads_as_none() {
    let a = Artifact::new("Model").unwrap();
    assert_eq!(a.state(), None);
    a.set_property("state", "archived");
    assert_eq!(a.state(), None);
    a.set_state(ArtifactState::Missing);
    assert_eq!(a.state(), Some(ArtifactState::Missing));
}

#[test]
fn publish_records_properties_and_state() {
    let store = InMemoryMetadataStore::new();
    let train = Artifact::new("Examples").unwrap();
    train.set_split("train");
    train.set_uri("/examples/train");
    let eval = Artifact::new("Examples").unwrap();
    eval.set_split("eval");
    let schema = Artifact::new("Schema").unwrap();

    for a in [&train, &eval, &schema] {
        store.publish(a).unwrap();
    }

    let examples = store.list_by_type("Examples");
    assert_eq!(examples.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(examples[0].uri, "/examples/train");
    assert_eq!(examples[0].properties.get("state"), Some(&PropertyValue::from("published")));
    assert_eq!(train.state(), Some(ArtifactState::Published));
    assert!(store.list_by_type("examples").is_empty());
}

#[test]
fn record_serializes_to_json() {
    let store = InMemoryMetadataStore::new();
    let a = Artifact::new("Schema").unwrap();
    a.set_property("version", 3);
    let id = store.publish(&a).unwrap();
    let v = serde_json::to_value(store.get(id).unwrap()).unwrap();
    assert_eq!(v["type_name"], json!("Schema"));
    assert_eq!(v["properties"]["version"], json!(3));
    assert!(v["recorded_at"].is_string());
}

#[test]
fn executor_picks_split_uris_from_unwrapped_inputs() {
    let train = Artifact::new("Examples").unwrap();
    train.set_split("train");
    train.set_uri("/ex/train");
    let eval = Artifact::new("Examples").unwrap();
    eval.set_split("eval");
    eval.set_uri("/ex/eval");

    let mut inputs = IndexMap::new();
    inputs.insert("examples", as_channel(vec![train, eval]).unwrap());
    let unwrapped = unwrap_channel_dict(&inputs);

    assert_eq!(artifact_utils::get_split_uri(&unwrapped["examples"], "train").unwrap(), "/ex/train");
    assert!(artifact_utils::get_single_uri(&unwrapped["examples"]).is_err());
}

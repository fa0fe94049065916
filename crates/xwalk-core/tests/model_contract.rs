//! # Model Contract Tests
//!
//! Exercises the public contract every collaborator relies on: validated
//! construction, stable identity, and lossless serde round-trips through
//! both JSON and YAML documents.

use xwalk_core::{
    ActionScriptModel, CategoryActionModel, CategoryModel, CategoryName, FixedClock, Identified,
    MimeType, ModifierModel, SeededUuids, Structure, Timestamp, ValidationError, VersionModel,
    XwalkError,
};

fn json_roundtrip<T>(value: &T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let json = serde_json::to_string(value).expect("serialize");
    serde_json::from_str(&json).expect("deserialize")
}

fn yaml_roundtrip<T>(value: &T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let yaml = serde_yaml::to_string(value).expect("serialize");
    serde_yaml::from_str(&yaml).expect("deserialize")
}

// ---------------------------------------------------------------------------
// Round-trips
// ---------------------------------------------------------------------------

#[test]
fn test_every_model_roundtrips_through_json_and_yaml() {
    let ts = Timestamp::parse("2026-03-01T09:30:00.5Z").unwrap();
    let version = VersionModel::new(Some("ana"), Some("Initial crosswalk"), Some(ts));
    assert_eq!(json_roundtrip(&version), version);
    assert_eq!(yaml_roundtrip(&version), version);

    let modifier = ModifierModel::new("+", "Merge").unwrap();
    assert_eq!(json_roundtrip(&modifier), modifier);
    assert_eq!(yaml_roundtrip(&modifier), modifier);

    for name in [CategoryName::Bool(true), CategoryName::Bool(false), "true".into(), "Retail".into()] {
        let category = CategoryModel::new(name.clone(), Some("term"));
        let json = json_roundtrip(&category);
        let yaml = yaml_roundtrip(&category);
        assert_eq!(json, category);
        assert_eq!(yaml, category);
        assert_eq!(yaml.name(), &name);
    }

    for literal in ["boolean", "unique"] {
        let action = CategoryActionModel::new("CATEGORISE", "Categorise", "Assign terms", literal).unwrap();
        assert_eq!(json_roundtrip(&action), action);
        assert_eq!(yaml_roundtrip(&action).structure().as_str(), literal);
    }

    let script = ActionScriptModel::new("CATEGORISE > 'occupation' < 'job_title'::['teacher']");
    assert_eq!(json_roundtrip(&script), script);
    assert_eq!(yaml_roundtrip(&script), script);

    for mime in MimeType::all() {
        assert_eq!(json_roundtrip(mime), *mime);
    }
}

#[test]
fn test_yaml_boolean_and_quoted_names_resolve_differently() {
    let flag: CategoryModel = serde_yaml::from_str("name: true\n").unwrap();
    let text: CategoryModel = serde_yaml::from_str("name: \"true\"\n").unwrap();
    assert_eq!(flag.name(), &CategoryName::Bool(true));
    assert_eq!(text.name(), &CategoryName::Text("true".into()));
}

// ---------------------------------------------------------------------------
// Validation at the document boundary
// ---------------------------------------------------------------------------

#[test]
fn test_invalid_documents_rejected_not_coerced() {
    assert!(serde_yaml::from_str::<ModifierModel>("name: ab\ntitle: x\n").is_err());
    assert!(serde_yaml::from_str::<CategoryActionModel>(
        "name: X\ntitle: X\ndescription: X\nstructure: set\n"
    )
    .is_err());
    assert!(serde_yaml::from_str::<ActionScriptModel>("uuid: nope\nscript: x\n").is_err());
    assert!(serde_yaml::from_str::<VersionModel>("updated: last tuesday\n").is_err());
}

#[test]
fn test_errors_name_one_field() {
    let errors = [
        ModifierModel::new("xy", "t").unwrap_err(),
        CategoryActionModel::new("A", "B", "C", "set").unwrap_err(),
        xwalk_core::CategoryId::parse("0").unwrap_err(),
        Timestamp::parse("0").unwrap_err(),
    ];
    let fields: Vec<_> = errors.iter().map(ValidationError::field).collect();
    assert_eq!(fields, ["name", "structure", "uuid", "updated"]);
}

#[test]
fn test_unsupported_mime_type() {
    let err = "application/pdf".parse::<MimeType>().unwrap_err();
    assert!(matches!(err, XwalkError::UnsupportedMimeType(ref s) if s == "application/pdf"));
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

#[test]
fn test_identity_keys() {
    let modifier = ModifierModel::new("~", "Fuzzy").unwrap();
    assert_eq!(modifier.identity(), '~');

    let action = CategoryActionModel::unique("DEDUPE", "Deduplicate", "Remove duplicate rows");
    assert_eq!(action.identity(), "DEDUPE");

    let category = CategoryModel::new("Retail", None);
    assert_eq!(category.identity(), category.uuid());

    let script = ActionScriptModel::new("DEBLANK");
    assert_eq!(script.identity(), script.uuid());
}

#[test]
fn test_seeded_generation_is_reproducible_across_models() {
    let build = || {
        let mut ids = SeededUuids::new(2026);
        (
            CategoryModel::new_with_ids(&mut ids, true, None),
            ActionScriptModel::new_with_ids(&mut ids, "DEBLANK"),
        )
    };
    let (c1, s1) = build();
    let (c2, s2) = build();
    assert_eq!(c1, c2);
    assert_eq!(s1, s2);
    assert_ne!(c1.uuid().as_uuid(), s1.uuid().as_uuid());
}

#[test]
fn test_fixed_clock_version() {
    let ts = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
    let version = VersionModel::new_with_clock(&FixedClock(ts), None::<&str>, None::<&str>, None);
    assert_eq!(version.updated(), ts);
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn test_models_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<VersionModel>();
    assert_send_sync::<ModifierModel>();
    assert_send_sync::<CategoryModel>();
    assert_send_sync::<CategoryActionModel>();
    assert_send_sync::<ActionScriptModel>();
    assert_send_sync::<MimeType>();
    assert_send_sync::<Structure>();
}

#[test]
fn test_concurrent_construction_yields_distinct_ids() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (0..64)
                    .map(|_| CategoryModel::new("Retail", None).uuid())
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let mut all = std::collections::HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(all.insert(id));
        }
    }
    assert_eq!(all.len(), 8 * 64);
}

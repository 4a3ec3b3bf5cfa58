use pretty_assertions::assert_eq;
use resource_db::config::{validate, DB_BACKEND_ENV, DB_PATH_ENV};
use resource_db::{
    db_spec_from_env, load_from_path, resolve, AppConfig, AppState, BackendKind, ConfigError, DbError, FieldType,
    SchemaError,
};
use serde_json::json;
use std::io::Write;

fn library_config() -> AppConfig {
    serde_json::from_value(json!({
        "db": {"backend": "Default"},
        "resources": [
            {
                "name": "book",
                "fields": [
                    {"name": "title", "type": "str"},
                    {"name": "subtitle", "type": "str", "optional": true, "default": {"value": null}},
                    {"name": "pages", "type": "int", "default": {"value": 0}},
                    {"name": "added_at", "type": "datetime", "default": {"factory": "now"}},
                    {"name": "blurb", "type": "str", "title": "Blurb", "description": "Back cover text", "default": {}}
                ]
            },
            {"name": "author", "fields": [{"name": "name", "type": "string"}]}
        ]
    }))
    .unwrap()
}

// ── Parsing and resolution ───────────────────────────────────────

#[test]
fn config_deserializes_with_defaults() {
    let config: AppConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(config.db.backend, BackendKind::Default);
    assert!(config.resources.is_empty());

    let config = library_config();
    assert_eq!(config.resources.len(), 2);
    assert_eq!(config.resources[0].fields[1].type_, FieldType::String);
    assert!(config.resources[0].fields[1].optional);
}

#[test]
fn resolve_builds_models_in_config_order() {
    let model = resolve(&library_config()).unwrap();
    assert_eq!(model.names().collect::<Vec<_>>(), vec!["book", "author"]);

    let book = model.resource("book").unwrap();
    assert_eq!(
        book.create().field_names(),
        vec!["title", "subtitle", "pages", "added_at", "blurb"]
    );
    let blurb = book.create().get("blurb").unwrap();
    assert_eq!(blurb.title, "Blurb");
    assert_eq!(blurb.description, "Back cover text");
    assert!(!blurb.is_required());
    assert!(book.create().get("title").unwrap().is_required());
    assert!(model.resource("missing").is_none());
}

#[test]
fn resolving_twice_yields_identical_shapes() {
    let config = library_config();
    let first = resolve(&config).unwrap();
    let second = resolve(&config).unwrap();
    for name in ["book", "author"] {
        let (a, b) = (first.resource(name).unwrap(), second.resource(name).unwrap());
        assert!(a.create().same_structure(b.create()), "{name}");
        assert!(a.response().same_structure(b.response()), "{name}");
        assert!(a.update().same_structure(b.update()), "{name}");
    }
}

#[test]
fn duplicate_resource_is_rejected() {
    let config: AppConfig = serde_json::from_value(json!({
        "resources": [{"name": "book"}, {"name": "book"}]
    }))
    .unwrap();
    assert_eq!(validate(&config).unwrap_err(), SchemaError::DuplicateResource("book".into()));
    assert!(matches!(
        resolve(&config),
        Err(ConfigError::Schema(SchemaError::DuplicateResource(_)))
    ));
}

#[test]
fn duplicate_field_is_rejected() {
    let config: AppConfig = serde_json::from_value(json!({
        "resources": [{"name": "book", "fields": [
            {"name": "title", "type": "str"},
            {"name": "title", "type": "int"}
        ]}]
    }))
    .unwrap();
    assert_eq!(
        validate(&config).unwrap_err(),
        SchemaError::DuplicateField {
            resource: "book".into(),
            field: "title".into()
        }
    );
}

#[test]
fn unknown_factory_is_rejected() {
    let config: AppConfig = serde_json::from_value(json!({
        "resources": [{"name": "book", "fields": [
            {"name": "code", "type": "str", "default": {"factory": "random"}}
        ]}]
    }))
    .unwrap();
    assert_eq!(
        validate(&config).unwrap_err(),
        SchemaError::UnknownFactory {
            field: "code".into(),
            factory: "random".into()
        }
    );
    assert!(config.resources[0].fields[0].to_descriptor().is_err());
}

#[test]
fn reserved_and_malformed_names_are_rejected() {
    let reserved: AppConfig = serde_json::from_value(json!({
        "resources": [{"name": "book", "fields": [{"name": "id", "type": "uuid"}]}]
    }))
    .unwrap();
    assert_eq!(validate(&reserved).unwrap_err(), SchemaError::ReservedField("id".into()));

    let unnamed: AppConfig = serde_json::from_value(json!({"resources": [{"name": ""}]})).unwrap();
    assert_eq!(validate(&unnamed).unwrap_err(), SchemaError::EmptyResourceName);

    let internal: AppConfig = serde_json::from_value(json!({"resources": [{"name": "_schema"}]})).unwrap();
    assert_eq!(
        validate(&internal).unwrap_err(),
        SchemaError::InvalidResourceName("_schema".into())
    );
}

#[test]
fn unknown_backend_fails_to_parse() {
    let parsed = serde_json::from_value::<AppConfig>(json!({"db": {"backend": "Cassandra"}}));
    assert!(parsed.is_err());
}

// ── Loading ──────────────────────────────────────────────────────

#[tokio::test]
async fn load_from_path_reads_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "{}",
        json!({"db": {"path": "/data", "backend": "tinydb"}, "resources": [{"name": "note"}]})
    )
    .unwrap();

    let config = load_from_path(file.path()).await.unwrap();
    assert_eq!(config.db.path, "/data");
    assert_eq!(config.db.backend, BackendKind::TinyDb);
    assert_eq!(config.resources[0].name, "note");
}

#[tokio::test]
async fn load_from_path_reports_io_and_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(load_from_path(&missing).await, Err(ConfigError::Load(_))));

    let garbage = dir.path().join("garbage.json");
    std::fs::write(&garbage, "not json").unwrap();
    assert!(matches!(load_from_path(&garbage).await, Err(ConfigError::Load(_))));
}

// Only test in this binary that touches the process environment.
#[test]
fn db_spec_from_env_reads_both_variables() {
    std::env::remove_var(DB_PATH_ENV);
    std::env::remove_var(DB_BACKEND_ENV);
    let spec = db_spec_from_env().unwrap();
    assert_eq!(spec.path, "");
    assert_eq!(spec.backend, BackendKind::Default);

    std::env::set_var(DB_PATH_ENV, "redis://localhost");
    std::env::set_var(DB_BACKEND_ENV, "redis");
    let spec = db_spec_from_env().unwrap();
    assert_eq!(spec.path, "redis://localhost");
    assert_eq!(spec.backend, BackendKind::Redis);

    std::env::set_var(DB_BACKEND_ENV, "Oracle");
    assert!(matches!(
        db_spec_from_env(),
        Err(ConfigError::Db(DbError::UnknownBackend(name))) if name == "Oracle"
    ));

    std::env::remove_var(DB_PATH_ENV);
    std::env::remove_var(DB_BACKEND_ENV);
}

// ── AppState ─────────────────────────────────────────────────────

#[test]
fn app_state_binds_one_service_per_resource() {
    let state = AppState::from_config(&library_config()).unwrap();
    assert_eq!(*state.names, vec!["book".to_string(), "author".to_string()]);
    let book = state.service("book").unwrap();
    assert_eq!(book.db().table(), "book");
    assert_eq!(book.db().backend(), BackendKind::Default);
    assert!(state.service("missing").is_none());
}

#[test]
fn app_state_surfaces_schema_errors() {
    let config: AppConfig = serde_json::from_value(json!({
        "resources": [{"name": "book", "fields": [{"name": "bad name", "type": "str"}]}]
    }))
    .unwrap();
    assert!(matches!(
        AppState::from_config(&config),
        Err(ConfigError::Schema(SchemaError::InvalidFieldName(_)))
    ));
}

use pretty_assertions::assert_eq;
use resource_db::store::UnimplementedAdapter;
use resource_db::{
    create_adapter, AdapterRegistry, BackendKind, Db, DbError, DbSpecification, PaginateParameters, ResourceId,
    ResourceObj, StorageAdapter,
};
use serde_json::json;
use std::sync::Arc;

// ── BackendKind / DbSpecification ────────────────────────────────

#[test]
fn backend_names_parse_case_insensitively() {
    assert_eq!("Default".parse::<BackendKind>().unwrap(), BackendKind::Default);
    assert_eq!("postgres".parse::<BackendKind>().unwrap(), BackendKind::Postgres);
    assert_eq!("REDIS".parse::<BackendKind>().unwrap(), BackendKind::Redis);
    assert_eq!("sqlite".parse::<BackendKind>().unwrap(), BackendKind::Sqlite);
    assert_eq!("TinyDB".parse::<BackendKind>().unwrap(), BackendKind::TinyDb);
    assert_eq!(
        "Mongo".parse::<BackendKind>().unwrap_err(),
        DbError::UnknownBackend("Mongo".into())
    );
}

#[test]
fn backend_display_uses_canonical_names() {
    let names: Vec<String> = BackendKind::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, vec!["Default", "Postgres", "Redis", "SQLite", "TinyDB"]);
}

#[test]
fn specification_parse() {
    let spec = DbSpecification::parse("/tmp/db", "sqlite").unwrap();
    assert_eq!(spec, DbSpecification::new("/tmp/db", BackendKind::Sqlite));
    assert_eq!(
        DbSpecification::parse("", "Nope").unwrap_err(),
        DbError::UnknownBackend("Nope".into())
    );
}

#[test]
fn specification_serde() {
    let spec: DbSpecification = serde_json::from_value(json!({})).unwrap();
    assert_eq!(spec, DbSpecification::default());
    assert_eq!(spec.backend, BackendKind::Default);

    let spec: DbSpecification = serde_json::from_value(json!({"path": "redis://x", "client": "Redis"})).unwrap();
    assert_eq!(spec, DbSpecification::new("redis://x", BackendKind::Redis));

    assert!(serde_json::from_value::<DbSpecification>(json!({"backend": "Nope"})).is_err());

    let out = serde_json::to_value(DbSpecification::new("", BackendKind::TinyDb)).unwrap();
    assert_eq!(out, json!({"path": "", "backend": "TinyDB"}));
}

// ── Registry ─────────────────────────────────────────────────────

#[test]
fn default_registry_knows_every_backend() {
    let registry = AdapterRegistry::default();
    assert_eq!(registry.kinds(), BackendKind::ALL.to_vec());
    for kind in BackendKind::ALL {
        assert!(registry.contains(kind));
    }
}

#[tokio::test]
async fn create_adapter_default_is_usable() {
    let adapter = create_adapter(&DbSpecification::default(), "books").unwrap();
    assert_eq!(adapter.backend(), BackendKind::Default);
    assert_eq!(adapter.table(), "books");

    let id = ResourceId::new_v4();
    adapter.insert_one(id, ResourceObj::new()).await.unwrap();
    assert_eq!(adapter.select_one(id).await.unwrap()["id"], json!(id.to_string()));
}

#[test]
fn empty_registry_rejects_everything() {
    let registry = AdapterRegistry::empty();
    assert!(registry.kinds().is_empty());
    let err = registry.create(&DbSpecification::default(), "books").err().unwrap();
    assert_eq!(err, DbError::UnknownBackend("Default".into()));
}

fn failing_factory(_spec: &DbSpecification, _table: &str) -> Result<Arc<dyn StorageAdapter>, DbError> {
    Err(DbError::UnknownBackend("offline".into()))
}

#[test]
fn registered_factory_errors_propagate() {
    let mut registry = AdapterRegistry::empty();
    registry.register(BackendKind::Redis, failing_factory);
    assert_eq!(registry.kinds(), vec![BackendKind::Redis]);

    let spec = DbSpecification::new("", BackendKind::Redis);
    let err = registry.create(&spec, "books").err().unwrap();
    assert_eq!(err, DbError::UnknownBackend("offline".into()));
}

#[tokio::test]
async fn stub_backends_fail_every_operation() {
    let id = ResourceId::new_v4();
    for kind in [BackendKind::Postgres, BackendKind::Redis, BackendKind::Sqlite, BackendKind::TinyDb] {
        let adapter = create_adapter(&DbSpecification::new("conn", kind), "books").unwrap();
        assert_eq!(adapter.backend(), kind);

        let expect = |operation: &'static str| DbError::NotImplemented {
            backend: kind,
            operation,
        };
        assert_eq!(adapter.insert_one(id, ResourceObj::new()).await.unwrap_err(), expect("insert_one"));
        assert_eq!(adapter.select_one(id).await.unwrap_err(), expect("select_one"));
        assert_eq!(
            adapter.update_one(id, ResourceObj::new(), true).await.unwrap_err(),
            expect("update_one")
        );
        assert_eq!(adapter.delete_one(id).await.unwrap_err(), expect("delete_one"));
        assert_eq!(
            adapter.select_many(PaginateParameters::default()).await.unwrap_err(),
            expect("select_many")
        );
    }
}

#[test]
fn unimplemented_adapter_keeps_its_binding() {
    let adapter = UnimplementedAdapter::new(BackendKind::Postgres, "postgres://db", "books");
    assert_eq!(adapter.path(), "postgres://db");
    assert_eq!(adapter.table(), "books");
}

// ── Db facade ────────────────────────────────────────────────────

#[tokio::test]
async fn db_facade_delegates() {
    let db = Db::new(&DbSpecification::default(), "authors").unwrap();
    assert_eq!(db.backend(), BackendKind::Default);
    assert_eq!(db.table(), "authors");

    let id = ResourceId::new_v4();
    let mut obj = ResourceObj::new();
    obj.insert("name".into(), json!("Le Guin"));
    obj.insert("born".into(), json!(1929));
    db.insert_one(id, obj).await.unwrap();

    let mut replacement = ResourceObj::new();
    replacement.insert("name".into(), json!("Ursula K. Le Guin"));
    let out = db.replace_one(id, replacement).await.unwrap();
    assert_eq!(out.keys().map(String::as_str).collect::<Vec<_>>(), vec!["id", "name"]);

    db.delete_one(id).await.unwrap();
    assert_eq!(db.select_one(id).await.unwrap_err(), DbError::NotFound(id));
}

#[tokio::test]
async fn cloned_db_shares_the_adapter() {
    let db = Db::new(&DbSpecification::default(), "authors").unwrap();
    let other = db.clone();
    let id = ResourceId::new_v4();
    db.insert_one(id, ResourceObj::new()).await.unwrap();
    assert!(other.select_one(id).await.is_ok());
    assert!(Arc::ptr_eq(db.adapter(), other.adapter()));
}

use jumpback::clock::ManualClock;
use jumpback::config::JumpbackConfig;
use jumpback::model::Cursor;
use jumpback::session::Jumpback;
use jumpback::store::backend::StorageAdapter;
use jumpback::store::fs_backend::FsAdapter;
use jumpback::test_utils::FakeEditor;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const NOW: i64 = 1_700_000_000_000;

fn setup() -> (TempDir, FsAdapter) {
    let vault = TempDir::new().unwrap();
    let adapter = FsAdapter::new(vault.path());
    (vault, adapter)
}

#[test]
fn test_fs_adapter_basic_io() {
    let (_vault, adapter) = setup();
    let path = Path::new("positions.json");

    assert!(!adapter.exists(path).unwrap());
    adapter.write(path, r#"{"a.md":{"scroll":1.0}}"#).unwrap();
    assert!(adapter.exists(path).unwrap());
    assert_eq!(
        adapter.read_if_exists(path).unwrap(),
        Some(r#"{"a.md":{"scroll":1.0}}"#.to_string())
    );

    adapter.write(path, "{}").unwrap();
    assert_eq!(adapter.read_if_exists(path).unwrap(), Some("{}".to_string()));
}

#[test]
fn test_fs_adapter_atomic_write_artifacts() {
    let (vault, adapter) = setup();
    adapter.write(Path::new("positions.json"), "{}").unwrap();

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(vault.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_adapter_mkdir_nested() {
    let (vault, adapter) = setup();
    adapter.mkdir(Path::new("a/b/c")).unwrap();
    assert!(vault.path().join("a/b/c").is_dir());
    // Idempotent
    adapter.mkdir(Path::new("a/b/c")).unwrap();
}

#[test]
fn test_session_against_real_files() {
    let (vault, adapter) = setup();
    let clock = ManualClock::new(NOW);
    let config = JumpbackConfig::default();
    let db_file = vault.path().join(&config.db_file_name);

    let mut jb = Jumpback::load(config.clone(), &adapter, &clock);
    let mut editor = FakeEditor::open("notes/today.md");
    editor.selection = Some(Cursor::caret(4, 0));
    editor.scroll = Some(33.333_33);
    jb.on_content_changed(&editor);
    jb.shutdown().unwrap();

    // Parent plugin directory was created on demand.
    assert!(db_file.exists());
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&db_file).unwrap()).unwrap();
    let entry = &raw["notes/today.md"];
    assert_eq!(entry["cursor"]["from"]["line"], 4);
    assert_eq!(entry["scroll"], 33.3333);
    assert_eq!(entry["lastSavedTime"], NOW);

    let reloaded = Jumpback::load(config, &adapter, &clock);
    assert_eq!(
        reloaded.store().get(&"notes/today.md".into()).unwrap().cursor,
        Some(Cursor::caret(4, 0))
    );
}

#[test]
fn test_session_reads_database_written_by_plugin() {
    let (vault, adapter) = setup();
    let config = JumpbackConfig {
        db_file_name: "data/cursor-positions.json".to_string(),
        ..Default::default()
    };
    fs::create_dir_all(vault.path().join("data")).unwrap();
    fs::write(
        vault.path().join("data/cursor-positions.json"),
        r#"{"a.md":{"scroll":120.5,"cursor":{"from":{"ch":0,"line":9},"to":{"ch":4,"line":9}},"lastSavedTime":1699990000000},"b.md":{"scroll":7}}"#,
    )
    .unwrap();

    let clock = ManualClock::new(NOW);
    let jb = Jumpback::load(config, &adapter, &clock);

    assert_eq!(jb.store().len(), 2);
    let a = jb.store().get(&"a.md".into()).unwrap();
    assert_eq!(a.scroll, Some(120.5));
    assert_eq!(a.target_label(), "Line 10");
    let b = jb.store().get(&"b.md".into()).unwrap();
    assert_eq!(b.scroll, Some(7.0));
    assert_eq!(b.last_saved_time, Some(NOW));
}

#[test]
fn test_unwritable_location_keeps_state_in_memory() {
    let (vault, adapter) = setup();
    // A file where the parent directory should be makes mkdir fail.
    fs::write(vault.path().join("blocked"), "").unwrap();
    let config = JumpbackConfig {
        db_file_name: "blocked/positions.json".to_string(),
        ..Default::default()
    };
    let clock = ManualClock::new(NOW);
    let mut jb = Jumpback::load(config, &adapter, &clock);
    jb.on_content_changed(&FakeEditor::open("a.md"));

    assert!(jb.flush().is_err());
    assert!(jb.should_flush());
    assert_eq!(jb.store().len(), 1);
}

use super::*;
use shared::domain::ContactId;

fn oleg() -> Contact {
    Contact::new(ContactId(1), "Oleg Lutin", "89991112233", "Test comment")
}

fn masha() -> Contact {
    Contact::new(ContactId(2), "Masha Butova", "899955544", "")
}

#[test]
fn round_trip_preserves_fields_and_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("contacts.json"));
    let contacts = vec![masha(), oleg()];

    store.save(&contacts).expect("save");
    assert_eq!(store.load(), contacts);
}

#[test]
fn writes_pretty_json_array_with_empty_comment() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("contacts.json");

    write_contacts(&path, &[oleg(), masha()]).expect("write");

    let raw = fs::read_to_string(&path).expect("read back");
    assert!(raw.starts_with("[\n  {"), "expected pretty output: {raw}");
    let data: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(data[0]["name"], "Oleg Lutin");
    assert_eq!(data[1]["name"], "Masha Butova");
    assert_eq!(data[1]["comment"], "");
}

#[test]
fn keeps_non_ascii_text_readable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("contacts.json");
    let contact = Contact::new(ContactId(1), "Олег Лутин", "+7 999", "друг");

    write_contacts(&path, &[contact.clone()]).expect("write");

    let raw = fs::read_to_string(&path).expect("read back");
    assert!(raw.contains("Олег Лутин"));
    assert_eq!(read_contacts(&path).expect("read"), vec![contact]);
}

#[test]
fn reads_records_without_comment_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("contacts.json");
    fs::write(
        &path,
        r#"[{"id": 1, "name": "Oleg Lutin", "phone": "89991112233", "comment": "Test comment"},
            {"id": 2, "name": "Masha Butova", "phone": "899955544"}]"#,
    )
    .expect("seed");

    let contacts = JsonFileStore::new(&path).load();
    assert_eq!(contacts, vec![oleg(), masha()]);
}

#[test]
fn empty_array_loads_as_empty_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("contacts.json");
    fs::write(&path, "[]").expect("seed");

    assert!(JsonFileStore::new(&path).load().is_empty());
}

#[test]
fn missing_file_loads_as_empty_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");

    assert!(read_contacts(&path).expect("missing is fine").is_empty());
    assert!(JsonFileStore::new(&path).load().is_empty());
}

#[test]
fn invalid_json_loads_as_empty_list_but_strict_read_reports_it() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("contacts.json");
    fs::write(&path, "invalid json data").expect("seed");

    assert!(JsonFileStore::new(&path).load().is_empty());
    assert!(matches!(
        read_contacts(&path),
        Err(StoreError::Parse { .. })
    ));
}

#[test]
fn blank_file_loads_as_empty_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("contacts.json");
    fs::write(&path, "  \n").expect("seed");

    assert!(read_contacts(&path).expect("blank is fine").is_empty());
}

#[test]
fn save_into_directory_path_fails_and_leaves_no_temp_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("contacts.json");
    fs::create_dir_all(&path).expect("occupy path with a directory");

    let result = JsonFileStore::new(&path).save(&[oleg()]);

    assert!(matches!(result, Err(StoreError::Io { .. })));
    assert!(!dir.path().join("contacts.json.tmp").exists());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("deeper").join("contacts.json");

    JsonFileStore::new(&path).save(&[oleg()]).expect("save");
    assert!(path.exists());
}

#[test]
fn save_replaces_previous_contents() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("contacts.json"));

    store.save(&[oleg(), masha()]).expect("first save");
    store.save(&[masha()]).expect("second save");

    assert_eq!(store.load(), vec![masha()]);
}

#[test]
fn memory_store_round_trips_and_counts_saves() {
    let store = MemoryStore::with_contacts(vec![oleg()]);
    assert_eq!(store.load(), vec![oleg()]);

    store.save(&[oleg(), masha()]).expect("save");
    assert_eq!(store.snapshot(), vec![oleg(), masha()]);
    assert_eq!(store.save_count(), 1);
}

#[test]
fn memory_store_can_refuse_saves() {
    let store = MemoryStore::with_contacts(vec![oleg()]);
    store.set_fail_saves(true);

    assert!(matches!(
        store.save(&[masha()]),
        Err(StoreError::Rejected(_))
    ));
    assert_eq!(store.snapshot(), vec![oleg()]);
    assert_eq!(store.save_count(), 0);
}

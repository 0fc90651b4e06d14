use marknote_core::{EntityKind, Folder, Note};
use uuid::Uuid;

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let container = Uuid::parse_str("99999999-8888-4777-8666-555555555555").unwrap();
    let mut note = Note::new("Meeting notes", "- agenda\n- minutes");
    note.id = id;
    note.container = Some(container);
    note.updated_at = 1_700_000_000_000;

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Meeting notes");
    assert_eq!(json["content"], "- agenda\n- minutes");
    assert_eq!(json["container"], container.to_string());
    assert_eq!(json["updated_at"], 1_700_000_000_000_i64);

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn folder_serialization_round_trips() {
    let mut folder = Folder::new("Archive");
    folder.updated_at = 1_700_000_000_000;

    let json = serde_json::to_value(&folder).unwrap();
    assert_eq!(json["title"], "Archive");
    assert!(json.get("content").is_none());

    let decoded: Folder = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, folder);
}

#[test]
fn entity_kind_serializes_snake_case() {
    assert_eq!(
        serde_json::to_value(EntityKind::Note).unwrap(),
        serde_json::json!("note")
    );
    assert_eq!(
        serde_json::to_value(EntityKind::Folder).unwrap(),
        serde_json::json!("folder")
    );
}

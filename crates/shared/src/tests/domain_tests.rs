use super::*;

fn masha() -> Contact {
    Contact::new(ContactId(2), "Masha Butova", "899955544", "")
}

#[test]
fn missing_comment_deserializes_as_empty() {
    let contact: Contact =
        serde_json::from_str(r#"{"id": 2, "name": "Masha Butova", "phone": "899955544"}"#)
            .expect("contact");
    assert_eq!(contact, masha());
}

#[test]
fn empty_comment_is_still_serialized() {
    let value = serde_json::to_value(masha()).expect("json");
    assert_eq!(
        value,
        serde_json::json!({
            "id": 2,
            "name": "Masha Butova",
            "phone": "899955544",
            "comment": ""
        })
    );
}

#[test]
fn patch_from_blank_fields_keeps_everything() {
    let patch = ContactPatch::from_fields(ContactFields::new("", "  ", ""));
    assert!(patch.is_empty());

    let mut contact = masha();
    contact.apply(patch);
    assert_eq!(contact, masha());
}

#[test]
fn patch_replaces_only_present_fields() {
    let mut contact = masha();
    contact.apply(ContactPatch::from_fields(ContactFields::new(
        "", "", "Updated",
    )));

    assert_eq!(contact.id, ContactId(2));
    assert_eq!(contact.name, "Masha Butova");
    assert_eq!(contact.phone, "899955544");
    assert_eq!(contact.comment, "Updated");
}

#[test]
fn draft_keeps_all_fields() {
    let contact = Contact::from_draft(
        ContactId(7),
        ContactFields::new("Oleg Lutin", "89991112233", "Test comment").into(),
    );
    assert_eq!(
        contact,
        Contact::new(ContactId(7), "Oleg Lutin", "89991112233", "Test comment")
    );
}

#[test]
fn draft_trims_fields_like_a_patch() {
    let draft: ContactDraft = ContactFields::new("  Oleg Lutin ", "\t899 ", " friend  ").into();
    assert_eq!(
        Contact::from_draft(ContactId(1), draft),
        Contact::new(ContactId(1), "Oleg Lutin", "899", "friend")
    );

    let patch =
        ContactPatch::from_fields(ContactFields::new("  Oleg Lutin ", "\t899 ", " friend  "));
    let mut edited = Contact::new(ContactId(1), "x", "y", "z");
    edited.apply(patch);
    assert_eq!(edited, Contact::new(ContactId(1), "Oleg Lutin", "899", "friend"));
}

#[test]
fn searchable_values_follow_the_search_field() {
    let contact = Contact::new(ContactId(1), "Oleg Lutin", "89991112233", "Test comment");
    assert_eq!(contact.searchable(SearchField::Name), vec!["Oleg Lutin"]);
    assert_eq!(contact.searchable(SearchField::Phone), vec!["89991112233"]);
    assert_eq!(contact.searchable(SearchField::Comment), vec!["Test comment"]);
    assert_eq!(
        contact.searchable(SearchField::All),
        vec!["Oleg Lutin", "89991112233", "Test comment"]
    );
}

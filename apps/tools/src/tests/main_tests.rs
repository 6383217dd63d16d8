use super::*;

fn contact(id: i64, name: &str, phone: &str) -> Contact {
    Contact::new(ContactId(id), name, phone, "")
}

#[test]
fn clean_book_has_no_problems() {
    let contacts = vec![
        contact(1, "Oleg Lutin", "89991112233"),
        contact(2, "Masha Butova", "899955544"),
    ];
    assert!(check(&contacts).is_empty());
}

#[test]
fn duplicate_ids_are_reported_once() {
    let contacts = vec![contact(1, "A", "1"), contact(1, "B", "2"), contact(1, "C", "3")];
    assert_eq!(check(&contacts), vec![Problem::DuplicateId(ContactId(1))]);
}

#[test]
fn empty_required_fields_are_reported() {
    let contacts = vec![contact(3, " ", "1"), contact(4, "D", "")];
    assert_eq!(
        check(&contacts),
        vec![
            Problem::EmptyName(ContactId(3)),
            Problem::EmptyPhone(ContactId(4))
        ]
    );
}

#[test]
fn largest_possible_id_is_reported() {
    let contacts = vec![contact(1, "A", "1"), contact(i64::MAX, "B", "2")];
    assert_eq!(check(&contacts), vec![Problem::IdsExhausted(ContactId(i64::MAX))]);
}

#[test]
fn problems_read_as_sentences() {
    assert_eq!(
        Problem::DuplicateId(ContactId(7)).to_string(),
        "id 7 is used by more than one contact"
    );
}

#[test]
fn lines_are_tab_separated() {
    let line = format_line(&Contact::new(ContactId(1), "Oleg Lutin", "899", "friend"));
    assert_eq!(line, "1\tOleg Lutin\t899\tfriend");
}

#[test]
fn parses_search_with_field() {
    let cli = Cli::try_parse_from([
        "phonebook-tools",
        "--file",
        "book.json",
        "search",
        "oleg",
        "--field",
        "name",
    ])
    .expect("parse");

    assert_eq!(cli.file, PathBuf::from("book.json"));
    match cli.command {
        Command::Search { term, field } => {
            assert_eq!(term, "oleg");
            assert_eq!(SearchField::from(field), SearchField::Name);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn search_field_defaults_to_all() {
    let cli = Cli::try_parse_from(["phonebook-tools", "search", ""]).expect("parse");
    assert_eq!(cli.file, PathBuf::from("phonebook.json"));
    assert!(matches!(
        cli.command,
        Command::Search {
            field: FieldArg::All,
            ..
        }
    ));
}

use rolodex_store::{ContactBook, Error};
use rolodex_types::{Contact, ContactFields, ContactId, SearchCriteria};
use std::fs;
use tempfile::TempDir;

fn fields(first: &str, company: &str, mobile: &str) -> ContactFields {
    ContactFields {
        first_name: first.to_string(),
        company: company.to_string(),
        mobile: mobile.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_open_missing_store_creates_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("phone_book.json");

    let book = ContactBook::open(&path).unwrap();
    assert!(book.is_empty());
    assert!(path.is_file());

    let raw = fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["source"], path.display().to_string());
    assert!(doc["contacts"].as_object().unwrap().is_empty());
}

#[test]
fn test_open_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("dir").join("phone_book.json");

    let book = ContactBook::open(&path).unwrap();
    assert!(book.is_empty());
    assert!(path.is_file());
}

#[test]
fn test_corrupt_store_fails_with_parse_diagnostic() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("phone_book.json");
    fs::write(&path, "{ this is not json").unwrap();

    let err = ContactBook::open(&path).unwrap_err();
    assert!(matches!(err, Error::Corrupt(_)));
    assert!(err.to_string().contains("invalid JSON"));
}

#[test]
fn test_add_save_reload_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("phone_book.json");

    let mut book = ContactBook::open(&path).unwrap();
    let marina = Contact::new(fields("Marina", "Albatross Ltd", "89112010202"));
    let mary = Contact::new(fields("Mary", "Binary Forge", "89108087123"));
    let marina_id = marina.id().clone();

    book.add_contact(marina);
    book.add_contact(mary);
    book.save().unwrap();

    let reloaded = ContactBook::open(&path).unwrap();
    assert_eq!(reloaded.len(), 2);

    let listed = reloaded.contacts();
    assert_eq!(listed[0].id(), &marina_id);
    assert_eq!(listed[0].fields().first_name, "Marina");
    assert_eq!(listed[1].fields().first_name, "Mary");
}

#[test]
fn test_save_is_stable_across_unchanged_reloads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("phone_book.json");

    let mut book = ContactBook::open(&path).unwrap();
    for i in 0..3 {
        book.add_contact(Contact::new(fields(
            &format!("Contact{}", i),
            "Cobalt Works",
            "89112010202",
        )));
    }
    book.save().unwrap();
    let first_write = fs::read_to_string(&path).unwrap();

    // Reload and save again without touching the map
    let reloaded = ContactBook::open(&path).unwrap();
    reloaded.save().unwrap();
    let second_write = fs::read_to_string(&path).unwrap();

    assert_eq!(first_write, second_write);
}

#[test]
fn test_non_ascii_is_preserved_literally() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("phone_book.json");

    let mut book = ContactBook::open(&path).unwrap();
    book.add_contact(Contact::new(fields("Марина", "ООО Альбатрос", "")));
    book.save().unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("Марина"));
    assert!(!raw.contains("\\u"));

    let reloaded = ContactBook::open(&path).unwrap();
    assert_eq!(reloaded.contacts()[0].fields().first_name, "Марина");
}

#[test]
fn test_search_empty_criteria_returns_everything() {
    let dir = TempDir::new().unwrap();
    let mut book = ContactBook::open(dir.path().join("phone_book.json")).unwrap();
    book.add_contact(Contact::new(fields("Marina", "Albatross Ltd", "")));
    book.add_contact(Contact::new(fields("Mary", "Binary Forge", "")));

    let all = book.search(&SearchCriteria::default());
    assert_eq!(all.len(), 2);
}

#[test]
fn test_search_is_a_case_insensitive_and_filter() {
    let dir = TempDir::new().unwrap();
    let mut book = ContactBook::open(dir.path().join("phone_book.json")).unwrap();
    book.add_contact(Contact::new(ContactFields {
        first_name: "Marina".to_string(),
        last_name: "Ivanova".to_string(),
        company: "Albatross Ltd".to_string(),
        ..Default::default()
    }));
    book.add_contact(Contact::new(ContactFields {
        first_name: "Mary".to_string(),
        last_name: "Smith".to_string(),
        company: "Abacus Inc".to_string(),
        ..Default::default()
    }));

    let by_company = book.search(&SearchCriteria {
        company: Some("ab".to_string()),
        ..Default::default()
    });
    assert_eq!(by_company.len(), 2);

    // Company matches both, last name narrows to one
    let narrowed = book.search(&SearchCriteria {
        company: Some("ab".to_string()),
        last_name: Some("SMITH".to_string()),
        ..Default::default()
    });
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].fields().first_name, "Mary");
}

#[test]
fn test_find_and_edit_by_id() {
    let dir = TempDir::new().unwrap();
    let mut book = ContactBook::open(dir.path().join("phone_book.json")).unwrap();
    let contact = Contact::new(fields("Marina", "Albatross Ltd", "89112010202"));
    let id = contact.id().clone();
    book.add_contact(contact);

    assert_eq!(book.find_by_id(&id).unwrap().first_name, "Marina");

    // Wholesale replacement: fields not mentioned in the new record are gone
    book.edit_by_id(&id, fields("Marina", "", "")).unwrap();
    let edited = book.find_by_id(&id).unwrap();
    assert_eq!(edited.company, "");
    assert_eq!(edited.mobile, "");

    let missing = ContactId::from("no-such-id");
    assert!(matches!(
        book.find_by_id(&missing),
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        book.edit_by_id(&missing, ContactFields::default()),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_delete_by_id_removes_from_listing_and_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("phone_book.json");

    let mut book = ContactBook::open(&path).unwrap();
    let first = Contact::new(fields("Marina", "", ""));
    let second = Contact::new(fields("Mary", "", ""));
    let third = Contact::new(fields("Viktor", "", ""));
    let second_id = second.id().clone();

    book.add_contact(first);
    book.add_contact(second);
    book.add_contact(third);
    book.delete_by_id(&second_id).unwrap();
    book.save().unwrap();

    // Deletion keeps the order of the remaining entries
    let names: Vec<String> = book
        .contacts()
        .iter()
        .map(|c| c.fields().first_name.clone())
        .collect();
    assert_eq!(names, vec!["Marina", "Viktor"]);

    let reloaded = ContactBook::open(&path).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert!(matches!(
        reloaded.find_by_id(&second_id),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_delete_missing_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    let mut book = ContactBook::open(dir.path().join("phone_book.json")).unwrap();

    let err = book.delete_by_id(&ContactId::from("ghost")).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

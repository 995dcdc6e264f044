//! Bulk import/export against SQLite.

mod common;

use common::fixtures::*;
use common::setup_services;
use phone_contacts::error::ContactsError;
use phone_contacts::services::TransferService;

fn names_and_values(contacts: &[phone_contacts::Contact]) -> Vec<(String, Vec<String>, Vec<String>)> {
    contacts
        .iter()
        .map(|c| {
            (
                c.name.clone(),
                c.addresses().into_iter().map(str::to_owned).collect(),
                c.numbers().into_iter().map(str::to_owned).collect(),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_export_then_import_into_empty_store() {
    let source = setup_services();
    for contact in address_book() {
        source.contacts.create(contact).await.unwrap();
    }
    let document = TransferService::new(source.contacts.clone())
        .export()
        .await
        .unwrap();

    let target = setup_services();
    let summary = TransferService::new(target.contacts.clone())
        .import(&document)
        .await
        .unwrap();
    assert_eq!(summary.imported, 3);

    let original = source.contacts.list().await.unwrap();
    let imported = target.contacts.list().await.unwrap();
    assert_eq!(names_and_values(&original), names_and_values(&imported));
}

#[tokio::test]
async fn test_import_discards_document_ids() {
    let services = setup_services();
    let transfer = TransferService::new(services.contacts.clone());

    let document = r#"[{"id": 500, "name": "John Doe",
        "emails": [{"id": 900, "address": "val@gmail.com"}],
        "phoneNumbers": []}]"#;
    let summary = transfer.import(document).await.unwrap();

    let created = &summary.contacts[0];
    assert_ne!(created.id, Some(500));
    assert_ne!(created.emails[0].id, Some(900));
    assert_eq!(created.emails[0].contact_id, created.id);
}

#[tokio::test]
async fn test_importing_same_document_twice_conflicts() {
    let services = setup_services();
    let transfer = TransferService::new(services.contacts.clone());
    let document = phone_contacts::services::encode_contacts(&address_book()).unwrap();

    transfer.import(&document).await.unwrap();
    let second = transfer.import(&document).await;

    match second {
        Err(ContactsError::ImportAborted {
            position,
            created,
            source,
        }) => {
            assert_eq!(position, 0);
            assert_eq!(created, 0);
            assert!(matches!(*source, ContactsError::Conflict(_)));
        }
        other => panic!("Expected ImportAborted, got: {:?}", other),
    }
    assert_eq!(services.contacts.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_failed_import_keeps_earlier_contacts() {
    let services = setup_services();
    let transfer = TransferService::new(services.contacts.clone());

    let document = r#"[
        {"name": "First"},
        {"name": "Second", "phoneNumbers": [{"number": "invalid"}]},
        {"name": "Third"}
    ]"#;
    let result = transfer.import(document).await;
    assert!(matches!(
        result,
        Err(ContactsError::ImportAborted { position: 1, created: 1, .. })
    ));

    let names: Vec<String> = services
        .contacts
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["First"]);
}

#[tokio::test]
async fn test_malformed_document_creates_nothing() {
    let services = setup_services();
    let transfer = TransferService::new(services.contacts.clone());

    let result = transfer.import("[{\"name\": \"Broken\"").await;
    assert!(matches!(result, Err(ContactsError::Json(_))));
    assert!(services.contacts.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_export_of_empty_store_is_empty_array() {
    let services = setup_services();
    let document = TransferService::new(services.contacts.clone())
        .export()
        .await
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&document).unwrap();
    assert_eq!(parsed, serde_json::json!([]));
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for upsert-merge semantics and point retrieval.

use similar_asserts::assert_eq;
use uuid::Uuid;

use wrm_core::{
    decode_content, encode_content, platform, ResourceManager, ResourceType, SyncState,
    WebResource,
};
use wrm_remote::AttrValue;

use super::common::*;

#[test]
fn upsert_without_match_creates_and_returns_the_new_id() {
    let org = MemoryOrg::new();
    let manager = ResourceManager::new(&org);

    let resource = WebResource::new("acme_/new.js", ResourceType::Script);
    let created = manager.upsert(&resource).unwrap();

    assert!(created.is_saved());
    assert_eq!(created.state, SyncState::Modified);
    assert!(org.record_of(created.id).is_some());
    assert_eq!(
        *org.calls.borrow(),
        vec![
            Call::Query(platform::WEB_RESOURCE.to_string()),
            Call::Create
        ]
    );
}

#[test]
fn upsert_with_name_match_adopts_id_and_backfills_unset_fields() {
    let org = MemoryOrg::new();
    let existing_id = seed_with(&org, "acme_/form.js", |r| {
        r.set(platform::ATTR_DISPLAY_NAME, AttrValue::Text("Form script".into()));
        r.set(platform::ATTR_DESCRIPTION, AttrValue::Text("Validations".into()));
        r.set(
            platform::ATTR_DEPENDENCY_XML,
            AttrValue::Text("<dependencies/>".into()),
        );
        r.set(platform::ATTR_LANGUAGE_CODE, AttrValue::Int(1033));
    });
    let manager = ResourceManager::new(&org);

    let mut incoming = WebResource::new("acme_/form.js", ResourceType::Script);
    incoming.content = encode_content("var updated = true;");
    let merged = manager.upsert(&incoming).unwrap();

    assert_eq!(merged.id, existing_id);
    assert_eq!(merged.display_name, "Form script");
    assert_eq!(merged.description, "Validations");
    assert_eq!(merged.dependency_xml, "<dependencies/>");
    assert_eq!(merged.language_code, 1033);
    assert_eq!(merged.state, SyncState::Modified);

    // The stored record kept its server-held values and took the new content.
    let stored = org.record_of(existing_id).unwrap();
    assert_eq!(stored.text_of(platform::ATTR_DISPLAY_NAME), Some("Form script"));
    assert_eq!(
        stored.text_of(platform::ATTR_CONTENT),
        Some(encode_content("var updated = true;").as_str())
    );
}

#[test]
fn upsert_keeps_incoming_values_over_existing_ones() {
    let org = MemoryOrg::new();
    let existing_id = seed_with(&org, "acme_/form.js", |r| {
        r.set(platform::ATTR_DISPLAY_NAME, AttrValue::Text("Old label".into()));
        r.set(platform::ATTR_LANGUAGE_CODE, AttrValue::Int(1033));
    });
    let manager = ResourceManager::new(&org);

    let mut incoming = WebResource::new("acme_/form.js", ResourceType::Script);
    incoming.display_name = "New label".to_string();
    incoming.language_code = 1036;
    let merged = manager.upsert(&incoming).unwrap();

    assert_eq!(merged.id, existing_id);
    assert_eq!(merged.display_name, "New label");
    assert_eq!(merged.language_code, 1036);

    let stored = org.record_of(existing_id).unwrap();
    assert_eq!(stored.text_of(platform::ATTR_DISPLAY_NAME), Some("New label"));
    assert_eq!(stored.int_of(platform::ATTR_LANGUAGE_CODE), Some(1036));
}

#[test]
fn upsert_with_id_set_updates_in_place_without_merge() {
    let org = MemoryOrg::new();
    let id = seed_with(&org, "acme_/form.js", |r| {
        r.set(platform::ATTR_DISPLAY_NAME, AttrValue::Text("Kept label".into()));
    });
    let manager = ResourceManager::new(&org);

    let mut resource = WebResource::new("acme_/form.js", ResourceType::Script);
    resource.id = id;
    resource.content = encode_content("var direct = 1;");
    let updated = manager.upsert(&resource).unwrap();

    assert_eq!(updated.id, id);
    // Direct update: no lookup round trip, only the update call.
    assert_eq!(*org.calls.borrow(), vec![Call::Update]);
    // Empty incoming fields are simply not written, not backfilled.
    assert_eq!(updated.display_name, "");
    let stored = org.record_of(id).unwrap();
    assert_eq!(stored.text_of(platform::ATTR_DISPLAY_NAME), Some("Kept label"));
}

#[test]
fn created_content_round_trips_through_retrieve_by_id() {
    let org = MemoryOrg::new();
    let manager = ResourceManager::new(&org);

    let mut resource = WebResource::new("new_resource", ResourceType::Script);
    resource.content = encode_content("console.log(1)");
    let id = manager.create(&resource).unwrap();
    assert!(!id.is_nil());

    let retrieved = manager.retrieve_by_id(id).unwrap();
    assert_eq!(decode_content(&retrieved.content).unwrap(), "console.log(1)");
    assert_eq!(retrieved.state, SyncState::InSync);
}

#[test]
fn create_of_duplicate_name_surfaces_as_transport_error() {
    let org = MemoryOrg::new();
    seed_resource(&org, "acme_/taken.js");
    let manager = ResourceManager::new(&org);

    let error = manager
        .create(&WebResource::new("acme_/taken.js", ResourceType::Script))
        .unwrap_err();
    let message = error.to_string();
    assert!(message.starts_with("error while creating web resource:"));
    assert!(message.contains("acme_/taken.js"));
}

#[test]
fn retrieve_by_name_returns_none_when_absent() {
    let org = MemoryOrg::new();
    let manager = ResourceManager::new(&org);
    assert!(manager.retrieve_by_name("acme_/ghost.js").unwrap().is_none());
}

#[test]
fn retrieve_by_name_finds_a_unique_match() {
    let org = MemoryOrg::new();
    let id = seed_resource(&org, "acme_/one.js");
    let manager = ResourceManager::new(&org);

    let found = manager.retrieve_by_name("acme_/one.js").unwrap().unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found.name, "acme_/one.js");
}

#[test]
fn retrieve_by_name_with_duplicates_is_an_integrity_error() {
    let org = MemoryOrg::new();
    // Two records with the same name, inserted behind the client's back to
    // violate the uniqueness invariant.
    seed_resource(&org, "acme_/dup.js");
    seed_resource(&org, "acme_/dup.js");
    let manager = ResourceManager::new(&org);

    let error = manager.retrieve_by_name("acme_/dup.js").unwrap_err();
    assert_eq!(
        error.to_string(),
        "there are more than one web resource with name 'acme_/dup.js'"
    );
    // The defensive check performs no write of any kind.
    assert!(!org.calls.borrow().contains(&Call::Create));
    assert!(!org.calls.borrow().contains(&Call::Update));
}

#[test]
fn retrieve_by_id_of_missing_record_is_not_found() {
    let org = MemoryOrg::new();
    let manager = ResourceManager::new(&org);
    let id = Uuid::new_v4();

    let error = manager.retrieve_by_id(id).unwrap_err();
    assert!(error.to_string().contains("not found"));
}

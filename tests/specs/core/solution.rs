// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for solution membership and the pre-delete dependency check.

use similar_asserts::assert_eq;
use uuid::Uuid;

use wrm_core::{platform, ResourceManager, ResourceType, WebResource};
use wrm_remote::{NamedRequest, Record};

use super::common::*;

fn saved(name: &str, org: &MemoryOrg) -> WebResource {
    let id = seed_resource(org, name);
    let mut resource = WebResource::new(name, ResourceType::Script);
    resource.id = id;
    resource
}

fn add_requests(org: &MemoryOrg) -> Vec<NamedRequest> {
    org.executed
        .borrow()
        .iter()
        .filter(|request| matches!(request, NamedRequest::AddSolutionComponent { .. }))
        .cloned()
        .collect()
}

#[test]
fn add_to_solution_issues_one_call_per_resource() {
    let org = MemoryOrg::new();
    let first = saved("acme_/a.js", &org);
    let second = saved("acme_/b.js", &org);
    let manager = ResourceManager::new(&org);

    manager
        .add_to_solution(&[first.clone(), second.clone()], "AcmeCustomizations")
        .unwrap();

    let requests = add_requests(&org);
    assert_eq!(requests.len(), 2);
    for (request, resource) in requests.iter().zip([&first, &second]) {
        match request {
            NamedRequest::AddSolutionComponent {
                component_id,
                component_type,
                solution_unique_name,
                add_required_components,
            } => {
                assert_eq!(*component_id, resource.id);
                assert_eq!(*component_type, platform::COMPONENT_TYPE_WEB_RESOURCE);
                assert_eq!(solution_unique_name, "AcmeCustomizations");
                assert!(!add_required_components);
            }
            other => unreachable!("unexpected request {other:?}"),
        }
    }
    assert_eq!(org.memberships.borrow().len(), 2);
}

#[test]
fn add_to_solution_halts_on_the_first_failure() {
    let org = MemoryOrg::new();
    let first = saved("acme_/a.js", &org);
    let second = saved("acme_/b.js", &org);
    let third = saved("acme_/c.js", &org);
    org.fail_component_ids.borrow_mut().insert(second.id);
    let manager = ResourceManager::new(&org);

    let error = manager
        .add_to_solution(&[first.clone(), second, third], "AcmeCustomizations")
        .unwrap_err();

    assert!(error
        .to_string()
        .starts_with("error while adding web resource to solution:"));
    // The first addition stands, the second failed, the third was never tried.
    assert_eq!(add_requests(&org).len(), 2);
    assert_eq!(
        *org.memberships.borrow(),
        vec![("AcmeCustomizations".to_string(), first.id)]
    );
}

#[test]
fn has_dependencies_reflects_the_dependency_set() {
    let org = MemoryOrg::new();
    let depended = saved("acme_/base.js", &org);
    let free = saved("acme_/leaf.js", &org);

    let mut dependent = Record::with_id("dependency", Uuid::new_v4());
    dependent.set(
        "dependentcomponentobjectid",
        wrm_remote::AttrValue::Id(Uuid::new_v4()),
    );
    org.dependencies
        .borrow_mut()
        .insert(depended.id, vec![dependent]);

    let manager = ResourceManager::new(&org);
    assert!(manager.has_dependencies(depended.id).unwrap());
    assert!(!manager.has_dependencies(free.id).unwrap());
}

#[test]
fn delete_is_not_guarded_by_the_dependency_check() {
    let org = MemoryOrg::new();
    let resource = saved("acme_/base.js", &org);
    org.dependencies.borrow_mut().insert(
        resource.id,
        vec![Record::with_id("dependency", Uuid::new_v4())],
    );

    let manager = ResourceManager::new(&org);
    assert!(manager.has_dependencies(resource.id).unwrap());

    // The delete call is still issued; only the store decides the outcome.
    manager.delete(&resource).unwrap();
    assert!(org.record_of(resource.id).is_none());
}

#[test]
fn delete_of_missing_record_surfaces_as_transport_error() {
    let org = MemoryOrg::new();
    let mut resource = WebResource::new("acme_/ghost.js", ResourceType::Script);
    resource.id = Uuid::new_v4();

    let manager = ResourceManager::new(&org);
    let error = manager.delete(&resource).unwrap_err();
    assert!(error
        .to_string()
        .starts_with("error while deleting web resource:"));
}

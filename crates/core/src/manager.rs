// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Actions on web resources held by the remote organization service.
//!
//! [`ResourceManager`] is the single public-facing orchestrator. Every
//! method is synchronous, issues its remote calls through the client handle
//! it was constructed with, and wraps any transport fault at its own
//! boundary into an operation-tagged [`Error::Transport`]. The manager keeps
//! no state of its own and never retains caller records after a call
//! returns.

use tracing::debug;
use uuid::Uuid;

use wrm_remote::{ColumnSet, NamedRequest, NamedResponse, Record, RemoteClient};

use crate::error::{Error, Result};
use crate::models::{SyncState, WebResource};
use crate::platform;
use crate::query::{self, ResourceFilter, SolutionScope};

const OP_CREATE: &str = "creating web resource";
const OP_DELETE: &str = "deleting web resource";
const OP_RETRIEVE: &str = "retrieving web resource";
const OP_RETRIEVE_MANY: &str = "retrieving web resources";
const OP_UPDATE: &str = "updating web resource";
const OP_PUBLISH: &str = "publishing web resources";
const OP_ADD_TO_SOLUTION: &str = "adding web resource to solution";
const OP_DEPENDENCIES: &str = "checking web resource dependencies";

/// Manages web resource records through a [`RemoteClient`].
///
/// The only shared resource is the client handle, which is not assumed safe
/// for concurrent use; callers serialize calls on one manager instance or
/// use one instance per connection. There is no internal retry, timeout or
/// cancellation logic; any failure surfaces immediately and exactly once.
pub struct ResourceManager<C> {
    client: C,
}

impl<C: RemoteClient> ResourceManager<C> {
    /// Wraps a client handle.
    pub fn new(client: C) -> Self {
        ResourceManager { client }
    }

    /// Creates the resource and returns the identifier the service assigned.
    ///
    /// No local pre-checks: a duplicate name or any server-side validation
    /// failure surfaces as [`Error::Transport`].
    pub fn create(&self, resource: &WebResource) -> Result<Uuid> {
        debug!(name = %resource.name, "create web resource");
        self.client
            .create(&resource.to_record())
            .map_err(|e| Error::transport(OP_CREATE, e))
    }

    /// Deletes the resource.
    ///
    /// There is no dependency guard here; callers that want one call
    /// [`has_dependencies`](Self::has_dependencies) first. The outcome
    /// depends solely on the remote store's response.
    pub fn delete(&self, resource: &WebResource) -> Result<()> {
        debug!(name = %resource.name, id = %resource.id, "delete web resource");
        self.client
            .delete(platform::WEB_RESOURCE, resource.id)
            .map_err(|e| Error::transport(OP_DELETE, e))
    }

    /// True when any record still depends on the resource.
    pub fn has_dependencies(&self, id: Uuid) -> Result<bool> {
        let request = NamedRequest::RetrieveDependenciesForDelete {
            component_type: platform::COMPONENT_TYPE_WEB_RESOURCE,
            object_id: id,
        };
        match self
            .client
            .execute(&request)
            .map_err(|e| Error::transport(OP_DEPENDENCIES, e))?
        {
            NamedResponse::Dependencies { records } => Ok(!records.is_empty()),
            _ => Err(Error::unexpected_response(OP_DEPENDENCIES)),
        }
    }

    /// Retrieves one resource by identifier.
    ///
    /// Fails with [`Error::NotFound`] when the record is absent.
    pub fn retrieve_by_id(&self, id: Uuid) -> Result<WebResource> {
        let record = self
            .client
            .retrieve(platform::WEB_RESOURCE, id, &ColumnSet::All)
            .map_err(|e| Error::transport(OP_RETRIEVE, e))?
            .ok_or(Error::NotFound(id))?;
        WebResource::from_record(&record)
    }

    /// Retrieves one resource by unique name, or `None` when absent.
    ///
    /// More than one match violates the uniqueness invariant and fails with
    /// [`Error::AmbiguousName`].
    pub fn retrieve_by_name(&self, name: &str) -> Result<Option<WebResource>> {
        match self.find_by_name(name, OP_RETRIEVE)? {
            Some(record) => Ok(Some(WebResource::from_record(&record)?)),
            None => Ok(None),
        }
    }

    /// Retrieves resources matching the scope and filter, ascending by name.
    ///
    /// Scoped retrieval first resolves the solution's member resource ids;
    /// when the solution has no web resource members the result is empty and
    /// the detail query is never issued.
    pub fn retrieve_filtered(
        &self,
        scope: &SolutionScope,
        filter: &ResourceFilter,
    ) -> Result<Vec<WebResource>> {
        let member_ids = match scope {
            SolutionScope::All => None,
            SolutionScope::Solution(solution_id) => {
                let members = self
                    .client
                    .retrieve_multiple(&query::member_query(*solution_id))
                    .map_err(|e| Error::transport(OP_RETRIEVE_MANY, e))?;
                let ids: Vec<Uuid> = members
                    .iter()
                    .filter_map(|m| m.id_of(platform::ATTR_OBJECT_ID))
                    .collect();
                if ids.is_empty() {
                    debug!(solution_id = %solution_id, "solution has no web resource members");
                    return Ok(Vec::new());
                }
                Some(ids)
            }
        };

        let detail = query::resource_query(member_ids.as_deref(), filter);
        let records = self
            .client
            .retrieve_multiple(&detail)
            .map_err(|e| Error::transport(OP_RETRIEVE_MANY, e))?;
        debug!(count = records.len(), "retrieved web resources");
        records.iter().map(WebResource::from_record).collect()
    }

    /// Creates or updates the resource, merging against any existing record
    /// with the same name.
    ///
    /// With an identifier set, this is a plain update. Otherwise the
    /// resource is looked up by name: on a match the existing identifier is
    /// adopted and unset fields (empty display name, description,
    /// dependency XML; zero language code) are backfilled from the existing
    /// record before the update, so server-held values are not clobbered;
    /// with no match a create is issued. Returns the persisted value.
    pub fn upsert(&self, resource: &WebResource) -> Result<WebResource> {
        if resource.is_saved() {
            let mut updated = resource.clone();
            updated.state = SyncState::Modified;
            self.client
                .update(&updated.to_record())
                .map_err(|e| Error::transport(OP_UPDATE, e))?;
            return Ok(updated);
        }

        match self.find_by_name(&resource.name, OP_UPDATE)? {
            Some(existing) => {
                let mut merged = resource.clone();
                merged.id = existing.id;
                if merged.display_name.is_empty() {
                    if let Some(value) = existing.text_of(platform::ATTR_DISPLAY_NAME) {
                        merged.display_name = value.to_string();
                    }
                }
                if merged.description.is_empty() {
                    if let Some(value) = existing.text_of(platform::ATTR_DESCRIPTION) {
                        merged.description = value.to_string();
                    }
                }
                if merged.dependency_xml.is_empty() {
                    if let Some(value) = existing.text_of(platform::ATTR_DEPENDENCY_XML) {
                        merged.dependency_xml = value.to_string();
                    }
                }
                if merged.language_code == 0 {
                    if let Some(value) = existing.int_of(platform::ATTR_LANGUAGE_CODE) {
                        merged.language_code = value;
                    }
                }
                merged.state = SyncState::Modified;
                debug!(name = %merged.name, id = %merged.id, "upsert matched existing web resource");
                self.client
                    .update(&merged.to_record())
                    .map_err(|e| Error::transport(OP_UPDATE, e))?;
                Ok(merged)
            }
            None => {
                let id = self
                    .client
                    .create(&resource.to_record())
                    .map_err(|e| Error::transport(OP_UPDATE, e))?;
                let mut created = resource.clone();
                created.id = id;
                created.state = SyncState::Modified;
                Ok(created)
            }
        }
    }

    /// Publishes the given resources in one remote call.
    ///
    /// The payload lists every resource id; exactly one publish request is
    /// issued for the whole batch. On success, returns the resources marked
    /// [`SyncState::InSync`]; on failure nothing is marked clean
    /// (all-or-nothing, tied to the single call).
    pub fn publish_batch(&self, resources: &[WebResource]) -> Result<Vec<WebResource>> {
        let ids: String = resources
            .iter()
            .map(|r| format!("<webresource>{}</webresource>", r.id.braced()))
            .collect();
        let parameter_xml =
            format!("<importexportxml><webresources>{}</webresources></importexportxml>", ids);

        debug!(count = resources.len(), "publish web resources");
        match self
            .client
            .execute(&NamedRequest::PublishXml { parameter_xml })
            .map_err(|e| Error::transport(OP_PUBLISH, e))?
        {
            NamedResponse::Published => Ok(resources
                .iter()
                .map(|r| {
                    let mut clean = r.clone();
                    clean.state = SyncState::InSync;
                    clean
                })
                .collect()),
            _ => Err(Error::unexpected_response(OP_PUBLISH)),
        }
    }

    /// Adds each resource to the named solution, one call per resource.
    ///
    /// Required components are not pulled in. Iteration halts on the first
    /// failure; earlier additions are not rolled back and no partial-failure
    /// summary is produced.
    pub fn add_to_solution(&self, resources: &[WebResource], solution_unique_name: &str) -> Result<()> {
        for resource in resources {
            let request = NamedRequest::AddSolutionComponent {
                component_id: resource.id,
                component_type: platform::COMPONENT_TYPE_WEB_RESOURCE,
                solution_unique_name: solution_unique_name.to_string(),
                add_required_components: false,
            };
            self.client
                .execute(&request)
                .map_err(|e| Error::transport(OP_ADD_TO_SOLUTION, e))?;
        }
        Ok(())
    }

    /// Point lookup by name, enforcing the uniqueness invariant.
    fn find_by_name(&self, name: &str, operation: &'static str) -> Result<Option<Record>> {
        let records = self
            .client
            .retrieve_multiple(&query::by_name_query(name))
            .map_err(|e| Error::transport(operation, e))?;
        if records.len() > 1 {
            return Err(Error::AmbiguousName(name.to_string()));
        }
        Ok(records.into_iter().next())
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;

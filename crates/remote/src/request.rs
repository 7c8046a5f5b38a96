// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named requests the platform exposes outside of plain CRUD.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::Record;

/// A named request executed through [`RemoteClient::execute`].
///
/// [`RemoteClient::execute`]: crate::client::RemoteClient::execute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedRequest {
    /// Adds one component to a solution by unique name.
    AddSolutionComponent {
        /// Identifier of the component record.
        component_id: Uuid,
        /// Numeric component-type tag of the record.
        component_type: i32,
        /// Unique name of the target solution.
        solution_unique_name: String,
        /// Whether the service should pull in required components too.
        add_required_components: bool,
    },
    /// Lists records that depend on a component, as checked before delete.
    RetrieveDependenciesForDelete {
        /// Numeric component-type tag of the record.
        component_type: i32,
        /// Identifier of the component record.
        object_id: Uuid,
    },
    /// Publishes draft customizations described by a parameter XML blob.
    PublishXml {
        /// Parameter XML listing what to publish.
        parameter_xml: String,
    },
}

/// Response to a [`NamedRequest`], variant-matched to the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedResponse {
    /// The solution-component membership record that was created.
    SolutionComponentAdded {
        /// Identifier of the membership record.
        id: Uuid,
    },
    /// Records that depend on the queried component; empty means none.
    Dependencies {
        /// Dependent records.
        records: Vec<Record>,
    },
    /// Publish accepted.
    Published,
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;

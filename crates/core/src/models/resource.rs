// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wrm_remote::{AttrValue, Record};

use crate::error::Result;
use crate::models::ResourceType;
use crate::platform;

/// Synchronization state of a locally held web resource.
///
/// New (id nil) → create → persisted; local edits mark the value
/// [`SyncState::Modified`] until a publish reports it clean again. Delete is
/// terminal and tracked by the caller dropping the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    /// Never persisted; the identifier is still nil.
    #[default]
    New,
    /// Persisted, with local changes not yet published.
    Modified,
    /// Matches what is live on the server.
    InSync,
}

/// A named, typed file-like record in the remote platform.
///
/// The value is plain data passed by the caller; the manager never retains
/// it after a call returns. `name` is unique across the target environment,
/// and a violation surfaces as an integrity error, never silently resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebResource {
    /// Record identifier; nil until the service assigns one on create.
    pub id: Uuid,
    /// Unique name, including any customization prefix (e.g. `acme_/form.js`).
    pub name: String,
    /// Human-readable display name; empty when unset.
    pub display_name: String,
    /// Longer description; empty when unset.
    pub description: String,
    /// Dependency declaration blob; empty when unset.
    pub dependency_xml: String,
    /// Language code; 0 when unset.
    pub language_code: i32,
    /// Base64-encoded content (see [`crate::content`]).
    pub content: String,
    /// File-type code.
    pub resource_type: ResourceType,
    /// True when shipped inside a managed package.
    pub managed: bool,
    /// True when the record may be edited despite being managed.
    pub customizable: bool,
    /// True when the record is hidden from customizers.
    pub hidden: bool,
    /// Server-maintained modification timestamp, if known.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub modified_on: Option<DateTime<Utc>>,
    /// Local synchronization state.
    #[serde(default)]
    pub state: SyncState,
}

impl WebResource {
    /// Creates an unsaved resource with the given name and type.
    pub fn new(name: impl Into<String>, resource_type: ResourceType) -> Self {
        WebResource {
            id: Uuid::nil(),
            name: name.into(),
            display_name: String::new(),
            description: String::new(),
            dependency_xml: String::new(),
            language_code: 0,
            content: String::new(),
            resource_type,
            managed: false,
            customizable: true,
            hidden: false,
            modified_on: None,
            state: SyncState::New,
        }
    }

    /// True once the service has assigned an identifier.
    pub fn is_saved(&self) -> bool {
        !self.id.is_nil()
    }

    /// Builds a resource from a retrieved record.
    ///
    /// Missing or mistyped attributes fall back to defaults; an unknown type
    /// code is an error. Retrieved resources start out [`SyncState::InSync`].
    pub fn from_record(record: &Record) -> Result<Self> {
        let resource_type =
            ResourceType::from_code(record.int_of(platform::ATTR_TYPE).unwrap_or(0))?;
        Ok(WebResource {
            id: record.id,
            name: record.text_of(platform::ATTR_NAME).unwrap_or("").to_string(),
            display_name: record
                .text_of(platform::ATTR_DISPLAY_NAME)
                .unwrap_or("")
                .to_string(),
            description: record
                .text_of(platform::ATTR_DESCRIPTION)
                .unwrap_or("")
                .to_string(),
            dependency_xml: record
                .text_of(platform::ATTR_DEPENDENCY_XML)
                .unwrap_or("")
                .to_string(),
            language_code: record.int_of(platform::ATTR_LANGUAGE_CODE).unwrap_or(0),
            content: record.text_of(platform::ATTR_CONTENT).unwrap_or("").to_string(),
            resource_type,
            managed: record.bool_of(platform::ATTR_MANAGED).unwrap_or(false),
            customizable: record.bool_of(platform::ATTR_CUSTOMIZABLE).unwrap_or(true),
            hidden: record.bool_of(platform::ATTR_HIDDEN).unwrap_or(false),
            modified_on: record.time_of(platform::ATTR_MODIFIED_ON),
            state: SyncState::InSync,
        })
    }

    /// Converts the resource to a record for create/update calls.
    ///
    /// Unset fields (empty strings, zero language code) are omitted rather
    /// than written, so an update never clobbers server-held defaults the
    /// caller did not touch. Server-maintained attributes (`ismanaged`,
    /// `modifiedon`) are never written.
    pub fn to_record(&self) -> Record {
        let mut record = Record::with_id(platform::WEB_RESOURCE, self.id);
        record.set(platform::ATTR_NAME, AttrValue::Text(self.name.clone()));
        record.set(
            platform::ATTR_TYPE,
            AttrValue::Int(self.resource_type.code()),
        );
        record.set(platform::ATTR_HIDDEN, AttrValue::Bool(self.hidden));
        record.set(
            platform::ATTR_CUSTOMIZABLE,
            AttrValue::Bool(self.customizable),
        );
        if !self.display_name.is_empty() {
            record.set(
                platform::ATTR_DISPLAY_NAME,
                AttrValue::Text(self.display_name.clone()),
            );
        }
        if !self.description.is_empty() {
            record.set(
                platform::ATTR_DESCRIPTION,
                AttrValue::Text(self.description.clone()),
            );
        }
        if !self.dependency_xml.is_empty() {
            record.set(
                platform::ATTR_DEPENDENCY_XML,
                AttrValue::Text(self.dependency_xml.clone()),
            );
        }
        if self.language_code != 0 {
            record.set(
                platform::ATTR_LANGUAGE_CODE,
                AttrValue::Int(self.language_code),
            );
        }
        if !self.content.is_empty() {
            record.set(platform::ATTR_CONTENT, AttrValue::Text(self.content.clone()));
        }
        record
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Attribute-bag records exchanged with the organization service.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single attribute value on a [`Record`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrValue {
    /// Boolean flag.
    Bool(bool),
    /// 32-bit integer (type codes, language codes).
    Int(i32),
    /// Free text.
    Text(String),
    /// Reference to another record.
    Id(Uuid),
    /// Server-maintained timestamp.
    Time(DateTime<Utc>),
}

/// A loosely typed record held by the remote organization service.
///
/// Records are addressed by entity logical name plus identifier. The nil
/// identifier marks a record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Entity logical name (e.g. `webresource`).
    pub entity: String,
    /// Record identifier; nil until the service assigns one on create.
    pub id: Uuid,
    /// Attribute values keyed by logical attribute name.
    pub attributes: BTreeMap<String, AttrValue>,
}

impl Record {
    /// Creates an empty, unsaved record of the given entity.
    pub fn new(entity: impl Into<String>) -> Self {
        Record {
            entity: entity.into(),
            id: Uuid::nil(),
            attributes: BTreeMap::new(),
        }
    }

    /// Creates a record with a known identifier.
    pub fn with_id(entity: impl Into<String>, id: Uuid) -> Self {
        Record {
            entity: entity.into(),
            id,
            attributes: BTreeMap::new(),
        }
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set(&mut self, attribute: impl Into<String>, value: AttrValue) {
        self.attributes.insert(attribute.into(), value);
    }

    /// Returns the raw attribute value, if present.
    pub fn get(&self, attribute: &str) -> Option<&AttrValue> {
        self.attributes.get(attribute)
    }

    /// Returns true if the attribute is present, regardless of type.
    pub fn contains(&self, attribute: &str) -> bool {
        self.attributes.contains_key(attribute)
    }

    /// Reads a boolean attribute. Absent or mistyped values read as `None`.
    pub fn bool_of(&self, attribute: &str) -> Option<bool> {
        match self.attributes.get(attribute) {
            Some(AttrValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Reads an integer attribute. Absent or mistyped values read as `None`.
    pub fn int_of(&self, attribute: &str) -> Option<i32> {
        match self.attributes.get(attribute) {
            Some(AttrValue::Int(i)) => Some(*i),
            _ => None,
        }
    }

    /// Reads a text attribute. Absent or mistyped values read as `None`.
    pub fn text_of(&self, attribute: &str) -> Option<&str> {
        match self.attributes.get(attribute) {
            Some(AttrValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Reads an identifier attribute. Absent or mistyped values read as `None`.
    pub fn id_of(&self, attribute: &str) -> Option<Uuid> {
        match self.attributes.get(attribute) {
            Some(AttrValue::Id(id)) => Some(*id),
            _ => None,
        }
    }

    /// Reads a timestamp attribute. Absent or mistyped values read as `None`.
    pub fn time_of(&self, attribute: &str) -> Option<DateTime<Utc>> {
        match self.attributes.get(attribute) {
            Some(AttrValue::Time(t)) => Some(*t),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;

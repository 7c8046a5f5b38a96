// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Logical names and constants fixed by the remote platform.

/// Entity logical name of web resource records.
pub const WEB_RESOURCE: &str = "webresource";

/// Entity logical name of solution membership records.
pub const SOLUTION_COMPONENT: &str = "solutioncomponent";

/// Component-type tag marking a membership or dependency record as
/// referring to a web resource.
pub const COMPONENT_TYPE_WEB_RESOURCE: i32 = 61;

/// Name prefixes of vendor-shipped resources, excluded when a retrieval
/// asks to hide them.
pub const VENDOR_PREFIXES: [&str; 2] = ["cc_MscrmControls", "msdyn_"];

pub const ATTR_WEB_RESOURCE_ID: &str = "webresourceid";
pub const ATTR_NAME: &str = "name";
pub const ATTR_DISPLAY_NAME: &str = "displayname";
pub const ATTR_DESCRIPTION: &str = "description";
pub const ATTR_DEPENDENCY_XML: &str = "dependencyxml";
pub const ATTR_LANGUAGE_CODE: &str = "languagecode";
pub const ATTR_CONTENT: &str = "content";
pub const ATTR_TYPE: &str = "webresourcetype";
pub const ATTR_HIDDEN: &str = "ishidden";
pub const ATTR_MANAGED: &str = "ismanaged";
pub const ATTR_CUSTOMIZABLE: &str = "iscustomizable";
pub const ATTR_MODIFIED_ON: &str = "modifiedon";
pub const ATTR_SOLUTION_ID: &str = "solutionid";
pub const ATTR_COMPONENT_TYPE: &str = "componenttype";
pub const ATTR_OBJECT_ID: &str = "objectid";

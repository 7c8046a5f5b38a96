// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ResourceType;
use crate::options::SyncOptions;

/// Optional grouping filter restricting retrieval to one solution's members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SolutionScope {
    /// Every customizable resource in the environment.
    #[default]
    All,
    /// Only resources linked to the given solution via membership records.
    Solution(Uuid),
}

/// Filter configuration for filtered retrieval.
///
/// An empty type list means "unrestricted". Language filtering applies only
/// when [`filter_by_lcid`](Self::filter_by_lcid) is set with a non-empty
/// lcid list; resources with no language set still match unless
/// [`include_unset_language`](Self::include_unset_language) is cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceFilter {
    /// Restrict to these file-type codes; empty = all types.
    pub types: Vec<ResourceType>,
    /// Whether language filtering was requested at all.
    pub filter_by_lcid: bool,
    /// Language codes to match when filtering by language.
    pub lcids: Vec<i32>,
    /// Whether a resource with no language set counts as a match.
    pub include_unset_language: bool,
    /// Whether vendor-shipped resources are excluded.
    pub hide_vendor: bool,
    /// Name prefixes to exclude, in order.
    pub excluded_prefixes: Vec<String>,
}

impl Default for ResourceFilter {
    fn default() -> Self {
        ResourceFilter {
            types: Vec::new(),
            filter_by_lcid: false,
            lcids: Vec::new(),
            include_unset_language: true,
            hide_vendor: true,
            excluded_prefixes: Vec::new(),
        }
    }
}

impl ResourceFilter {
    /// Creates a filter carrying the configured exclusions.
    pub fn with_options(options: &SyncOptions) -> Self {
        ResourceFilter {
            hide_vendor: options.hide_vendor,
            excluded_prefixes: options.excluded_prefixes.clone(),
            ..ResourceFilter::default()
        }
    }

    /// Restricts the filter to the given types.
    pub fn types(mut self, types: impl IntoIterator<Item = ResourceType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    /// Requests language filtering against the given codes.
    pub fn languages(mut self, lcids: impl IntoIterator<Item = i32>) -> Self {
        self.filter_by_lcid = true;
        self.lcids = lcids.into_iter().collect();
        self
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

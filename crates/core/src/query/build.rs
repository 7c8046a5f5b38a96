// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use uuid::Uuid;

use wrm_remote::{CompareValue, Condition, Filter, OrderBy, Query};

use crate::platform;
use crate::query::ResourceFilter;

/// Builds the web resource detail query.
///
/// The criteria tree is
/// `AllOf[ AllOf[base…], AnyOf[ismanaged = false, iscustomizable = true] ]`.
/// The base branch always starts with `ishidden = false`; prefix exclusions,
/// the member-id restriction, the type restriction and the language
/// sub-filter are appended in that order when requested. Results are always
/// ordered ascending by name.
pub fn resource_query(member_ids: Option<&[Uuid]>, filter: &ResourceFilter) -> Query {
    let mut base = vec![Filter::leaf(Condition::equal(
        platform::ATTR_HIDDEN,
        CompareValue::Bool(false),
    ))];

    if filter.hide_vendor {
        for prefix in platform::VENDOR_PREFIXES {
            base.push(Filter::leaf(Condition::not_begins_with(
                platform::ATTR_NAME,
                prefix,
            )));
        }
    }
    for prefix in &filter.excluded_prefixes {
        base.push(Filter::leaf(Condition::not_begins_with(
            platform::ATTR_NAME,
            prefix.clone(),
        )));
    }

    if let Some(ids) = member_ids {
        base.push(Filter::leaf(Condition::is_in(
            platform::ATTR_WEB_RESOURCE_ID,
            CompareValue::IdList(ids.to_vec()),
        )));
    }

    if !filter.types.is_empty() {
        base.push(Filter::leaf(Condition::is_in(
            platform::ATTR_TYPE,
            CompareValue::IntList(filter.types.iter().map(|t| t.code()).collect()),
        )));
    }

    if filter.filter_by_lcid && !filter.lcids.is_empty() {
        let mut language = vec![Filter::leaf(Condition::is_in(
            platform::ATTR_LANGUAGE_CODE,
            CompareValue::IntList(filter.lcids.clone()),
        ))];
        if filter.include_unset_language {
            language.push(Filter::leaf(Condition::null(platform::ATTR_LANGUAGE_CODE)));
        }
        base.push(Filter::AnyOf(language));
    }

    let criteria = Filter::AllOf(vec![
        Filter::AllOf(base),
        Filter::any_of([
            Condition::equal(platform::ATTR_MANAGED, CompareValue::Bool(false)),
            Condition::equal(platform::ATTR_CUSTOMIZABLE, CompareValue::Bool(true)),
        ]),
    ]);

    Query::new(platform::WEB_RESOURCE, criteria).order_by(OrderBy::ascending(platform::ATTR_NAME))
}

/// Builds the membership query resolving which web resources belong to a
/// solution (component-type 61 records only).
pub fn member_query(solution_id: Uuid) -> Query {
    Query::new(
        platform::SOLUTION_COMPONENT,
        Filter::all_of([
            Condition::equal(platform::ATTR_SOLUTION_ID, CompareValue::Id(solution_id)),
            Condition::equal(
                platform::ATTR_COMPONENT_TYPE,
                CompareValue::Int(platform::COMPONENT_TYPE_WEB_RESOURCE),
            ),
        ]),
    )
}

/// Builds the point lookup of a web resource by unique name.
pub fn by_name_query(name: &str) -> Query {
    Query::new(
        platform::WEB_RESOURCE,
        Filter::all_of([Condition::equal(
            platform::ATTR_NAME,
            CompareValue::Text(name.to_string()),
        )]),
    )
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;

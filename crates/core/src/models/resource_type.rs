// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// File-type code of a web resource.
///
/// The platform numbers the twelve types 1 through 12; [`ResourceType::code`]
/// and [`ResourceType::from_code`] convert to and from the stored integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Webpage (.html).
    Html,
    /// Style sheet (.css).
    Css,
    /// Script (.js).
    Script,
    /// Data file (.xml).
    Data,
    /// PNG image.
    Png,
    /// JPG image.
    Jpg,
    /// GIF image.
    Gif,
    /// Silverlight application (.xap).
    Xap,
    /// Style sheet transform (.xsl).
    Xsl,
    /// Icon (.ico).
    Ico,
    /// Vector image (.svg).
    Svg,
    /// String resource file (.resx).
    Resx,
}

impl ResourceType {
    /// Returns the numeric code the platform stores.
    pub fn code(&self) -> i32 {
        match self {
            ResourceType::Html => 1,
            ResourceType::Css => 2,
            ResourceType::Script => 3,
            ResourceType::Data => 4,
            ResourceType::Png => 5,
            ResourceType::Jpg => 6,
            ResourceType::Gif => 7,
            ResourceType::Xap => 8,
            ResourceType::Xsl => 9,
            ResourceType::Ico => 10,
            ResourceType::Svg => 11,
            ResourceType::Resx => 12,
        }
    }

    /// Resolves a stored numeric code.
    ///
    /// Fails with [`Error::UnknownTypeCode`] for anything outside 1..=12;
    /// an unknown code in a retrieved record is never silently defaulted.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            1 => Ok(ResourceType::Html),
            2 => Ok(ResourceType::Css),
            3 => Ok(ResourceType::Script),
            4 => Ok(ResourceType::Data),
            5 => Ok(ResourceType::Png),
            6 => Ok(ResourceType::Jpg),
            7 => Ok(ResourceType::Gif),
            8 => Ok(ResourceType::Xap),
            9 => Ok(ResourceType::Xsl),
            10 => Ok(ResourceType::Ico),
            11 => Ok(ResourceType::Svg),
            12 => Ok(ResourceType::Resx),
            other => Err(Error::UnknownTypeCode(other)),
        }
    }

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Html => "html",
            ResourceType::Css => "css",
            ResourceType::Script => "script",
            ResourceType::Data => "data",
            ResourceType::Png => "png",
            ResourceType::Jpg => "jpg",
            ResourceType::Gif => "gif",
            ResourceType::Xap => "xap",
            ResourceType::Xsl => "xsl",
            ResourceType::Ico => "ico",
            ResourceType::Svg => "svg",
            ResourceType::Resx => "resx",
        }
    }

    /// Returns the file extension conventionally paired with the type.
    pub fn extension(&self) -> &'static str {
        match self {
            ResourceType::Html => ".html",
            ResourceType::Css => ".css",
            ResourceType::Script => ".js",
            ResourceType::Data => ".xml",
            ResourceType::Png => ".png",
            ResourceType::Jpg => ".jpg",
            ResourceType::Gif => ".gif",
            ResourceType::Xap => ".xap",
            ResourceType::Xsl => ".xsl",
            ResourceType::Ico => ".ico",
            ResourceType::Svg => ".svg",
            ResourceType::Resx => ".resx",
        }
    }

    /// Resolves a file extension (with or without the leading dot).
    pub fn from_extension(extension: &str) -> Option<Self> {
        let ext = extension.trim_start_matches('.').to_lowercase();
        match ext.as_str() {
            "html" | "htm" => Some(ResourceType::Html),
            "css" => Some(ResourceType::Css),
            "js" => Some(ResourceType::Script),
            "xml" => Some(ResourceType::Data),
            "png" => Some(ResourceType::Png),
            "jpg" | "jpeg" => Some(ResourceType::Jpg),
            "gif" => Some(ResourceType::Gif),
            "xap" => Some(ResourceType::Xap),
            "xsl" | "xslt" => Some(ResourceType::Xsl),
            "ico" => Some(ResourceType::Ico),
            "svg" => Some(ResourceType::Svg),
            "resx" => Some(ResourceType::Resx),
            _ => None,
        }
    }

    /// True for types whose content is text rather than binary data.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            ResourceType::Html
                | ResourceType::Css
                | ResourceType::Script
                | ResourceType::Data
                | ResourceType::Xsl
                | ResourceType::Svg
                | ResourceType::Resx
        )
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "html" => Ok(ResourceType::Html),
            "css" => Ok(ResourceType::Css),
            "script" => Ok(ResourceType::Script),
            "data" => Ok(ResourceType::Data),
            "png" => Ok(ResourceType::Png),
            "jpg" => Ok(ResourceType::Jpg),
            "gif" => Ok(ResourceType::Gif),
            "xap" => Ok(ResourceType::Xap),
            "xsl" => Ok(ResourceType::Xsl),
            "ico" => Ok(ResourceType::Ico),
            "svg" => Ok(ResourceType::Svg),
            "resx" => Ok(ResourceType::Resx),
            _ => Err(Error::InvalidType(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "resource_type_tests.rs"]
mod tests;

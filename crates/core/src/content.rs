// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Content transcoding between editor text and the stored wire form.
//!
//! The platform stores web resource content as base64 over UTF-8 bytes.
//! Round-tripping any valid UTF-8 string through encode/decode is identity.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{Error, Result};

/// Encodes editor text into the stored base64 form.
pub fn encode_content(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decodes stored base64 content back into text.
///
/// Fails with [`Error::InvalidContent`] when the input is not base64 or the
/// decoded bytes are not UTF-8 (binary resource types).
pub fn decode_content(content: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(content)
        .map_err(|e| Error::InvalidContent(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidContent(e.to_string()))
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;

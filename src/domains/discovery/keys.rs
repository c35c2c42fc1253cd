//! Artifact key normalization and schema resource addressing.
//!
//! Schema artifacts are referenced by callers in several equivalent forms:
//! a bare filename (`ticker-returns-v2.json`), a name without extension
//! (`ticker-returns-v2`), an index path (`/schemas/ticker-returns-v2.json`),
//! or a percent-encoded URI suffix. All of them normalize to the same
//! canonical key used for the store lookup.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Path prefix used by SchemaIndex entries.
pub const SCHEMA_PATH_PREFIX: &str = "/schemas/";

/// URI prefix for concrete schema resources.
pub const SCHEMA_URI_PREFIX: &str = "riskmodels:///schemas/";

/// Directory inside the data dir holding schema artifacts.
pub const SCHEMA_DIR: &str = "schemas";

/// Characters kept verbatim when encoding a schema key into a URI segment.
/// Matches the set JavaScript's `encodeURIComponent` leaves unescaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Normalize a raw schema identifier into a canonical artifact key.
///
/// Never fails: the result is a best-effort key and non-existence is
/// detected by the store. Idempotent: normalizing a normalized key is a
/// no-op.
pub fn normalize_schema_key(raw: &str) -> String {
    let decoded = percent_decode_str(raw).decode_utf8_lossy();
    let stripped = decoded
        .strip_prefix(SCHEMA_PATH_PREFIX)
        .unwrap_or(decoded.as_ref());
    // A multi-segment identifier reduces to its final segment, matching the
    // index entry format `/schemas/<filename>`.
    let name = stripped.rsplit('/').next().unwrap_or(stripped);
    if name.ends_with(".json") {
        name.to_string()
    } else {
        format!("{name}.json")
    }
}

/// Build the concrete resource URI for a SchemaIndex entry.
///
/// The index stores paths like `/schemas/ticker-returns-v2.json`; the URI
/// carries the percent-encoded filename under the schemas namespace.
pub fn schema_resource_uri(index_path: &str) -> String {
    let stripped = index_path
        .strip_prefix(SCHEMA_PATH_PREFIX)
        .unwrap_or(index_path);
    format!(
        "{SCHEMA_URI_PREFIX}{}",
        utf8_percent_encode(stripped, URI_COMPONENT)
    )
}

/// Display name for a SchemaIndex entry (its final path segment).
pub fn schema_display_name(index_path: &str) -> &str {
    index_path.rsplit('/').next().unwrap_or(index_path)
}

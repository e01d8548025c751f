//! Change fingerprint
//!
//! A record is rendered as canonical JSON (keys sorted, `", "` and `": "`
//! separators, everything outside printable ASCII escaped as `\uXXXX`) and
//! hashed with MD5. The layout is fixed so digests stay comparable with ones
//! stored by earlier runs. This is drift detection, not integrity protection.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::{Map, Value};

use crate::error::ScrapeError;

/// Key excluded from the digest input
pub const HASH_FIELD: &str = "content_hash";

/// Lowercase hex MD5 of the canonical form of `record`.
///
/// A top-level `content_hash` key is dropped first so a record can be
/// re-fingerprinted after its hash has been filled in.
pub fn fingerprint<T: Serialize>(record: &T) -> Result<String, ScrapeError> {
    let mut value = serde_json::to_value(record)?;
    if let Value::Object(map) = &mut value {
        map.remove(HASH_FIELD);
    }

    let canonical = canonical_json(&value)?;
    Ok(format!("{:x}", md5::compute(canonical)))
}

/// Canonical JSON bytes for a value
pub fn canonical_json(value: &Value) -> Result<Vec<u8>, ScrapeError> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, CanonicalFormatter);
    sort_keys(value).serialize(&mut serializer)?;
    Ok(out)
}

// Rebuilt rather than relying on Map iteration order, which follows
// insertion order when serde_json's preserve_order feature is on.
fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), sort_keys(&map[key]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        // serde_json already escaped quotes, backslashes and control
        // characters; DEL and non-ASCII are left to us.
        for ch in fragment.chars() {
            if ch.is_ascii() && ch != '\u{7f}' {
                writer.write_all(&[ch as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

//! Tolerant parser for the external radar data source:
//! `{ date, entries: [{ name, quadrant, ring, active, moved, link }] }`.
//!
//! The source is typically exported from some CMS or spreadsheet, so a single
//! bad record must never block the whole radar. Malformed entries are skipped
//! (or their fields defaulted) with a diagnostic; only an unreadable document
//! is an error.

use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::ir::{Entry, Moved, Radar};
use crate::layout::Diagnostic;

#[derive(Debug, Error)]
pub enum RadarError {
    #[error("invalid radar source: {0}")]
    Syntax(#[from] json5::Error),
    #[error("radar source must be an object with an `entries` array")]
    MalformedSource,
}

#[derive(Debug)]
pub struct ParseOutput {
    pub radar: Radar,
    pub diagnostics: Vec<Diagnostic>,
}

/// Accepted spellings for the `moved` field besides the numeric codes.
static MOVED_ALIASES: Lazy<HashMap<&'static str, Moved>> = Lazy::new(|| {
    HashMap::from([
        ("down", Moved::Down),
        ("out", Moved::Down),
        ("unchanged", Moved::Unchanged),
        ("none", Moved::Unchanged),
        ("up", Moved::Up),
        ("in", Moved::Up),
        ("new", Moved::New),
    ])
});

/// Parse a radar source document (JSON, or JSON5 for hand-maintained files).
pub fn parse_radar(input: &str) -> Result<ParseOutput, RadarError> {
    let value: Value = json5::from_str(input)?;
    let Some(object) = value.as_object() else {
        return Err(RadarError::MalformedSource);
    };
    let Some(raw_entries) = object.get("entries").and_then(Value::as_array) else {
        return Err(RadarError::MalformedSource);
    };

    let mut diagnostics = Vec::new();
    let mut entries = Vec::with_capacity(raw_entries.len());
    for (index, raw) in raw_entries.iter().enumerate() {
        match parse_entry(index, raw, &mut diagnostics) {
            Some(entry) => entries.push(entry),
            None => continue,
        }
    }

    Ok(ParseOutput {
        radar: Radar {
            date: object
                .get("date")
                .and_then(Value::as_str)
                .map(str::to_string),
            entries,
        },
        diagnostics,
    })
}

fn parse_entry(index: usize, raw: &Value, diagnostics: &mut Vec<Diagnostic>) -> Option<Entry> {
    let Some(object) = raw.as_object() else {
        skip(index, "not an object", diagnostics);
        return None;
    };

    let name = match object.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => {
            skip(index, "missing name", diagnostics);
            return None;
        }
    };
    let Some(quadrant) = object.get("quadrant").and_then(Value::as_i64) else {
        skip(index, "missing quadrant", diagnostics);
        return None;
    };
    let Some(ring) = object.get("ring").and_then(Value::as_i64) else {
        skip(index, "missing ring", diagnostics);
        return None;
    };

    let quadrant = clamp_axis(quadrant, &name, true, diagnostics);
    let ring = clamp_axis(ring, &name, false, diagnostics);

    let moved = match object.get("moved") {
        None | Some(Value::Null) => Moved::Unchanged,
        Some(value) => parse_moved(value, &name, diagnostics),
    };

    Some(Entry {
        name,
        quadrant,
        ring,
        active: object
            .get("active")
            .and_then(Value::as_bool)
            .unwrap_or(true),
        moved,
        link: object
            .get("link")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

/// Clamp a quadrant/ring index into [0, 3], recording the repair. The engine
/// clamps again defensively, but repairing here keeps the diagnostic tied to
/// the source record.
fn clamp_axis(given: i64, entry: &str, is_quadrant: bool, diagnostics: &mut Vec<Diagnostic>) -> usize {
    let clamped = given.clamp(0, 3) as usize;
    if given != clamped as i64 {
        let axis = if is_quadrant { "quadrant" } else { "ring" };
        tracing::warn!(entry, axis, given, clamped, "index out of range in radar source");
        diagnostics.push(if is_quadrant {
            Diagnostic::QuadrantClamped {
                entry: entry.to_string(),
                given,
                clamped,
            }
        } else {
            Diagnostic::RingClamped {
                entry: entry.to_string(),
                given,
                clamped,
            }
        });
    }
    clamped
}

fn parse_moved(value: &Value, entry: &str, diagnostics: &mut Vec<Diagnostic>) -> Moved {
    let parsed = match value {
        Value::Number(_) => value.as_i64().and_then(Moved::from_code),
        Value::String(alias) => MOVED_ALIASES.get(alias.to_lowercase().as_str()).copied(),
        _ => None,
    };
    parsed.unwrap_or_else(|| {
        tracing::warn!(entry, given = %value, "unknown moved indicator");
        diagnostics.push(Diagnostic::MovedDefaulted {
            entry: entry.to_string(),
            given: value.to_string(),
        });
        Moved::Unchanged
    })
}

fn skip(index: usize, reason: &str, diagnostics: &mut Vec<Diagnostic>) {
    tracing::warn!(index, reason, "skipping radar entry");
    diagnostics.push(Diagnostic::EntrySkipped {
        index,
        reason: reason.to_string(),
    });
}

//! Typed parsing boundary for document store payloads.
//!
//! Raw API payloads are converted into [`Note`] and [`ContentBlock`] values
//! here, at the collaborator boundary. Structurally required fields (id,
//! timestamps) fail with [`Error::Parse`]; optional presentation fields
//! (title, tags) go through accessors with a single stated default: missing
//! title parses as empty, missing tags as the empty set.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use zettel_core::{BlockKind, ContentBlock, Error, Note, NoteStatus, Result};

/// Property name of the note title.
pub const PROP_TITLE: &str = "Name";

/// Property name of the tag multi-select.
pub const PROP_TAGS: &str = "Tags";

/// Property name of the status select.
pub const PROP_STATUS: &str = "Status";

/// Property name of the AI-processed checkbox.
pub const PROP_AI_PROCESSED: &str = "AI Processed";

/// Envelope of a paginated listing response.
#[derive(Debug, Deserialize)]
pub struct PageEnvelope {
    pub results: Vec<Value>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Convert a raw page payload into a [`Note`].
pub fn parse_note(payload: &Value) -> Result<Note> {
    let id = required_str(payload, "id")?;
    let created_at = required_timestamp(payload, "created_time")?;
    let revision = required_str(payload, "last_edited_time")?;

    let properties = payload.get("properties").unwrap_or(&Value::Null);

    Ok(Note {
        id,
        title: title_of(properties),
        tags: tags_of(properties),
        status: status_of(properties),
        ai_processed: ai_processed_of(properties),
        created_at,
        revision,
    })
}

/// Convert a raw block payload into a [`ContentBlock`].
///
/// Unrecognized block types map to [`BlockKind::Other`] rather than failing,
/// so new store block kinds never break extraction.
pub fn parse_block(payload: &Value) -> Result<ContentBlock> {
    let block_type = required_str(payload, "type")?;
    let body = payload.get(block_type.as_str()).unwrap_or(&Value::Null);
    let text = rich_text_of(body);

    let kind = match block_type.as_str() {
        "paragraph" => BlockKind::Paragraph,
        "heading_1" => BlockKind::Heading(1),
        "heading_2" => BlockKind::Heading(2),
        "heading_3" => BlockKind::Heading(3),
        "bulleted_list_item" => BlockKind::BulletedListItem,
        "numbered_list_item" => BlockKind::NumberedListItem,
        "to_do" => BlockKind::ToDo {
            checked: body.get("checked").and_then(Value::as_bool).unwrap_or(false),
        },
        other => BlockKind::Other(other.to_string()),
    };

    Ok(ContentBlock { kind, text })
}

fn required_str(payload: &Value, field: &str) -> Result<String> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::Parse(format!("payload missing string field '{}'", field)))
}

fn required_timestamp(payload: &Value, field: &str) -> Result<DateTime<Utc>> {
    let raw = required_str(payload, field)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::Parse(format!("invalid timestamp in '{}': {}", field, e)))
}

/// Title accessor: joined plain text of the title property, empty if absent.
fn title_of(properties: &Value) -> String {
    properties
        .get(PROP_TITLE)
        .and_then(|p| p.get("title"))
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("plain_text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .concat()
        })
        .unwrap_or_default()
}

/// Tags accessor: multi-select option names, empty if absent.
fn tags_of(properties: &Value) -> Vec<String> {
    properties
        .get(PROP_TAGS)
        .and_then(|p| p.get("multi_select"))
        .and_then(Value::as_array)
        .map(|options| {
            options
                .iter()
                .filter_map(|o| o.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Status accessor: anything other than a literal "processed" select value
/// (including a missing property) reads as unprocessed.
fn status_of(properties: &Value) -> NoteStatus {
    let name = properties
        .get(PROP_STATUS)
        .and_then(|p| p.get("select"))
        .and_then(|s| s.get("name"))
        .and_then(Value::as_str);
    match name {
        Some("processed") => NoteStatus::Processed,
        _ => NoteStatus::Unprocessed,
    }
}

fn ai_processed_of(properties: &Value) -> bool {
    properties
        .get(PROP_AI_PROCESSED)
        .and_then(|p| p.get("checkbox"))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn rich_text_of(body: &Value) -> String {
    body.get("rich_text")
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("plain_text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .concat()
        })
        .unwrap_or_default()
}

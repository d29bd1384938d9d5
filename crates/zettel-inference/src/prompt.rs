//! Prompt construction for note analysis.

use zettel_core::defaults;

/// System prompt establishing the analysis persona.
pub const SYSTEM_PROMPT: &str = "You are an expert in Zettelkasten-style knowledge management. \
You excel at capturing the essence of a note and assigning it a precise title and tags.";

/// Build the analysis prompt for a note body and its existing tags.
///
/// The backend is contracted to answer with a single JSON object carrying
/// exactly four fields: title, tags, summary, keywords.
pub fn analysis_prompt(text: &str, existing_tags: &[String]) -> String {
    let existing = if existing_tags.is_empty() {
        "none".to_string()
    } else {
        existing_tags.join(", ")
    };

    format!(
        "Analyze the following Zettelkasten note.\n\
         \n\
         [Note content]\n\
         {text}\n\
         \n\
         [Existing tags]\n\
         {existing}\n\
         \n\
         Respond with a JSON object in this exact shape:\n\
         {{\n\
         \x20 \"title\": \"a concise claim-style title, at most {title_max} characters\",\n\
         \x20 \"tags\": [\"tag1\", \"tag2\", \"tag3\"],\n\
         \x20 \"summary\": \"a summary of roughly {summary_len} characters\",\n\
         \x20 \"keywords\": [\"keyword1\", \"keyword2\", \"keyword3\"]\n\
         }}\n\
         \n\
         Rules:\n\
         - The title must state the note's core claim (\"X is Y\", \"why X happens\"), not a topic label.\n\
         - Choose {tag_min}-{tag_max} tags, reusing existing tags where they fit the content.\n\
         - Extract {kw_min}-{kw_max} keywords as short concrete nouns (proper names, technical terms, \
         concepts), not prose fragments; they are used to link this note to related notes.",
        text = text,
        existing = existing,
        title_max = defaults::TITLE_MAX_CHARS,
        summary_len = defaults::SUMMARY_FALLBACK_CHARS,
        tag_min = defaults::TAG_MIN_COUNT,
        tag_max = defaults::TAG_MAX_COUNT,
        kw_min = defaults::KEYWORD_MIN_COUNT,
        kw_max = defaults::KEYWORD_MAX_COUNT,
    )
}

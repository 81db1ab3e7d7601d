//! Splits a mentor answer into display cards.
//!
//! Answers are free text, usually markdown with `### ` section headers. Each
//! header starts a titled card; answers without headers become one untitled
//! card per non-blank line. Card bodies stay markdown: bullet glyphs are
//! promoted to `- ` list items and loose emphasis is coerced to `**bold**`.
//! Turning that markdown into HTML is left to the caller.

use once_cell::sync::Lazy;
use regex::Regex;

/// Text the client shows while an answer is still pending.
pub const LOADING_SENTINEL: &str = "Loading...";

/// Shown in place of an absent or empty answer.
pub const PLACEHOLDER_TEXT: &str = "No response available yet. Try asking a question!";

const HEADER_MARKER: &str = "### ";

static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[*•-][ \t]*").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*?(.*?)\*\*?").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Card {
    /// No answer to show yet.
    Placeholder,
    /// A `### ` section: header text and its normalized body.
    Section { title: String, body: String },
    /// One line of a header-less answer.
    Paragraph { body: String },
}

impl Card {
    pub fn title(&self) -> Option<&str> {
        match self {
            Card::Section { title, .. } => Some(title),
            Card::Placeholder | Card::Paragraph { .. } => None,
        }
    }

    /// Markdown body; the placeholder message for [`Card::Placeholder`].
    pub fn body(&self) -> &str {
        match self {
            Card::Placeholder => PLACEHOLDER_TEXT,
            Card::Section { body, .. } | Card::Paragraph { body } => body,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Card::Placeholder)
    }
}

/// Segments `text` into cards. Whitespace-only text has no non-blank line
/// and so yields no cards at all.
pub fn segment(text: &str) -> Vec<Card> {
    if text.is_empty() || text == LOADING_SENTINEL {
        return vec![Card::Placeholder];
    }

    let sections = split_sections(text);
    if sections.is_empty() {
        return text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| Card::Paragraph { body: normalize_markup(line) })
            .collect();
    }

    sections.into_iter().map(section_card).collect()
}

/// Promotes bullet glyphs to `- ` and rewrites `*x*` / `**x**` runs as
/// `**x**`. Applying it twice gives the same result as applying it once.
pub fn normalize_markup(text: &str) -> String {
    let bulleted = BULLET.replace_all(text, "- ");
    EMPHASIS.replace_all(&bulleted, "**${1}**").into_owned()
}

/// Cuts `text` just before every line that opens with a `### ` header and
/// drops blank fragments. Empty when no line is a header.
fn split_sections(text: &str) -> Vec<&str> {
    let mut starts: Vec<usize> = text
        .match_indices('\n')
        .map(|(i, _)| i + 1)
        .filter(|&i| text[i..].starts_with(HEADER_MARKER))
        .collect();
    if text.starts_with(HEADER_MARKER) {
        starts.insert(0, 0);
    }
    if starts.is_empty() {
        return Vec::new();
    }

    let mut bounds = Vec::with_capacity(starts.len() + 2);
    if starts[0] != 0 {
        bounds.push(0);
    }
    bounds.extend(starts);
    bounds.push(text.len());

    bounds
        .windows(2)
        .map(|w| &text[w[0]..w[1]])
        .filter(|section| !section.trim().is_empty())
        .collect()
}

fn section_card(section: &str) -> Card {
    let (header, rest) = section.split_once('\n').unwrap_or((section, ""));
    let header = header.strip_prefix(HEADER_MARKER).unwrap_or(header).trim_end();
    let title = header.strip_suffix(':').unwrap_or(header).trim().to_string();
    Card::Section { title, body: normalize_markup(rest.trim()) }
}

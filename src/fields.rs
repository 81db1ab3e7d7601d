//! Field descriptors, typed field values and per-topic form state.

use std::collections::BTreeMap;
use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

/// Input control kind for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Select,
    Tags,
    Textarea,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Select => "select",
            FieldKind::Tags => "tags",
            FieldKind::Textarea => "textarea",
        }
    }

    /// Turns raw control input into the value stored in form state.
    pub fn parse_input(&self, raw: &str) -> FieldValue {
        match self {
            FieldKind::Text | FieldKind::Select | FieldKind::Textarea => {
                FieldValue::Text(raw.to_string())
            }
            FieldKind::Number => FieldValue::Number(parse_leading_int(raw)),
            FieldKind::Tags => FieldValue::Tags(split_tags(raw)),
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static metadata for one input control of a topic form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Choices for `Select` fields, empty otherwise.
    pub options: &'static [&'static str],
    pub placeholder: Option<&'static str>,
}

impl FieldDescriptor {
    pub const fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Text, options: &[], placeholder: Some(placeholder) }
    }

    pub const fn number(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Number, options: &[], placeholder: Some(placeholder) }
    }

    pub const fn tags(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Tags, options: &[], placeholder: Some(placeholder) }
    }

    pub const fn textarea(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Textarea, options: &[], placeholder: Some(placeholder) }
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self { name, label, kind: FieldKind::Select, options, placeholder: None }
    }

    /// Label of the empty leading option of a select control.
    pub fn select_prompt(&self) -> String {
        format!("Select {}", self.label)
    }
}

/// A typed form value. Serializes as a bare JSON string, number or array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(i64),
    Text(String),
    Tags(Vec<String>),
}

impl FieldValue {
    /// Whether the value counts as "filled in" when copying fields into a
    /// request body. Empty text and zero are blank; a tag list always counts.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Number(n) => *n != 0,
            FieldValue::Tags(_) => true,
        }
    }

    /// The string shown back in the input control.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(0) => String::new(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Tags(tags) => tags.join(", "),
        }
    }
}

/// Splits comma-separated tag input, trimming each tag and dropping blanks.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses the leading integer of `raw` (`"12 years"` → 12). Anything
/// unparsable is 0; digit runs past the `i64` range saturate.
pub fn parse_leading_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let digits_start = usize::from(s.starts_with(['-', '+']));
    let end = s[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| i + digits_start);
    match s[..end].parse::<i64>() {
        Ok(n) => n,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}

/// Current values of the active topic's form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        self.values.insert(name.into(), value);
    }

    /// Normalizes `raw` through the descriptor's kind and stores it.
    pub fn set_input(&mut self, field: &FieldDescriptor, raw: &str) {
        self.set(field.name, field.kind.parse_input(raw));
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text value of `name` if it is set and non-empty.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(FieldValue::Text(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    pub fn tags(&self, name: &str) -> Option<&[String]> {
        match self.values.get(name) {
            Some(FieldValue::Tags(tags)) => Some(tags),
            _ => None,
        }
    }

    /// Display string for the control bound to `field`.
    pub fn display(&self, name: &str) -> String {
        self.values.get(name).map(FieldValue::display).unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        let value = FieldKind::Tags.parse_input("a, b , c");
        assert_eq!(value, FieldValue::Tags(vec!["a".into(), "b".into(), "c".into()]));
        assert_eq!(value.display(), "a, b, c");
        assert_eq!(FieldKind::Tags.parse_input(&value.display()), value);
    }

    #[test]
    fn tags_drop_blank_entries() {
        assert_eq!(split_tags(" , Rust,, "), vec!["Rust".to_string()]);
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn text_like_kinds_keep_raw_input() {
        for kind in [FieldKind::Text, FieldKind::Select, FieldKind::Textarea] {
            let value = kind.parse_input("Mid Level");
            assert_eq!(value, FieldValue::Text("Mid Level".into()));
            assert_eq!(kind.parse_input(&value.display()), value);
        }
    }

    #[test]
    fn number_parsing() {
        assert_eq!(FieldKind::Number.parse_input("7"), FieldValue::Number(7));
        assert_eq!(parse_leading_int("12 years"), 12);
        assert_eq!(parse_leading_int("3.9"), 3);
        assert_eq!(parse_leading_int("-4"), -4);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("-"), 0);
    }

    #[test]
    fn oversized_numbers_saturate_and_stay_in_the_payload() {
        assert_eq!(parse_leading_int("99999999999999999999"), i64::MAX);
        assert_eq!(parse_leading_int("-99999999999999999999 years"), i64::MIN);
        assert!(FieldKind::Number.parse_input("99999999999999999999").is_truthy());
        assert_eq!(FieldValue::Number(0).display(), "");
        assert_eq!(FieldKind::Number.parse_input(&FieldValue::Number(15).display()), FieldValue::Number(15));
    }

    #[test]
    fn truthiness() {
        assert!(!FieldValue::Text(String::new()).is_truthy());
        assert!(!FieldValue::Number(0).is_truthy());
        assert!(FieldValue::Tags(vec![]).is_truthy());
        assert!(FieldValue::Text("x".into()).is_truthy());
    }

    #[test]
    fn values_serialize_bare() {
        let json = serde_json::to_string(&vec![
            FieldValue::Text("a".into()),
            FieldValue::Number(3),
            FieldValue::Tags(vec!["x".into()]),
        ])
        .unwrap();
        assert_eq!(json, r#"["a",3,["x"]]"#);
    }

    #[test]
    fn form_state_accessors() {
        let field = FieldDescriptor::tags("skills", "Key Skills", "e.g., React");
        let mut form = FormState::new();
        form.set_input(&field, "React, Rust");
        assert_eq!(form.tags("skills"), Some(&["React".to_string(), "Rust".to_string()][..]));
        assert_eq!(form.text("skills"), None);
        assert_eq!(form.display("skills"), "React, Rust");
        form.set("role", FieldValue::Text(String::new()));
        assert_eq!(form.text("role"), None);
        form.clear();
        assert!(form.is_empty());
    }
}

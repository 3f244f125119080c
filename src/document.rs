//! Records exchanged with the host framework: documents and their schema.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A host document: its type plus a flat mapping from field name to value.
///
/// Serialized in the host's flat form, e.g. `{"doctype": "ToDo", "description": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub doctype: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new<S: Into<String>>(doctype: S) -> Self {
        Document {
            doctype: doctype.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style setter
    ///
    /// # Examples
    /// ```
    /// use recase::document::Document;
    ///
    /// let doc = Document::new("ToDo").with("description", "call back");
    /// assert_eq!(doc.get_str("description"), Some("call back"));
    /// ```
    pub fn with<K: Into<String>, V: Into<Value>>(mut self, field: K, value: V) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the field value when it is a string
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Reads a check field: `1`, `true` and `"1"` are set, anything else is not
    pub fn get_flag(&self, field: &str) -> bool {
        match self.get(field) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
            Some(Value::String(s)) => matches!(s.trim(), "1" | "true"),
            _ => false,
        }
    }

    pub fn set<K: Into<String>, V: Into<Value>>(&mut self, field: K, value: V) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }
}

/// The kind of a schema field, using the host's field type names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Data,
    SmallText,
    Text,
    TextEditor,
    LongText,
    MarkdownEditor,
    SectionBreak,
    Check,
    Select,
    Other(String),
}

impl FieldKind {
    /// Checks whether the field holds free text that can be case transformed
    pub fn is_free_text(&self) -> bool {
        matches!(
            self,
            FieldKind::Data
                | FieldKind::SmallText
                | FieldKind::Text
                | FieldKind::TextEditor
                | FieldKind::LongText
                | FieldKind::MarkdownEditor
        )
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Data => "Data",
            FieldKind::SmallText => "Small Text",
            FieldKind::Text => "Text",
            FieldKind::TextEditor => "Text Editor",
            FieldKind::LongText => "Long Text",
            FieldKind::MarkdownEditor => "Markdown Editor",
            FieldKind::SectionBreak => "Section Break",
            FieldKind::Check => "Check",
            FieldKind::Select => "Select",
            FieldKind::Other(name) => name,
        }
    }
}

impl From<&str> for FieldKind {
    fn from(s: &str) -> Self {
        match s {
            "Data" => FieldKind::Data,
            "Small Text" => FieldKind::SmallText,
            "Text" => FieldKind::Text,
            "Text Editor" => FieldKind::TextEditor,
            "Long Text" => FieldKind::LongText,
            "Markdown Editor" => FieldKind::MarkdownEditor,
            "Section Break" => FieldKind::SectionBreak,
            "Check" => FieldKind::Check,
            "Select" => FieldKind::Select,
            other => FieldKind::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldKind {
    fn from(s: String) -> Self {
        FieldKind::from(s.as_str())
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocField {
    pub fieldname: String,
    pub fieldtype: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DocField {
    pub fn new<S: Into<String>, K: Into<FieldKind>>(fieldname: S, fieldtype: K) -> Self {
        DocField {
            fieldname: fieldname.into(),
            fieldtype: fieldtype.into(),
            label: None,
        }
    }
}

/// Schema descriptor of a document type: its fields in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocMeta {
    #[serde(default)]
    pub fields: Vec<DocField>,
}

impl DocMeta {
    pub fn new(fields: Vec<DocField>) -> Self {
        DocMeta { fields }
    }

    pub fn has_field(&self, fieldname: &str) -> bool {
        self.fields.iter().any(|f| f.fieldname == fieldname)
    }

    /// Fields holding free text, in schema order
    pub fn text_fields(&self) -> impl Iterator<Item = &DocField> {
        self.fields.iter().filter(|f| f.fieldtype.is_free_text())
    }
}

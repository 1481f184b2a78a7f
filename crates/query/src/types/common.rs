//! Small value types shared by several query and aggregation kinds.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::ScriptLanguage;

/// `minimum_should_match`: either an absolute clause count or a
/// percentage / combination expression such as `"75%"` or `"3<90%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinimumShouldMatch {
    Count(i32),
    Expression(String),
}

impl From<i32> for MinimumShouldMatch {
    fn from(count: i32) -> Self {
        MinimumShouldMatch::Count(count)
    }
}

impl From<&str> for MinimumShouldMatch {
    fn from(expr: &str) -> Self {
        MinimumShouldMatch::Expression(expr.to_string())
    }
}

impl From<String> for MinimumShouldMatch {
    fn from(expr: String) -> Self {
        MinimumShouldMatch::Expression(expr)
    }
}

/// Edit distance for fuzzy matching: a fixed count or `"AUTO"` style spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fuzziness {
    Edits(u8),
    Spec(String),
}

impl Fuzziness {
    /// The engine's term-length based default (`"AUTO"`).
    pub fn auto() -> Self {
        Fuzziness::Spec("AUTO".to_string())
    }
}

impl From<u8> for Fuzziness {
    fn from(edits: u8) -> Self {
        Fuzziness::Edits(edits)
    }
}

impl From<&str> for Fuzziness {
    fn from(spec: &str) -> Self {
        Fuzziness::Spec(spec.to_string())
    }
}

/// An inline or stored script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Inline script source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Identifier of a stored script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<ScriptLanguage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<IndexMap<String, Value>>,
}

impl Script {
    /// Creates an inline script.
    pub fn inline(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Default::default()
        }
    }

    /// Creates a reference to a stored script.
    pub fn stored(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Adds a script parameter, keeping insertion order.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), value.into());
        self
    }
}

/// Points at a field of a document stored in another index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLookup {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing: Option<String>,
}

//! Domain types shared by every LexGuard crate
//!
//! Wire types (`AnalysisResult`, `DocumentRecord`, `DocumentSummary`, `Risk`)
//! deserialize leniently: the analysis service is free to omit optional
//! fields, send `null` for lists, or use numbers where strings are expected.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// ─────────────────────────────────────────────────────────────────────────────
// Identity
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque server-assigned document identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DocumentId(pub u64);

impl DocumentId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(DocumentId)
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_u64()
                .map(DocumentId)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid document id: {n}"))),
            Value::String(s) => s
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("invalid document id: {s}"))),
            other => Err(serde::de::Error::custom(format!(
                "invalid document id: {other}"
            ))),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Severity
// ─────────────────────────────────────────────────────────────────────────────

/// Risk severity, ordered by display priority.
///
/// Anything the server sends outside `low | medium | high` becomes
/// [`Severity::Unknown`], which sorts below `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    Unknown,
    Low,
    Medium,
    High,
}

impl Severity {
    /// Parse a server label, case-insensitively.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Severity::Low,
            "medium" => Severity::Medium,
            "high" => Severity::High,
            _ => Severity::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Unknown => "unknown",
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Severity::parse(&s),
            _ => Severity::Unknown,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Risk
// ─────────────────────────────────────────────────────────────────────────────

/// A flagged clause returned by the analysis service. Read-only once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub clause: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub risk_type: String,

    #[serde(default)]
    pub severity: Severity,

    #[serde(default, deserialize_with = "lenient_string")]
    pub explanation: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub original_text: String,

    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub suggested_rewrite: Option<String>,

    /// Character offset into the document's original text
    #[serde(
        default,
        deserialize_with = "lenient_offset",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_position: Option<usize>,

    #[serde(
        default,
        deserialize_with = "lenient_offset",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_position: Option<usize>,
}

impl Risk {
    /// Character range of the clause, when the server supplied a usable one.
    pub fn span(&self) -> Option<std::ops::Range<usize>> {
        match (self.start_position, self.end_position) {
            (Some(start), Some(end)) if start < end => Some(start..end),
            _ => None,
        }
    }

    /// Suggested rewrite, ignoring empty strings.
    pub fn rewrite(&self) -> Option<&str> {
        self.suggested_rewrite
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Give every risk a non-empty id that is unique within the list.
///
/// Risks without an id (or repeating one already seen) get a positional
/// `risk-<n>` id so selection can always address a single card.
pub fn assign_missing_ids(risks: &mut [Risk]) {
    let mut seen: HashSet<String> = HashSet::new();
    for (index, risk) in risks.iter_mut().enumerate() {
        if risk.id.trim().is_empty() || seen.contains(&risk.id) {
            let mut candidate = format!("risk-{}", index + 1);
            let mut suffix = 1;
            while seen.contains(&candidate) {
                suffix += 1;
                candidate = format!("risk-{}-{}", index + 1, suffix);
            }
            risk.id = candidate;
        }
        seen.insert(risk.id.clone());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire payloads
// ─────────────────────────────────────────────────────────────────────────────

/// Response of `POST /api/analyze-document` and `POST /api/analyze-text`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub document_id: Option<DocumentId>,

    #[serde(default, alias = "original_text", deserialize_with = "lenient_string")]
    pub text: String,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub summary: Option<String>,

    #[serde(default)]
    pub risks_found: Option<usize>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub risks: Vec<Risk>,

    #[serde(default, alias = "filename", deserialize_with = "lenient_opt_string")]
    pub document_name: Option<String>,

    #[serde(default)]
    pub text_length: Option<usize>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub analysis_id: Option<String>,
}

/// A stored document as returned by `GET`/`PUT /api/documents/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(default)]
    pub id: Option<DocumentId>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub original_text: String,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub edited_text: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub summary: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub risks: Vec<Risk>,

    #[serde(default, alias = "filename", deserialize_with = "lenient_opt_string")]
    pub document_name: Option<String>,
}

/// One row of `GET /api/documents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: DocumentId,

    #[serde(default, alias = "filename", deserialize_with = "lenient_opt_string")]
    pub document_name: Option<String>,

    #[serde(default)]
    pub risks_found: Option<usize>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub created_at: Option<String>,
}

impl DocumentSummary {
    pub fn display_name(&self) -> String {
        self.document_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("Document #{}", self.id))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Workflow enums
// ─────────────────────────────────────────────────────────────────────────────

/// Analysis lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

impl AnalysisPhase {
    /// Phases in which the input screen accepts a new submission
    pub fn accepts_submit(&self) -> bool {
        !matches!(self, AnalysisPhase::Loading)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisPhase::Loading)
    }
}

/// How the document is supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Upload,
    Text,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Upload => InputMode::Text,
            InputMode::Text => InputMode::Upload,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Upload => "Upload File",
            InputMode::Text => "Paste Text",
        }
    }
}

/// Result panel tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultTab {
    #[default]
    Summary,
    Ask,
    Risks,
}

impl ResultTab {
    pub const ALL: [ResultTab; 3] = [ResultTab::Summary, ResultTab::Ask, ResultTab::Risks];

    pub fn title(&self) -> &'static str {
        match self {
            ResultTab::Summary => "Summary",
            ResultTab::Ask => "Ask",
            ResultTab::Risks => "Risky Clauses",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ResultTab::Summary => 0,
            ResultTab::Ask => 1,
            ResultTab::Risks => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lenient field deserializers
// ─────────────────────────────────────────────────────────────────────────────

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_to_string(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(value_to_string(Value::deserialize(deserializer)?))
}

fn lenient_offset<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().map(|v| v as usize),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

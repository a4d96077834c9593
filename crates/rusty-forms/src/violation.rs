// File: src/violation.rs
// Purpose: Violation set handed over by the rule-checking engine

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rusty_forms_rules::RuleKind;
use serde::{Deserialize, Serialize};

/// Kind of rule a field failed
///
/// Names match the rule names used in `#[binding]` strings. Kinds this crate
/// does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ViolationKind {
    Required,
    AlphaDash,
    AlphaDashDot,
    MinSize,
    MaxSize,
    Email,
    Url,
    Other(String),
}

impl ViolationKind {
    pub fn as_str(&self) -> &str {
        match self {
            ViolationKind::Required => "Required",
            ViolationKind::AlphaDash => "AlphaDash",
            ViolationKind::AlphaDashDot => "AlphaDashDot",
            ViolationKind::MinSize => "MinSize",
            ViolationKind::MaxSize => "MaxSize",
            ViolationKind::Email => "Email",
            ViolationKind::Url => "Url",
            ViolationKind::Other(raw) => raw,
        }
    }

    /// The declared rule kind this violation reports on
    pub fn rule_kind(&self) -> RuleKind {
        RuleKind::from_name(self.as_str())
    }
}

impl From<&str> for ViolationKind {
    fn from(raw: &str) -> Self {
        match raw {
            "Required" => ViolationKind::Required,
            "AlphaDash" => ViolationKind::AlphaDash,
            "AlphaDashDot" => ViolationKind::AlphaDashDot,
            "MinSize" => ViolationKind::MinSize,
            "MaxSize" => ViolationKind::MaxSize,
            "Email" => ViolationKind::Email,
            "Url" => ViolationKind::Url,
            other => ViolationKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ViolationKind {
    fn from(raw: String) -> Self {
        ViolationKind::from(raw.as_str())
    }
}

impl From<ViolationKind> for String {
    fn from(kind: ViolationKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for ViolationKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ViolationKind::from(s))
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures reported for one submission
///
/// `overall` holds failures not attributable to a single field; `fields`
/// maps a field identity to the first violation found for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViolationSet {
    #[serde(default)]
    pub overall: Vec<String>,

    #[serde(default)]
    pub fields: HashMap<String, ViolationKind>,
}

impl ViolationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of reported failures
    pub fn count(&self) -> usize {
        self.overall.len() + self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn add_overall(&mut self, failure: impl Into<String>) {
        self.overall.push(failure.into());
    }

    /// Record a field violation. A field keeps its first reported kind.
    pub fn add_field(&mut self, identity: impl Into<String>, kind: impl Into<ViolationKind>) {
        self.fields.entry(identity.into()).or_insert_with(|| kind.into());
    }

    /// Builder form of [`add_field`](Self::add_field)
    pub fn with_field(mut self, identity: impl Into<String>, kind: impl Into<ViolationKind>) -> Self {
        self.add_field(identity, kind);
        self
    }

    /// Builder form of [`add_overall`](Self::add_overall)
    pub fn with_overall(mut self, failure: impl Into<String>) -> Self {
        self.add_overall(failure);
        self
    }

    pub fn field(&self, identity: &str) -> Option<&ViolationKind> {
        self.fields.get(identity)
    }
}

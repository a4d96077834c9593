// File: src/lib.rs
// Purpose: Binding rule strings declared on form fields

//! # rusty-forms-rules
//!
//! Parses the compact rule strings carried by `#[binding("...")]` field
//! attributes into an ordered list of [`Rule`]s.
//!
//! ```rust
//! use rusty_forms_rules::{parse_rules, find_bound_parameter, RuleKind};
//!
//! let rules = parse_rules("Required;MinSize(6);MaxSize(30)");
//! assert_eq!(rules.len(), 3);
//! assert_eq!(find_bound_parameter(&rules, &RuleKind::MaxSize), "30");
//! ```
//!
//! This crate only describes rules. Checking values against them is the job
//! of whichever engine produces the violation set.

use std::fmt;

use serde::{Deserialize, Serialize};

mod error;

pub use error::RuleError;

/// Separator between rules in a rule string
pub const RULE_SEPARATOR: char = ';';

/// Kind of a declared rule
///
/// Serializes as its rule name, e.g. `"MaxSize"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleKind {
    Required,
    AlphaDash,
    AlphaDashDot,
    MinSize,
    MaxSize,
    Email,
    Url,
    /// A kind this crate does not know about, kept by name
    Unknown(String),
}

impl RuleKind {
    /// Map a rule prefix to its kind. Never fails: unrecognised names become `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Required" => RuleKind::Required,
            "AlphaDash" => RuleKind::AlphaDash,
            "AlphaDashDot" => RuleKind::AlphaDashDot,
            "MinSize" => RuleKind::MinSize,
            "MaxSize" => RuleKind::MaxSize,
            "Email" => RuleKind::Email,
            "Url" => RuleKind::Url,
            other => RuleKind::Unknown(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            RuleKind::Required => "Required",
            RuleKind::AlphaDash => "AlphaDash",
            RuleKind::AlphaDashDot => "AlphaDashDot",
            RuleKind::MinSize => "MinSize",
            RuleKind::MaxSize => "MaxSize",
            RuleKind::Email => "Email",
            RuleKind::Url => "Url",
            RuleKind::Unknown(name) => name,
        }
    }

    /// Size bounds are the only kinds carrying a numeric parameter
    pub fn takes_parameter(&self) -> bool {
        matches!(self, RuleKind::MinSize | RuleKind::MaxSize)
    }
}

impl From<String> for RuleKind {
    fn from(name: String) -> Self {
        RuleKind::from_name(&name)
    }
}

impl From<RuleKind> for String {
    fn from(kind: RuleKind) -> Self {
        kind.name().to_string()
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single declared rule with its optional size parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub kind: RuleKind,
    pub param: Option<usize>,
}

impl Rule {
    /// A rule without a parameter
    pub fn bare(kind: RuleKind) -> Self {
        Self { kind, param: None }
    }

    /// A size rule with its bound
    pub fn sized(kind: RuleKind, bound: usize) -> Self {
        Self {
            kind,
            param: Some(bound),
        }
    }

    /// Parse one rule token, reporting malformed declarations
    pub fn parse(token: &str) -> Result<Self, RuleError> {
        let token = token.trim();

        let Some(open) = token.find('(') else {
            let kind = RuleKind::from_name(token);
            if kind.takes_parameter() {
                return Err(RuleError::MissingParameter {
                    rule: token.to_string(),
                });
            }
            return Ok(Rule::bare(kind));
        };

        if !token.ends_with(')') {
            return Err(RuleError::Unterminated {
                token: token.to_string(),
            });
        }

        let kind = RuleKind::from_name(&token[..open]);
        let raw = token[open + 1..token.len() - 1].trim();

        match kind {
            RuleKind::MinSize | RuleKind::MaxSize => {
                let invalid = || RuleError::InvalidParameter {
                    rule: kind.to_string(),
                    value: raw.to_string(),
                };
                // Plain decimal digits only, so the bound prints back exactly as declared
                if !is_canonical_decimal(raw) {
                    return Err(invalid());
                }
                let bound = raw.parse::<usize>().map_err(|_| invalid())?;
                Ok(Rule::sized(kind, bound))
            }
            // Parameters of kinds added upstream are not interpreted here
            RuleKind::Unknown(_) => Ok(Rule::bare(kind)),
            _ => Err(RuleError::UnexpectedParameter {
                rule: kind.to_string(),
            }),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.param {
            Some(bound) => write!(f, "{}({})", self.kind, bound),
            None => write!(f, "{}", self.kind),
        }
    }
}

fn is_canonical_decimal(raw: &str) -> bool {
    !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw == "0" || !raw.starts_with('0'))
}

fn tokens(rule_string: &str) -> impl Iterator<Item = &str> {
    rule_string
        .split(RULE_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Parse a rule string such as `"Required;MinSize(6);MaxSize(30)"`.
///
/// Never fails. A token that is not a well-formed rule is kept as
/// `RuleKind::Unknown` holding the whole token.
pub fn parse_rules(rule_string: &str) -> Vec<Rule> {
    tokens(rule_string)
        .map(|token| {
            Rule::parse(token).unwrap_or_else(|_| Rule::bare(RuleKind::Unknown(token.to_string())))
        })
        .collect()
}

/// Parse a rule string, failing on the first malformed token.
///
/// Unknown rule names are still accepted.
pub fn parse_rules_strict(rule_string: &str) -> Result<Vec<Rule>, RuleError> {
    tokens(rule_string).map(Rule::parse).collect()
}

/// Bound of the first declared rule of the given size kind, as text.
///
/// Returns an empty string when `kind` is not `MinSize`/`MaxSize` or no such
/// rule is declared.
pub fn find_bound_parameter(rules: &[Rule], kind: &RuleKind) -> String {
    if !kind.takes_parameter() {
        return String::new();
    }

    rules
        .iter()
        .find(|rule| &rule.kind == kind)
        .and_then(|rule| rule.param)
        .map(|bound| bound.to_string())
        .unwrap_or_default()
}

// File: src/messages.rs
// Purpose: Translate a field violation into the message shown to the user

use serde::{Deserialize, Serialize};

use crate::violation::ViolationKind;

/// Message templates, one per violation kind
///
/// Placeholders: `{label}` is the field's display name, `{bound}` the size
/// bound declared for the field, `{kind}` the raw violation kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplates {
    #[serde(default = "default_required")]
    pub required: String,

    #[serde(default = "default_alpha_dash")]
    pub alpha_dash: String,

    #[serde(default = "default_alpha_dash_dot")]
    pub alpha_dash_dot: String,

    #[serde(default = "default_min_size")]
    pub min_size: String,

    #[serde(default = "default_max_size")]
    pub max_size: String,

    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_unknown")]
    pub unknown: String,
}

// Default values
fn default_required() -> String {
    "{label} cannot be empty".to_string()
}

fn default_alpha_dash() -> String {
    "{label} must be valid alpha or numeric or dash(-_) characters".to_string()
}

fn default_alpha_dash_dot() -> String {
    "{label} must be valid alpha or numeric or dash(-_) or dot characters".to_string()
}

fn default_min_size() -> String {
    "{label} must contain at least {bound} characters".to_string()
}

fn default_max_size() -> String {
    "{label} must contain at most {bound} characters".to_string()
}

fn default_email() -> String {
    "{label} is not a valid e-mail address".to_string()
}

fn default_url() -> String {
    "{label} is not a valid URL".to_string()
}

fn default_unknown() -> String {
    "Unknown error: {kind}".to_string()
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            required: default_required(),
            alpha_dash: default_alpha_dash(),
            alpha_dash_dot: default_alpha_dash_dot(),
            min_size: default_min_size(),
            max_size: default_max_size(),
            email: default_email(),
            url: default_url(),
            unknown: default_unknown(),
        }
    }
}

impl MessageTemplates {
    /// Template used for a violation kind
    pub fn template(&self, kind: &ViolationKind) -> &str {
        match kind {
            ViolationKind::Required => &self.required,
            ViolationKind::AlphaDash => &self.alpha_dash,
            ViolationKind::AlphaDashDot => &self.alpha_dash_dot,
            ViolationKind::MinSize => &self.min_size,
            ViolationKind::MaxSize => &self.max_size,
            ViolationKind::Email => &self.email,
            ViolationKind::Url => &self.url,
            ViolationKind::Other(_) => &self.unknown,
        }
    }

    /// Render the message for one field violation
    pub fn translate(&self, kind: &ViolationKind, label: &str, bound: &str) -> String {
        fill(
            self.template(kind),
            &[("{label}", label), ("{bound}", bound), ("{kind}", kind.as_str())],
        )
    }
}

/// Substitute placeholders in one pass; substituted text is never rescanned
fn fill(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        match substitutions
            .iter()
            .find(|(placeholder, _)| tail.starts_with(placeholder))
        {
            Some((placeholder, value)) => {
                out.push_str(value);
                rest = &tail[placeholder.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(ViolationKind::Required, "", "Username cannot be empty")]
    #[case(
        ViolationKind::AlphaDash,
        "",
        "Username must be valid alpha or numeric or dash(-_) characters"
    )]
    #[case(
        ViolationKind::AlphaDashDot,
        "",
        "Username must be valid alpha or numeric or dash(-_) or dot characters"
    )]
    #[case(ViolationKind::MinSize, "6", "Username must contain at least 6 characters")]
    #[case(ViolationKind::MaxSize, "30", "Username must contain at most 30 characters")]
    #[case(ViolationKind::Email, "", "Username is not a valid e-mail address")]
    #[case(ViolationKind::Url, "", "Username is not a valid URL")]
    fn test_default_templates(
        #[case] kind: ViolationKind,
        #[case] bound: &str,
        #[case] expected: &str,
    ) {
        let templates = MessageTemplates::default();
        assert_eq!(templates.translate(&kind, "Username", bound), expected);
    }

    #[test]
    fn test_unknown_kind_renders_raw_name() {
        let templates = MessageTemplates::default();
        let kind = ViolationKind::Other("Frobnicate".to_string());

        assert_eq!(
            templates.translate(&kind, "Username", ""),
            "Unknown error: Frobnicate"
        );
    }

    #[test]
    fn test_missing_bound_renders_empty() {
        let templates = MessageTemplates::default();
        assert_eq!(
            templates.translate(&ViolationKind::MaxSize, "Bio", ""),
            "Bio must contain at most  characters"
        );
    }

    #[test]
    fn test_label_text_is_not_rescanned() {
        let templates = MessageTemplates::default();

        assert_eq!(
            templates.translate(&ViolationKind::Required, "Field {kind}", ""),
            "Field {kind} cannot be empty"
        );
        assert_eq!(
            templates.translate(&ViolationKind::MaxSize, "{bound}", "30"),
            "{bound} must contain at most 30 characters"
        );
    }

    #[test]
    fn test_unmatched_braces_are_kept() {
        let templates = MessageTemplates {
            required: "{label} {missing} {".to_string(),
            ..MessageTemplates::default()
        };
        assert_eq!(
            templates.translate(&ViolationKind::Required, "Name", ""),
            "Name {missing} {"
        );
    }

    #[test]
    fn test_custom_template() {
        let templates = MessageTemplates {
            required: "Please fill in {label}".to_string(),
            ..MessageTemplates::default()
        };
        assert_eq!(
            templates.translate(&ViolationKind::Required, "Password", ""),
            "Please fill in Password"
        );
    }
}

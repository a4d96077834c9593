// File: src/descriptor.rs
// Purpose: Field descriptor tables for bound records

use rusty_forms_rules::{find_bound_parameter, parse_rules, Rule, RuleKind};

use crate::value::Value;

/// Wire name that excludes a field from binding and echo
pub const EXCLUDED_WIRE_NAME: &str = "-";

/// Declaration of one record field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Field identity, unique within the record (e.g. `UserName`)
    pub identity: &'static str,
    /// Name used for binding and as the echo key (e.g. `username`)
    pub wire_name: &'static str,
    pub excluded: bool,
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    /// Build a field from its identity, wire name and rule string
    pub fn new(identity: &'static str, wire_name: &'static str, rules: &str) -> Self {
        Self {
            identity,
            wire_name,
            excluded: wire_name == EXCLUDED_WIRE_NAME,
            rules: parse_rules(rules),
        }
    }

    /// Bound of the first declared rule of a size kind, or `""`
    pub fn bound_parameter(&self, kind: &RuleKind) -> String {
        find_bound_parameter(&self.rules, kind)
    }
}

/// Ordered field table of a record type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDescriptor {
    fields: Vec<FieldSpec>,
}

impl RecordDescriptor {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// All fields in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Non-excluded fields in declaration order
    pub fn bound_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| !field.excluded)
    }

    pub fn field(&self, identity: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.identity == identity)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A struct whose fields carry binding declarations
///
/// Usually implemented with `#[derive(Record)]`.
pub trait Record {
    /// The field table of this record type
    fn describe(&self) -> &'static RecordDescriptor;

    /// Current value of a field, by identity. `None` for unknown or excluded fields.
    fn field_value(&self, identity: &str) -> Option<Value>;

    /// Type name used when logging
    fn type_name(&self) -> &'static str;
}

impl<T: Record + ?Sized> Record for &T {
    fn describe(&self) -> &'static RecordDescriptor {
        (**self).describe()
    }

    fn field_value(&self, identity: &str) -> Option<Value> {
        (**self).field_value(identity)
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn descriptor() -> RecordDescriptor {
        RecordDescriptor::new(vec![
            FieldSpec::new("UserName", "username", "Required;MaxSize(35)"),
            FieldSpec::new("Token", "-", ""),
            FieldSpec::new("Password", "passwd", "Required;MinSize(6);MaxSize(30)"),
        ])
    }

    #[test]
    fn test_excluded_flag_from_sentinel() {
        let desc = descriptor();
        assert!(!desc.fields()[0].excluded);
        assert!(desc.fields()[1].excluded);
    }

    #[test]
    fn test_bound_fields_keep_order() {
        let desc = descriptor();
        let wire: Vec<&str> = desc.bound_fields().map(|f| f.wire_name).collect();
        assert_eq!(wire, vec!["username", "passwd"]);
    }

    #[test]
    fn test_bound_parameter() {
        let desc = descriptor();
        let password = desc.field("Password").unwrap();

        assert_eq!(password.bound_parameter(&RuleKind::MinSize), "6");
        assert_eq!(password.bound_parameter(&RuleKind::MaxSize), "30");
        assert_eq!(desc.field("Token").unwrap().bound_parameter(&RuleKind::MaxSize), "");
    }

    #[test]
    fn test_lookup_by_identity() {
        let desc = descriptor();
        assert_eq!(desc.len(), 3);
        assert!(desc.field("UserName").is_some());
        assert!(desc.field("username").is_none());
    }
}

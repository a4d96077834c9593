// File: src/form.rs
// Purpose: Form trait and per-form label tables

use crate::context::RenderContext;
use crate::descriptor::Record;
use crate::validate;
use crate::violation::ViolationSet;

/// Static table of display labels for a form's fields
///
/// ```rust
/// use rusty_forms::LabelMap;
///
/// static LABELS: LabelMap = LabelMap::new(&[("UserName", "Username")]);
///
/// assert_eq!(LABELS.resolve("UserName"), "Username");
/// assert_eq!(LABELS.resolve("Remember"), "Remember");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LabelMap {
    entries: &'static [(&'static str, &'static str)],
}

impl LabelMap {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Label declared for a field, if any
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, label)| *label)
    }

    /// Label for a field, falling back to the field identity itself
    pub fn resolve<'a>(&self, field: &'a str) -> &'a str {
        self.get(field).unwrap_or(field)
    }
}

/// A record that can be validated and redisplayed
///
/// Each form supplies its own field labels.
pub trait Form: Record {
    /// Display name of a field, used in error messages
    fn name<'a>(&self, field: &'a str) -> &'a str;

    /// Render `violations` into `ctx` with the default message templates
    fn validate(&self, violations: &ViolationSet, ctx: &mut RenderContext)
    where
        Self: Sized,
    {
        validate::validate(violations, ctx, self);
    }
}

impl<T: Form + ?Sized> Form for &T {
    fn name<'a>(&self, field: &'a str) -> &'a str {
        (**self).name(field)
    }
}

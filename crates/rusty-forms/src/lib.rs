//! # rusty-forms
//!
//! Declarative form errors for server-rendered pages: fields declare their
//! wire name and binding rules, a rule-checking engine reports violations,
//! and this crate turns those violations into one user-facing message plus
//! the submitted values, written into the template's render context.
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_forms::{Form, LabelMap, Record, RenderContext, ViolationKind, ViolationSet};
//!
//! #[derive(Record)]
//! struct LogInForm {
//!     #[form("username")]
//!     #[binding("Required;MaxSize(35)")]
//!     user_name: String,
//!
//!     #[form("passwd")]
//!     #[binding("Required;MinSize(6);MaxSize(30)")]
//!     password: String,
//! }
//!
//! static LABELS: LabelMap = LabelMap::new(&[("UserName", "Username")]);
//!
//! impl Form for LogInForm {
//!     fn name<'a>(&self, field: &'a str) -> &'a str {
//!         LABELS.resolve(field)
//!     }
//! }
//!
//! let form = LogInForm { user_name: String::new(), password: "hunter22".into() };
//! let violations = ViolationSet::new().with_field("UserName", ViolationKind::Required);
//!
//! let mut ctx = RenderContext::new();
//! form.validate(&violations, &mut ctx);
//!
//! assert!(ctx.has_error());
//! assert_eq!(ctx.error_msg(), Some("Username cannot be empty"));
//! assert!(ctx.field_error("UserName"));
//! ```
//!
//! ## Context keys
//!
//! - `HasError` - `true` when a field violation was reported
//! - `ErrorMsg` - the single rendered message
//! - `Err_<Field>` - flag for the field the message is about
//! - `<wire name>` - the submitted value of every non-excluded field

// Lets the Record derive refer to `::rusty_forms` from inside this crate
extern crate self as rusty_forms;

pub mod auth;
pub mod config;
pub mod context;
pub mod descriptor;
pub mod echo;
pub mod form;
pub mod messages;
pub mod validate;
pub mod value;
pub mod violation;

// Re-export the derive macro (shares its name with the trait)
pub use rusty_forms_derive::Record;

// Re-export rule metadata
pub use rusty_forms_rules as rules;
pub use rusty_forms_rules::{Rule, RuleKind};

// Re-export core types
pub use config::FormsConfig;
pub use context::RenderContext;
pub use descriptor::{FieldSpec, Record, RecordDescriptor};
pub use echo::assign_form;
pub use form::{Form, LabelMap};
pub use messages::MessageTemplates;
pub use validate::{validate, Validator};
pub use value::Value;
pub use violation::{ViolationKind, ViolationSet};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}

// File: src/validate.rs
// Purpose: Turn a violation set into render-context error state

use once_cell::sync::Lazy;
use tracing::{debug, error};

use crate::config::FormsConfig;
use crate::context::{field_error_key, RenderContext, ERROR_MSG, HAS_ERROR};
use crate::descriptor::FieldSpec;
use crate::echo::assign_form;
use crate::form::Form;
use crate::messages::MessageTemplates;
use crate::violation::{ViolationKind, ViolationSet};

static DEFAULT_VALIDATOR: Lazy<Validator> = Lazy::new(Validator::default);

/// Renders violations into a context using a set of message templates
#[derive(Debug, Clone, Default)]
pub struct Validator {
    messages: MessageTemplates,
}

impl Validator {
    pub fn new(messages: MessageTemplates) -> Self {
        Self { messages }
    }

    pub fn from_config(config: &FormsConfig) -> Self {
        Self::new(config.messages.clone())
    }

    pub fn messages(&self) -> &MessageTemplates {
        &self.messages
    }

    /// Apply `violations` for `form` to `ctx`.
    ///
    /// - No violations: `ctx` is left untouched.
    /// - Untargeted failures: each is logged, `ctx` is left untouched.
    /// - Field violations: `HasError` is set, submitted values are echoed, and
    ///   the first violated field in declaration order gets `Err_<field>` and
    ///   the one `ErrorMsg` of this pass.
    pub fn validate<F: Form + ?Sized>(
        &self,
        violations: &ViolationSet,
        ctx: &mut RenderContext,
        form: &F,
    ) {
        if violations.is_empty() {
            return;
        }

        if !violations.overall.is_empty() {
            for failure in &violations.overall {
                error!(form = form.type_name(), error = %failure, "untargeted form failure");
            }
            return;
        }

        ctx.insert(HAS_ERROR, true);
        assign_form(form, ctx);

        for field in form.describe().bound_fields() {
            let Some(kind) = violations.field(field.identity) else {
                continue;
            };

            let message = self.translate(form, field, kind);
            debug!(
                form = form.type_name(),
                field = field.identity,
                kind = %kind,
                "rendering form error"
            );

            ctx.insert(field_error_key(field.identity), true);
            ctx.insert(ERROR_MSG, message);
            return;
        }

        debug!(
            form = form.type_name(),
            reported = violations.fields.len(),
            "field violations name no bound field"
        );
    }

    /// Message for one violated field
    pub fn translate<F: Form + ?Sized>(
        &self,
        form: &F,
        field: &FieldSpec,
        kind: &ViolationKind,
    ) -> String {
        let bound = field.bound_parameter(&kind.rule_kind());
        self.messages
            .translate(kind, form.name(field.identity), &bound)
    }
}

/// Apply `violations` for `form` to `ctx` with the built-in message templates
pub fn validate<F: Form + ?Sized>(violations: &ViolationSet, ctx: &mut RenderContext, form: &F) {
    DEFAULT_VALIDATOR.validate(violations, ctx, form);
}

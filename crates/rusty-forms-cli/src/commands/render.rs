use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusty_forms::auth::{InstallForm, LogInForm, RegisterForm};
use rusty_forms::{Form, FormsConfig, RenderContext, Validator, ViolationSet};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::FormKind;

pub fn execute(form: FormKind, values: &Path, violations: &Path, config: &Path) -> Result<()> {
    let config = FormsConfig::load(config)?;
    let values: serde_json::Value = read_json(values)?;
    let violations: ViolationSet = read_json(violations)?;

    debug!(
        fields = violations.fields.len(),
        overall = violations.overall.len(),
        "rendering violation set"
    );

    let ctx = render(form, values, &violations, &Validator::from_config(&config))?;
    println!("{}", serde_json::to_string_pretty(&ctx)?);

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON in {:?}", path))
}

fn render(
    form: FormKind,
    values: serde_json::Value,
    violations: &ViolationSet,
    validator: &Validator,
) -> Result<RenderContext> {
    match form {
        FormKind::Register => render_as::<RegisterForm>(values, violations, validator),
        FormKind::Login => render_as::<LogInForm>(values, violations, validator),
        FormKind::Install => render_as::<InstallForm>(values, violations, validator),
    }
}

fn render_as<F: Form + DeserializeOwned>(
    values: serde_json::Value,
    violations: &ViolationSet,
    validator: &Validator,
) -> Result<RenderContext> {
    let form: F = serde_json::from_value(values).context("Submitted values do not fit the form")?;
    let mut ctx = RenderContext::new();
    validator.validate(violations, &mut ctx, &form);
    Ok(ctx)
}

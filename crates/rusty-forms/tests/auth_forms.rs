/// Validation round-trips through the sign-up, sign-in and install forms
///
/// These exercise the whole path: derived descriptor tables, label tables,
/// message templates and value echo into the render context.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rusty_forms::auth::{InstallForm, LogInForm, RegisterForm};
use rusty_forms::{
    assign_form, Form, FormsConfig, Record, RenderContext, Validator, Value, ViolationKind,
    ViolationSet,
};

fn log_in() -> LogInForm {
    LogInForm {
        user_name: String::new(),
        password: "hunter22".to_string(),
        remember: true,
    }
}

fn register() -> RegisterForm {
    RegisterForm {
        user_name: "alice".to_string(),
        email: "alice@example".to_string(),
        password: "pw".to_string(),
        retype_passwd: "pw".to_string(),
        login_type: String::new(),
        login_name: String::new(),
    }
}

#[test]
fn test_login_required_username() {
    let violations = ViolationSet::new().with_field("UserName", ViolationKind::Required);
    let mut ctx = RenderContext::new();

    log_in().validate(&violations, &mut ctx);

    assert!(ctx.has_error());
    assert_eq!(ctx.error_msg(), Some("Username cannot be empty"));
    assert!(ctx.field_error("UserName"));
    assert_eq!(ctx.value("username"), Some(&Value::from("")));
    assert_eq!(ctx.value("passwd"), Some(&Value::from("hunter22")));
    assert_eq!(ctx.value("remember"), Some(&Value::from(true)));
}

#[test]
fn test_success_leaves_context_alone() {
    let mut ctx = RenderContext::new();
    ctx.insert("Title", "Sign In");
    let before = ctx.clone();

    log_in().validate(&ViolationSet::new(), &mut ctx);

    assert_eq!(ctx, before);
}

#[test]
fn test_overall_failures_are_only_logged() {
    let violations = ViolationSet::new()
        .with_overall("unexpected content type")
        .with_field("Password", ViolationKind::MinSize);
    let mut ctx = RenderContext::new();

    register().validate(&violations, &mut ctx);

    assert!(ctx.is_empty());
}

#[rstest]
#[case("Email", ViolationKind::Email, "E-mail address is not a valid e-mail address")]
#[case("Email", ViolationKind::MaxSize, "E-mail address must contain at most 50 characters")]
#[case("Password", ViolationKind::MinSize, "Password must contain at least 6 characters")]
#[case("Password", ViolationKind::MaxSize, "Password must contain at most 30 characters")]
#[case(
    "UserName",
    ViolationKind::AlphaDashDot,
    "Username must be valid alpha or numeric or dash(-_) or dot characters"
)]
#[case("RetypePasswd", ViolationKind::Required, "Re-type password cannot be empty")]
#[case("UserName", ViolationKind::Other("Frobnicate".to_string()), "Unknown error: Frobnicate")]
fn test_register_messages(
    #[case] field: &str,
    #[case] kind: ViolationKind,
    #[case] expected: &str,
) {
    let violations = ViolationSet::new().with_field(field, kind);
    let mut ctx = RenderContext::new();

    register().validate(&violations, &mut ctx);

    assert_eq!(ctx.error_msg(), Some(expected));
    assert!(ctx.field_error(field));
}

#[test]
fn test_only_first_declared_violation_is_rendered() {
    let violations = ViolationSet::new()
        .with_field("AdminEmail", ViolationKind::Email)
        .with_field("AdminPasswd", ViolationKind::MinSize)
        .with_field("Database", ViolationKind::Required);
    let mut ctx = RenderContext::new();

    InstallForm::default().validate(&violations, &mut ctx);

    assert_eq!(ctx.error_msg(), Some("Database name cannot be empty"));
    assert!(ctx.field_error("Database"));
    assert!(!ctx.field_error("AdminPasswd"));
    assert!(!ctx.field_error("AdminEmail"));
}

#[test]
fn test_install_echoes_every_field() {
    let form = InstallForm {
        database: "PostgreSQL".to_string(),
        repo_root_path: "/srv/git".to_string(),
        smtp_email: "noreply@example.com".to_string(),
        ..InstallForm::default()
    };
    let mut ctx = RenderContext::new();

    assign_form(&form, &mut ctx);

    assert_eq!(ctx.len(), form.describe().len());
    assert_eq!(ctx.value("database"), Some(&Value::from("PostgreSQL")));
    assert_eq!(ctx.value("repo_path"), Some(&Value::from("/srv/git")));
    assert_eq!(
        ctx.value("mailer_user"),
        Some(&Value::from("noreply@example.com"))
    );
}

#[test]
fn test_validator_from_config() {
    let config = FormsConfig::from_toml(
        r#"
        [messages]
        max_size = "{label} is limited to {bound} characters"
        "#,
    )
    .unwrap();
    let validator = Validator::from_config(&config);
    let violations = ViolationSet::new().with_field("UserName", ViolationKind::MaxSize);
    let mut ctx = RenderContext::new();

    validator.validate(&violations, &mut ctx, &log_in());

    assert_eq!(
        ctx.error_msg(),
        Some("Username is limited to 35 characters")
    );
}

#[test]
fn test_violations_from_engine_json() {
    let violations: ViolationSet = serde_json::from_str(
        r#"{ "overall": [], "fields": { "Password": "MaxSize" } }"#,
    )
    .unwrap();
    let mut ctx = RenderContext::new();

    log_in().validate(&violations, &mut ctx);

    assert_eq!(
        ctx.to_json(),
        serde_json::json!({
            "HasError": true,
            "ErrorMsg": "Password must contain at most 30 characters",
            "Err_Password": true,
            "username": "",
            "passwd": "hunter22",
            "remember": true
        })
    );
}

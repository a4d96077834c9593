// File: src/auth.rs
// Purpose: Sign-up, sign-in and installation forms

use serde::Deserialize;

use crate::form::{Form, LabelMap};
use crate::Record;

/// Account registration
#[derive(Debug, Clone, Default, Deserialize, Record)]
#[serde(default)]
pub struct RegisterForm {
    #[form("username")]
    #[binding("Required;AlphaDashDot;MaxSize(30)")]
    #[serde(rename = "username")]
    pub user_name: String,

    #[form("email")]
    #[binding("Required;Email;MaxSize(50)")]
    pub email: String,

    #[form("passwd")]
    #[binding("Required;MinSize(6);MaxSize(30)")]
    #[serde(rename = "passwd")]
    pub password: String,

    #[form("retypepasswd")]
    #[serde(rename = "retypepasswd")]
    pub retype_passwd: String,

    #[form("logintype")]
    #[serde(rename = "logintype")]
    pub login_type: String,

    #[form("loginname")]
    #[serde(rename = "loginname")]
    pub login_name: String,
}

static REGISTER_LABELS: LabelMap = LabelMap::new(&[
    ("UserName", "Username"),
    ("Email", "E-mail address"),
    ("Password", "Password"),
    ("RetypePasswd", "Re-type password"),
]);

impl Form for RegisterForm {
    fn name<'a>(&self, field: &'a str) -> &'a str {
        REGISTER_LABELS.resolve(field)
    }
}

/// Sign-in
#[derive(Debug, Clone, Default, Deserialize, Record)]
#[serde(default)]
pub struct LogInForm {
    #[form("username")]
    #[binding("Required;MaxSize(35)")]
    #[serde(rename = "username")]
    pub user_name: String,

    #[form("passwd")]
    #[binding("Required;MinSize(6);MaxSize(30)")]
    #[serde(rename = "passwd")]
    pub password: String,

    #[form("remember")]
    pub remember: bool,
}

static LOG_IN_LABELS: LabelMap =
    LabelMap::new(&[("UserName", "Username"), ("Password", "Password")]);

impl Form for LogInForm {
    fn name<'a>(&self, field: &'a str) -> &'a str {
        LOG_IN_LABELS.resolve(field)
    }
}

/// First-run installation settings
#[derive(Debug, Clone, Default, Deserialize, Record)]
#[serde(default)]
pub struct InstallForm {
    #[form("database")]
    #[binding("Required")]
    pub database: String,

    #[form("host")]
    pub host: String,

    #[form("user")]
    pub user: String,

    #[form("passwd")]
    pub passwd: String,

    #[form("database_name")]
    pub database_name: String,

    #[form("ssl_mode")]
    pub ssl_mode: String,

    #[form("database_path")]
    pub database_path: String,

    #[form("repo_path")]
    #[serde(rename = "repo_path")]
    pub repo_root_path: String,

    #[form("run_user")]
    pub run_user: String,

    #[form("domain")]
    pub domain: String,

    #[form("app_url")]
    pub app_url: String,

    #[form("admin_name")]
    #[binding("Required;AlphaDashDot;MaxSize(30)")]
    pub admin_name: String,

    #[form("admin_pwd")]
    #[binding("Required;MinSize(6);MaxSize(30)")]
    #[serde(rename = "admin_pwd")]
    pub admin_passwd: String,

    #[form("admin_email")]
    #[binding("Required;Email;MaxSize(50)")]
    pub admin_email: String,

    #[form("smtp_host")]
    pub smtp_host: String,

    #[form("mailer_user")]
    #[serde(rename = "mailer_user")]
    pub smtp_email: String,

    #[form("mailer_pwd")]
    #[serde(rename = "mailer_pwd")]
    pub smtp_passwd: String,

    #[form("register_confirm")]
    pub register_confirm: String,

    #[form("mail_notify")]
    pub mail_notify: String,
}

static INSTALL_LABELS: LabelMap = LabelMap::new(&[
    ("Database", "Database name"),
    ("AdminName", "Admin user name"),
    ("AdminPasswd", "Admin password"),
    ("AdminEmail", "Admin e-mail address"),
]);

impl Form for InstallForm {
    fn name<'a>(&self, field: &'a str) -> &'a str {
        INSTALL_LABELS.resolve(field)
    }
}

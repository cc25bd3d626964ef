//! SSO coverage reports.
//!
//! Both reports sort logins by byte order, apply the result limit and then
//! render through [`OutputFormat`]. Neither touches its input maps.

use std::io::Write;

use serde::Serialize;
use tabled::Tabled;

use crate::error::DiscoResult;
use crate::github::{RoleMap, SamlUserMap};
use crate::output::OutputFormat;
use crate::reconcile::compute_exceptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct ExceptionRow {
    #[tabled(rename = "Login without SSO")]
    pub login: String,
    #[tabled(rename = "Role")]
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct SsoIdentityRow {
    #[tabled(rename = "Login")]
    pub login: String,
    #[tabled(rename = "Role")]
    pub role: String,
    #[tabled(rename = "SSO Identity")]
    pub sso_identity: String,
}

/// Keep the first `limit` entries when `0 < limit <= len`, otherwise keep all.
pub fn apply_limit<T>(items: &mut Vec<T>, limit: i64) {
    if let Ok(n) = usize::try_from(limit) {
        if n > 0 && n <= items.len() {
            items.truncate(n);
        }
    }
}

fn sorted_keys(map: &std::collections::HashMap<String, String>, limit: i64) -> Vec<&String> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    apply_limit(&mut keys, limit);
    keys
}

pub fn exception_rows(user_roles: &RoleMap, saml_users: &SamlUserMap, limit: i64) -> Vec<ExceptionRow> {
    let exceptions = compute_exceptions(user_roles, saml_users);
    sorted_keys(&exceptions, limit)
        .into_iter()
        .map(|login| ExceptionRow {
            login: login.clone(),
            role: exceptions[login].clone(),
        })
        .collect()
}

pub fn sso_identity_rows(user_roles: &RoleMap, saml_users: &SamlUserMap, limit: i64) -> Vec<SsoIdentityRow> {
    sorted_keys(saml_users, limit)
        .into_iter()
        .map(|login| SsoIdentityRow {
            login: login.clone(),
            role: user_roles.get(login).cloned().unwrap_or_default(),
            sso_identity: saml_users[login].clone(),
        })
        .collect()
}

/// Members with a role but no SSO identity.
pub fn render_exceptions<W: Write + ?Sized>(
    user_roles: &RoleMap,
    saml_users: &SamlUserMap,
    limit: i64,
    format: OutputFormat,
    out: &mut W,
) -> DiscoResult<()> {
    format.write(&exception_rows(user_roles, saml_users, limit), out)
}

/// Every SSO-linked member with their role and identity.
pub fn render_all<W: Write + ?Sized>(
    user_roles: &RoleMap,
    saml_users: &SamlUserMap,
    limit: i64,
    format: OutputFormat,
    out: &mut W,
) -> DiscoResult<()> {
    format.write(&sso_identity_rows(user_roles, saml_users, limit), out)
}

//! SSO exception computation

use std::collections::HashMap;

use crate::github::{RoleMap, SamlUserMap};

/// Members holding a role without a linked SAML identity: login -> role.
pub type ExceptionMap = HashMap<String, String>;

/// Role holders whose login has no entry in `saml_users`. Logins that only
/// appear in `saml_users` are ignored.
pub fn compute_exceptions(user_roles: &RoleMap, saml_users: &SamlUserMap) -> ExceptionMap {
    user_roles
        .iter()
        .filter(|(login, _)| !saml_users.contains_key(*login))
        .map(|(login, role)| (login.clone(), role.clone()))
        .collect()
}

//! Typed response shapes for the two organization queries.
//!
//! Fields GitHub may legitimately omit are `Option`. Everything else is
//! required, so a missing or null value fails decoding instead of turning
//! into an empty string somewhere downstream.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{DiscoError, DiscoResult};

/// Top-level GraphQL envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: Option<bool>,
    pub end_cursor: Option<String>,
}

/// Relay-style connection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<E> {
    #[serde(default)]
    pub page_info: Option<PageInfo>,
    pub edges: Vec<E>,
}

impl<E> Connection<E> {
    /// Absent `pageInfo` or `hasNextPage` both mean this is the last page.
    pub fn has_next_page(&self) -> bool {
        self.page_info
            .as_ref()
            .and_then(|p| p.has_next_page)
            .unwrap_or(false)
    }

    pub fn end_cursor(&self) -> Option<&str> {
        self.page_info.as_ref().and_then(|p| p.end_cursor.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct UserRef {
    pub login: String,
}

// SAML identity listing

#[derive(Debug, Deserialize)]
pub struct SamlUsersData {
    pub organization: Option<SamlOrganization>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlOrganization {
    pub saml_identity_provider: Option<SamlIdentityProvider>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlIdentityProvider {
    pub sso_url: Option<String>,
    pub external_identities: Connection<ExternalIdentityEdge>,
}

#[derive(Debug, Deserialize)]
pub struct ExternalIdentityEdge {
    pub node: ExternalIdentity,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalIdentity {
    pub guid: Option<String>,
    pub saml_identity: SamlIdentity,
    pub user: UserRef,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlIdentity {
    pub name_id: String,
}

// Organization role listing

#[derive(Debug, Deserialize)]
pub struct UserRolesData {
    pub organization: Option<RolesOrganization>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolesOrganization {
    pub members_with_role: Connection<MemberEdge>,
}

#[derive(Debug, Deserialize)]
pub struct MemberEdge {
    pub role: String,
    pub node: UserRef,
}

/// Decode a raw body, mapping any shape mismatch to `MalformedResponse`.
pub fn parse<T: DeserializeOwned>(body: &str) -> DiscoResult<GraphQlResponse<T>> {
    serde_json::from_str(body).map_err(|e| DiscoError::malformed(e.to_string(), body))
}

/// Build a `MalformedResponse` for a missing object, folding in any GraphQL
/// error messages the server sent alongside it.
pub fn missing(what: &str, errors: &[GraphQlError], body: &str) -> DiscoError {
    let reason = if errors.is_empty() {
        format!("{what} is missing")
    } else {
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        format!("{what} is missing ({})", messages.join("; "))
    };
    DiscoError::malformed(reason, body)
}

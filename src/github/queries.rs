//! GraphQL documents and their page extraction

use serde::Serialize;
use serde_json::json;

use super::schema::{self, SamlUsersData, UserRolesData};
use crate::error::{DiscoError, DiscoResult};

/// Edges requested per page; GitHub's maximum for connections.
pub const PAGE_SIZE: u32 = 100;

const SAML_USERS_QUERY: &str = r#"query($org: String!, $first: Int!, $cursor: String) {
  organization(login: $org) {
    samlIdentityProvider {
      ssoUrl
      externalIdentities(first: $first, after: $cursor) {
        pageInfo {
          hasNextPage
          endCursor
        }
        edges {
          node {
            guid
            samlIdentity {
              nameId
            }
            user {
              login
            }
          }
        }
      }
    }
  }
}"#;

const USER_ROLES_QUERY: &str = r#"query($org: String!, $first: Int!, $cursor: String) {
  organization(login: $org) {
    membersWithRole(first: $first, after: $cursor) {
      pageInfo {
        hasNextPage
        endCursor
      }
      edges {
        role
        node {
          login
        }
      }
    }
  }
}"#;

/// JSON body POSTed to the GraphQL endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub variables: serde_json::Value,
}

/// One decoded page: login/value pairs plus the continuation info.
#[derive(Debug, Default)]
pub struct Page {
    pub entries: Vec<(String, String)>,
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// A cursor-paginated query that yields login-keyed pairs.
pub trait PagedQuery {
    fn name(&self) -> &'static str;

    fn request(&self, cursor: Option<&str>) -> GraphQlRequest;

    fn decode(&self, body: &str) -> DiscoResult<Page>;
}

/// External identities of the organization's SAML provider: login -> nameId.
#[derive(Debug, Clone)]
pub struct SamlUsersQuery {
    pub org: String,
    pub sso_url: String,
}

impl PagedQuery for SamlUsersQuery {
    fn name(&self) -> &'static str {
        "saml_users"
    }

    fn request(&self, cursor: Option<&str>) -> GraphQlRequest {
        GraphQlRequest {
            query: SAML_USERS_QUERY,
            variables: json!({ "org": self.org, "first": PAGE_SIZE, "cursor": cursor }),
        }
    }

    fn decode(&self, body: &str) -> DiscoResult<Page> {
        let resp = schema::parse::<SamlUsersData>(body)?;
        let org = resp
            .data
            .and_then(|d| d.organization)
            .ok_or_else(|| schema::missing("organization", &resp.errors, body))?;
        let idp = org
            .saml_identity_provider
            .ok_or_else(|| schema::missing("samlIdentityProvider", &resp.errors, body))?;

        if let Some(actual) = idp.sso_url.as_deref() {
            if !same_sso_url(actual, &self.sso_url) {
                return Err(DiscoError::malformed(
                    format!(
                        "organization {} uses SAML provider {actual}, not {}",
                        self.org, self.sso_url
                    ),
                    body,
                ));
            }
        }

        let conn = idp.external_identities;
        Ok(Page {
            has_next_page: conn.has_next_page(),
            end_cursor: conn.end_cursor().map(String::from),
            entries: conn
                .edges
                .into_iter()
                .map(|e| (e.node.user.login, e.node.saml_identity.name_id))
                .collect(),
        })
    }
}

/// Members holding an organization role: login -> role.
#[derive(Debug, Clone)]
pub struct UserRolesQuery {
    pub org: String,
}

impl PagedQuery for UserRolesQuery {
    fn name(&self) -> &'static str {
        "user_roles"
    }

    fn request(&self, cursor: Option<&str>) -> GraphQlRequest {
        GraphQlRequest {
            query: USER_ROLES_QUERY,
            variables: json!({ "org": self.org, "first": PAGE_SIZE, "cursor": cursor }),
        }
    }

    fn decode(&self, body: &str) -> DiscoResult<Page> {
        let resp = schema::parse::<UserRolesData>(body)?;
        let org = resp
            .data
            .and_then(|d| d.organization)
            .ok_or_else(|| schema::missing("organization", &resp.errors, body))?;

        let conn = org.members_with_role;
        Ok(Page {
            has_next_page: conn.has_next_page(),
            end_cursor: conn.end_cursor().map(String::from),
            entries: conn
                .edges
                .into_iter()
                .map(|e| (e.node.login, e.role))
                .collect(),
        })
    }
}

fn same_sso_url(a: &str, b: &str) -> bool {
    a.trim().trim_end_matches('/') == b.trim().trim_end_matches('/')
}

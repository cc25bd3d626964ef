//! GitHub GraphQL client

pub mod pagination;
pub mod queries;
pub mod schema;

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use tracing::{debug, instrument};

use crate::error::{DiscoError, DiscoResult};
use queries::{GraphQlRequest, SamlUsersQuery, UserRolesQuery};

pub const DEFAULT_API_URL: &str = "https://api.github.com/graphql";

/// Login -> SAML nameId.
pub type SamlUserMap = HashMap<String, String>;

/// Login -> organization role.
pub type RoleMap = HashMap<String, String>;

/// Sends one GraphQL request and returns the raw response body.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    async fn execute(&self, request: &GraphQlRequest) -> DiscoResult<String>;
}

/// HTTPS transport with bearer authentication.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    auth_token: String,
}

impl HttpTransport {
    pub fn new(endpoint: &str, auth_token: &str, timeout: Duration) -> DiscoResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()
            .map_err(|e| DiscoError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            auth_token: auth_token.to_string(),
        })
    }
}

#[async_trait]
impl GraphQlTransport for HttpTransport {
    async fn execute(&self, request: &GraphQlRequest) -> DiscoResult<String> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("bearer {}", self.auth_token))
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, concat!("gh-disco/", env!("CARGO_PKG_VERSION")))
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "GraphQL response");

        if !status.is_success() {
            return Err(DiscoError::Transport(format!("server returned {status}: {body}")));
        }
        Ok(body)
    }
}

/// Organization SSO queries on top of a [`GraphQlTransport`].
pub struct GitHubClient<T = HttpTransport> {
    transport: T,
}

impl GitHubClient<HttpTransport> {
    pub fn new(endpoint: &str, auth_token: &str, timeout: Duration) -> DiscoResult<Self> {
        Ok(Self::with_transport(HttpTransport::new(
            endpoint, auth_token, timeout,
        )?))
    }
}

impl<T: GraphQlTransport> GitHubClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// All external identities of the organization's SAML provider.
    #[instrument(skip(self))]
    pub async fn fetch_saml_users(&self, org: &str, sso_url: &str) -> DiscoResult<SamlUserMap> {
        let query = SamlUsersQuery {
            org: org.to_string(),
            sso_url: sso_url.to_string(),
        };
        pagination::drain(&self.transport, &query).await
    }

    /// Every member of the organization with their role.
    #[instrument(skip(self))]
    pub async fn fetch_user_roles(&self, org: &str) -> DiscoResult<RoleMap> {
        let query = UserRolesQuery {
            org: org.to_string(),
        };
        pagination::drain(&self.transport, &query).await
    }
}

//! gh-disco
//!
//! Audits SSO coverage of a GitHub organization: lists members with their
//! SAML identity, or only the members holding a role without one.
//!
//! # Usage
//!
//! ```bash
//! gh-disco sso --org my-org --saml-provider "https://accounts.google.com/o/saml2/idp?idpid=example"
//! gh-disco sso --org my-org --saml-provider "..." --exceptions --limit 20
//! gh-disco sso --org my-org --saml-provider "..." --format json
//! gh-disco config set auth_token ghp_xxx
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod output;
pub mod reconcile;
pub mod report;

pub use error::{DiscoError, DiscoResult};
pub use github::{GitHubClient, RoleMap, SamlUserMap};

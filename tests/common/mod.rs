//! Common test utilities for gh-disco integration tests.

#![allow(dead_code)]

use std::time::Duration;

use gh_disco::commands::sso::SsoConfig;
use gh_disco::output::OutputFormat;
use serde_json::{json, Value};
use wiremock::{Request, Respond, ResponseTemplate};

pub const TOKEN: &str = "ghp_testtoken";
pub const IDP: &str = "https://accounts.google.com/o/saml2/idp?idpid=example";

/// Page info pointing at page `next`, or marking the last page.
fn page_info(next: Option<usize>) -> Value {
    match next {
        Some(n) => json!({"hasNextPage": true, "endCursor": format!("page-{n}")}),
        None => json!({"hasNextPage": false, "endCursor": "last"}),
    }
}

/// One page of the SAML identity listing.
pub fn saml_page(users: &[(&str, &str)], next: Option<usize>) -> Value {
    let edges: Vec<Value> = users
        .iter()
        .map(|(login, name_id)| {
            json!({"node": {
                "guid": format!("guid-{login}"),
                "samlIdentity": {"nameId": name_id},
                "user": {"login": login}
            }})
        })
        .collect();
    json!({"data": {"organization": {"samlIdentityProvider": {
        "ssoUrl": IDP,
        "externalIdentities": {"pageInfo": page_info(next), "edges": edges}
    }}}})
}

/// One page of the organization role listing.
pub fn roles_page(members: &[(&str, &str)], next: Option<usize>) -> Value {
    let edges: Vec<Value> = members
        .iter()
        .map(|(login, role)| json!({"node": {"login": login}, "role": role}))
        .collect();
    json!({"data": {"organization": {"membersWithRole": {
        "pageInfo": page_info(next),
        "edges": edges
    }}}})
}

/// Serves GraphQL pages: picks the listing from the query text and the page
/// from the `page-N` cursor variable.
pub struct GraphQlResponder {
    pub saml_pages: Vec<Value>,
    pub role_pages: Vec<Value>,
}

impl Respond for GraphQlResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = match serde_json::from_slice(&request.body) {
            Ok(v) => v,
            Err(_) => return ResponseTemplate::new(400),
        };
        let query = body["query"].as_str().unwrap_or_default();
        let pages = if query.contains("externalIdentities") {
            &self.saml_pages
        } else {
            &self.role_pages
        };
        let index = body["variables"]["cursor"]
            .as_str()
            .and_then(|c| c.strip_prefix("page-"))
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(0);

        match pages.get(index) {
            Some(page) => ResponseTemplate::new(200).set_body_json(page.clone()),
            None => ResponseTemplate::new(404),
        }
    }
}

pub fn sso_config(api_url: String, list_exceptions: bool, limit: i64) -> SsoConfig {
    SsoConfig {
        auth_token: TOKEN.to_string(),
        api_url,
        org: "my-org".to_string(),
        saml_provider: IDP.to_string(),
        list_exceptions,
        limit,
        format: OutputFormat::Table,
        timeout: Duration::from_secs(5),
    }
}

/// Table rows below the header, cells joined with commas.
pub fn data_rows(text: &str) -> Vec<String> {
    text.lines()
        .filter(|l| l.starts_with('|'))
        .skip(1)
        .map(|l| {
            l.split('|')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect()
}

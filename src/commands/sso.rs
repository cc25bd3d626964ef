//! `sso` command

use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::cli::SsoArgs;
use crate::config::Config;
use crate::error::{DiscoError, DiscoResult};
use crate::github::{GitHubClient, GraphQlTransport, DEFAULT_API_URL};
use crate::output::OutputFormat;
use crate::report;

/// Fully validated inputs for one audit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsoConfig {
    pub auth_token: String,
    pub api_url: String,
    pub org: String,
    pub saml_provider: String,
    pub list_exceptions: bool,
    pub limit: i64,
    pub format: OutputFormat,
    pub timeout: Duration,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read the config file at `path`. Without a home directory there is no file
/// to merge, so flags and env vars are all that count.
pub fn load_file_config(path: DiscoResult<PathBuf>) -> DiscoResult<Config> {
    match path {
        Ok(path) => Config::load_from(&path),
        Err(e) => {
            debug!(error = %e, "no config file location, using flags only");
            Ok(Config::default())
        }
    }
}

impl SsoConfig {
    /// Merge flags (or their env vars) over the config file and collect every
    /// problem instead of stopping at the first. An unreadable config file is
    /// one more problem on the list.
    pub fn resolve(
        args: SsoArgs,
        auth_token: Option<String>,
        api_url: Option<String>,
        file: DiscoResult<Config>,
    ) -> DiscoResult<Self> {
        let mut problems = Vec::new();
        let file = file.unwrap_or_else(|e| {
            problems.push(e.to_string());
            Config::default()
        });

        let auth_token = non_empty(auth_token).or(non_empty(file.auth_token.clone()));
        if auth_token.is_none() {
            problems.push("missing --auth-token".to_string());
        }
        let org = non_empty(args.org).or(non_empty(file.org.clone()));
        if org.is_none() {
            problems.push("missing --org".to_string());
        }
        let saml_provider = non_empty(args.saml_provider).or(non_empty(file.saml_provider.clone()));
        if saml_provider.is_none() {
            problems.push("missing --saml-provider".to_string());
        }
        if args.limit < 0 {
            problems.push("--limit must be equal or greater than 0".to_string());
        }
        let api_url = non_empty(api_url)
            .or(non_empty(file.api_url.clone()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        match url::Url::parse(&api_url) {
            Ok(u) if u.scheme() == "https" || u.scheme() == "http" => {}
            _ => problems.push(format!("--api-url is not a valid http(s) URL: {api_url}")),
        }

        match (auth_token, org, saml_provider) {
            (Some(auth_token), Some(org), Some(saml_provider)) if problems.is_empty() => Ok(Self {
                auth_token,
                api_url,
                org,
                saml_provider,
                list_exceptions: args.exceptions,
                limit: args.limit,
                format: args.format,
                timeout: Duration::from_secs(file.timeout_secs()),
            }),
            _ => Err(DiscoError::Validation(problems)),
        }
    }
}

pub async fn handle<F>(
    args: SsoArgs,
    auth_token: Option<String>,
    api_url: Option<String>,
    profile: Option<&str>,
    shutdown: F,
) -> DiscoResult<()>
where
    F: Future<Output = ()>,
{
    let file = load_file_config(Config::config_path(profile));
    let config = SsoConfig::resolve(args, auth_token, api_url, file)?;
    let client = GitHubClient::new(&config.api_url, &config.auth_token, config.timeout)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&client, &config, &mut out, shutdown).await
}

/// Fetch both maps, then render. Nothing is written unless both fetches
/// succeed; `shutdown` completing first aborts the in-flight request.
pub async fn run<T, W, F>(
    client: &GitHubClient<T>,
    config: &SsoConfig,
    out: &mut W,
    shutdown: F,
) -> DiscoResult<()>
where
    T: GraphQlTransport,
    W: Write + ?Sized,
    F: Future<Output = ()>,
{
    let fetch = async {
        let saml_users = client
            .fetch_saml_users(&config.org, &config.saml_provider)
            .await?;
        let user_roles = client.fetch_user_roles(&config.org).await?;
        Ok::<_, DiscoError>((saml_users, user_roles))
    };

    let (saml_users, user_roles) = tokio::select! {
        fetched = fetch => fetched?,
        _ = shutdown => return Err(DiscoError::Cancelled),
    };
    info!(
        org = %config.org,
        saml_users = saml_users.len(),
        members = user_roles.len(),
        "rendering report"
    );

    if config.list_exceptions {
        report::render_exceptions(&user_roles, &saml_users, config.limit, config.format, out)
    } else {
        report::render_all(&user_roles, &saml_users, config.limit, config.format, out)
    }
}

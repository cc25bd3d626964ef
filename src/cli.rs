//! Command-line definitions

use clap::{Args, Parser, Subcommand};

use crate::logging::LogLevel;
use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "gh-disco")]
#[command(version)]
#[command(about = "Audit GitHub organization SSO coverage", long_about = None)]
pub struct Cli {
    /// GitHub personal access token
    #[arg(long, env = "GHDISCO_AUTH_TOKEN", hide_env_values = true, global = true)]
    pub auth_token: Option<String>,

    /// GitHub GraphQL endpoint
    #[arg(long, env = "GHDISCO_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Log verbosity (RUST_LOG takes precedence)
    #[arg(long, env = "GHDISCO_LOG_LEVEL", value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Profile name from config file
    #[arg(long, short, global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Query GitHub SSO status
    Sso(SsoArgs),
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Debug, Clone, Args)]
#[command(after_help = "Find SSO exceptions in the org:\n  \
    gh-disco sso --org my-org --saml-provider \"https://accounts.google.com/o/saml2/idp?idpid=example\" --exceptions")]
pub struct SsoArgs {
    /// GitHub organization name
    #[arg(long, env = "GHDISCO_ORG")]
    pub org: Option<String>,

    /// The SAML provider URL
    #[arg(long, env = "GHDISCO_SAML_PROVIDER")]
    pub saml_provider: Option<String>,

    /// List only members with a role but no SSO identity
    #[arg(long)]
    pub exceptions: bool,

    /// Limit the number of results; 0 returns all findings
    #[arg(long, short = 'n', default_value_t = 0, allow_negative_numbers = true)]
    pub limit: i64,

    /// Output format
    #[arg(long, short, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sso() {
        let cli = Cli::try_parse_from([
            "gh-disco",
            "sso",
            "--org",
            "my-org",
            "--saml-provider",
            "https://idp.example.com",
            "--exceptions",
            "-n",
            "5",
            "--auth-token",
            "t0ken",
        ])
        .unwrap();

        assert_eq!(cli.auth_token.as_deref(), Some("t0ken"));
        match cli.command {
            Commands::Sso(args) => {
                assert_eq!(args.org.as_deref(), Some("my-org"));
                assert!(args.exceptions);
                assert_eq!(args.limit, 5);
                assert_eq!(args.format, OutputFormat::Table);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_negative_limit_reaches_validation() {
        let cli = Cli::try_parse_from(["gh-disco", "sso", "--limit", "-3"]).unwrap();
        match cli.command {
            Commands::Sso(args) => assert_eq!(args.limit, -3),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_set() {
        let cli = Cli::try_parse_from(["gh-disco", "config", "set", "org", "my-org"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config { action: ConfigCommands::Set { .. } }
        ));
    }
}

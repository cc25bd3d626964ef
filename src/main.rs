use clap::Parser;
use colored::Colorize;

use gh_disco::cli::{Cli, Commands};
use gh_disco::config::Config;
use gh_disco::{commands, logging};

async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; never cancel.
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let profile = cli.profile.as_deref();
    let result = match cli.command {
        Commands::Sso(args) => {
            commands::sso::handle(args, cli.auth_token, cli.api_url, profile, interrupted()).await
        }
        Commands::Config { action } => Config::config_path(profile).and_then(|path| {
            let stdout = std::io::stdout();
            commands::config::handle(action, &path, &mut stdout.lock())
        }),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

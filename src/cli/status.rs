//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::session::{resolve_landing_route, token};

/// Run the status command to display session and configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Mediop Session Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!("Config file: {}", config_path.display().to_string().cyan());

    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!("Run {} to sign in.", "mediop login".cyan());
            return Ok(());
        }
    };

    if let Some(ref host) = config.api_host {
        println!("{} Custom API host: {}", "○".dimmed(), host.cyan());
    }

    let Some(ref auth) = config.auth else {
        println!("{} No session stored", "○".dimmed());
        println!("  → Run 'mediop login' to sign in");
        return Ok(());
    };

    match token::decode(&auth.token) {
        Err(_) => {
            println!(
                "{} Stored token is unreadable (cleared on next command)",
                "⚠".yellow()
            );
        }
        Ok(identity) if identity.is_expired() => {
            println!("{} Session expired", "⚠".yellow());
            println!("  → Run 'mediop login' to sign in again");
        }
        Ok(identity) => {
            let now = chrono::Utc::now();
            let remaining = identity.expires_at.signed_duration_since(now);
            let hours = remaining.num_hours();
            let mins = remaining.num_minutes() % 60;

            println!(
                "{} Session valid (expires in {}h {}m)",
                "✓".green(),
                hours,
                mins
            );
            println!(
                "{} Account: {} ({})",
                "✓".green(),
                identity.subject.bold(),
                identity.role
            );
            if let Some(ref name) = identity.display_name {
                println!("  Name: {}", name);
            }
            println!(
                "  Landing route: {}",
                resolve_landing_route(Some(&identity)).as_path().cyan()
            );
        }
    }

    println!();
    Ok(())
}

//! Whoami command implementation

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::{Result, SessionError};
use crate::output;
use crate::session::{Identity, LandingRoute, resolve_landing_route};

/// Identity for table display
#[derive(Tabled)]
struct IdentityRow {
    #[tabled(rename = "ACCOUNT")]
    account: String,
    #[tabled(rename = "ROLE")]
    role: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "LANDING")]
    landing: String,
    #[tabled(rename = "EXPIRES")]
    expires: String,
}

/// Identity for JSON output
#[derive(Serialize)]
struct IdentityReport {
    subject: String,
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issued_at: Option<DateTime<Utc>>,
    expires_at: DateTime<Utc>,
    landing_route: String,
}

impl IdentityReport {
    fn new(identity: &Identity, route: LandingRoute) -> Self {
        Self {
            subject: identity.subject.clone(),
            role: identity.role.as_str().to_string(),
            display_name: identity.display_name.clone(),
            issued_at: identity.issued_at,
            expires_at: identity.expires_at,
            landing_route: route.as_path().to_string(),
        }
    }
}

/// Run the whoami command
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts);
    let identity = ctx
        .session
        .identity()
        .ok_or(SessionError::NotAuthenticated)?;
    let route = resolve_landing_route(Some(identity));

    match opts.format {
        OutputFormat::Pretty => {
            println!("{}", identity.subject.bold());
            println!("  Role: {}", identity.role);
            if let Some(ref name) = identity.display_name {
                println!("  Name: {}", name);
            }
            println!("  Landing: {}", route.as_path().cyan());
            println!("  Expires: {}", identity.expires_at.to_rfc3339());
        }
        OutputFormat::Table => {
            let rows = vec![IdentityRow {
                account: identity.subject.clone(),
                role: identity.role.as_str().to_string(),
                name: identity.display_name.clone().unwrap_or_default(),
                landing: route.as_path().to_string(),
                expires: identity.expires_at.to_rfc3339(),
            }];
            println!("{}", output::format_table(&rows));
        }
        OutputFormat::Json => {
            let report = IdentityReport::new(identity, route);
            println!("{}", output::format_json(&report)?);
        }
    }

    Ok(())
}

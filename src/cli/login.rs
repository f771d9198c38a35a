//! Login command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::{Credentials, MedilinkClient};
use crate::error::Result;
use crate::session::resolve_landing_route;

/// Run the login command
pub async fn run(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    let credentials = Credentials { email, password };

    println!("{}", "Signing in...".cyan());
    let client = MedilinkClient::with_host(opts.api_host_ref())?;

    let mut ctx = CommandContext::new(opts);
    let identity = ctx.session.login(&client, &credentials).await?;

    println!("{}", "✓ Signed in".green());
    println!("  Account: {}", identity.subject.bold());
    println!("  Role: {}", identity.role);
    if let Some(name) = &identity.display_name {
        println!("  Name: {}", name);
    }

    let route = resolve_landing_route(Some(&identity));
    println!("  Landing: {}", route.as_path().cyan());

    Ok(())
}

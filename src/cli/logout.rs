//! Logout command implementation

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::Result;
use crate::session::SessionState;

/// Run the logout command. Signing out while signed out is fine.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::new(opts);
    let was_signed_in = ctx.restored == SessionState::LoggedIn;

    ctx.session.logout();

    if was_signed_in {
        println!("{}", "✓ Signed out".green());
    } else {
        println!("Not signed in.");
    }

    Ok(())
}

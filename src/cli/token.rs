//! Token command implementation
//!
//! Prints the raw bearer token so scripts can call the platform directly:
//! `curl -H "Authorization: Bearer $(mediop token)" ...`

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::Result;

/// Run the token command
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts);
    let token = ctx.session.bearer_token()?;

    println!("{}", token);
    Ok(())
}

//! `folio check-email`: run the contact form's email shape check.

use crate::cli::common::{CliError, CliResult};
use crate::validation::is_valid_email;
use clap::Args;

/// Check whether an address passes the contact form's email check
#[derive(Args, Debug)]
pub struct CheckEmailArgs {
    /// Address to check (surrounding whitespace is trimmed, as in the form)
    #[arg(value_name = "ADDR")]
    address: String,
}

impl CheckEmailArgs {
    /// Execute check-email command
    pub fn execute(&self) -> CliResult<()> {
        let address = self.address.trim();
        if is_valid_email(address) {
            println!("valid: {address}");
            Ok(())
        } else {
            Err(CliError::validation(format!("invalid: {address}")))
        }
    }
}

//! Signup command - capture an account signup form
//!
//! Same boundary as `report`: collect fields, check required, surface the
//! record to the diagnostic sink. The password fields are captured but never
//! echoed back.

use anyhow::{bail, Result};
use campusctl_core::SignupForm;
use clap::Parser;
use serde_json::json;

#[derive(Parser, Debug)]
pub struct SignupArgs {
    /// Full name, e.g. "John Doe".
    #[arg(long = "full-name")]
    pub name: Option<String>,

    /// Roll number, e.g. "2021BCS001".
    #[arg(long = "roll-no")]
    pub roll_no: Option<String>,

    /// College email address.
    #[arg(long)]
    pub email: Option<String>,

    /// Account password.
    #[arg(long)]
    pub password: Option<String>,

    /// Password confirmation (defaults to the password).
    #[arg(long = "confirm-password")]
    pub confirm_password: Option<String>,
}

pub fn run(args: &SignupArgs) -> Result<()> {
    let form = SignupForm {
        name: args.name.clone().unwrap_or_default(),
        roll_no: args.roll_no.clone().unwrap_or_default(),
        email: args.email.clone().unwrap_or_default(),
        password: args.password.clone().unwrap_or_default(),
        confirm_password: args
            .confirm_password
            .clone()
            .or_else(|| args.password.clone())
            .unwrap_or_default(),
    };

    let missing = form.missing_fields();
    if !missing.is_empty() {
        bail!("missing required fields: {}", missing.join(", "));
    }

    form.submit();
    let echo = json!({
        "name": form.name,
        "rollNo": form.roll_no,
        "email": form.email,
    });
    println!("{}", serde_json::to_string_pretty(&echo)?);
    Ok(())
}

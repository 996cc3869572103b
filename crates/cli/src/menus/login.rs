//! Demo login prompt shared by the role menus.

use anyhow::Result;
use dialoguer::{Input, Password};

use ecart_auth::User;

use crate::output::Output;

/// Prompt for credentials and check them against `user`.
///
/// Returns `false` after a console notice when the login fails; the caller
/// drops back to the main menu.
pub fn login(user: &User, output: &Output, skip: bool) -> Result<bool> {
    if skip {
        output.info(&format!("login skipped for {}", user.username));
        return Ok(true);
    }

    output.line(&format!("Login to the system - {}:", user.username));
    let _username: String = Input::new().with_prompt("Username").interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;

    // The sample flow checks the password only; the typed username is not
    // part of the credential.
    match user.authenticate(&password) {
        Ok(()) => {
            output.success("Login successful!");
            tracing::info!("{} logged in as {}", user.username, user.role);
            Ok(true)
        }
        Err(_) => {
            output.error("Login failed. Invalid credentials.");
            tracing::warn!("login failed for {}", user.username);
            Ok(false)
        }
    }
}

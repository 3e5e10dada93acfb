use std::collections::BTreeMap;

use anyhow::{bail, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use registry_mailer::config::{read_env_file, Settings, PASSWORD_RESET_URL};
use registry_mailer::mailer::EmailDispatcher;

/// Token carried in reset links sent from this tool, so smoke-test links
/// are recognizable and never usable against a live account.
const SMOKE_TEST_TOKEN: &str = "smoke_test_token";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let recipient = match std::env::args().nth(1) {
        Some(recipient) => recipient,
        None => bail!("usage: registry-mailer <recipient-address>"),
    };

    let settings = Settings::default();
    let dispatcher = EmailDispatcher::new(&settings);

    let mut failures = 0;

    // Registration confirmation carries no variables.
    failures += run_send(
        &dispatcher,
        &recipient,
        "registration-confirmation",
        "Welcome to the National Karting Series driver registry",
        &BTreeMap::new(),
    )
    .await;

    let mut variables = BTreeMap::new();
    variables.insert("RESET_LINK".to_string(), reset_link(&settings, &recipient));

    failures += run_send(
        &dispatcher,
        &recipient,
        "password-reset",
        "Reset your driver registry password",
        &variables,
    )
    .await;

    if failures > 0 {
        bail!("{} email(s) failed to send", failures);
    }

    tracing::info!(recipient = %recipient, "All emails sent");
    Ok(())
}

/// Build the password-reset link for the smoke-test email.
fn reset_link(settings: &Settings, recipient: &str) -> String {
    let env = read_env_file(&settings.env_file);
    let base = env
        .get(PASSWORD_RESET_URL)
        .cloned()
        .unwrap_or_else(|| "https://localhost/reset-password.html".to_string());

    format!("{}?token={}&email={}", base, SMOKE_TEST_TOKEN, recipient)
}

async fn run_send(
    dispatcher: &EmailDispatcher,
    recipient: &str,
    template: &str,
    subject: &str,
    variables: &BTreeMap<String, String>,
) -> u32 {
    match dispatcher.send(recipient, template, subject, variables).await {
        Ok(receipt) => {
            tracing::info!(
                template = %template,
                message_id = receipt.message_id.as_deref().unwrap_or("n/a"),
                status = %receipt.status,
                "Email sent"
            );
            0
        }
        Err(e) => {
            tracing::error!(template = %template, error = %e, "Email failed");
            1
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

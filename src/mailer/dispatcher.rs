//! Transactional email dispatcher

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{read_env_file, Settings, API_KEY, FROM_EMAIL};
use crate::mandrill::{MandrillClient, OutboundMessage, ProviderVerdict, Recipient, SendRequest};
use crate::template::TemplateLoader;

use super::types::{DispatchError, DispatchResult, SendReceipt};

/// Dispatches templated transactional emails through the provider.
///
/// Credentials and templates are re-read from storage on every send, so
/// configuration and template edits take effect immediately. Each send is
/// one attempt: at most one network call, no retries. Batched sends
/// execute strictly sequentially in caller order.
pub struct EmailDispatcher {
    env_file: PathBuf,
    templates: TemplateLoader,
    client: MandrillClient,
}

impl EmailDispatcher {
    /// Create a dispatcher from the given settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            env_file: settings.env_file.clone(),
            templates: TemplateLoader::new(&settings.templates_dir),
            client: MandrillClient::new(
                settings.api_url.clone(),
                Duration::from_secs(settings.timeout_secs),
            ),
        }
    }

    /// Send one templated email.
    ///
    /// Credentials are resolved and the template is rendered before any
    /// network activity; a missing credential or template fails the
    /// attempt with zero network calls.
    #[tracing::instrument(name = "mailer.send", skip(self, variables))]
    pub async fn send(
        &self,
        to: &str,
        template_name: &str,
        subject: &str,
        variables: &BTreeMap<String, String>,
    ) -> DispatchResult<SendReceipt> {
        let env = read_env_file(&self.env_file);
        let api_key = require(&env, API_KEY)?;
        let from_email = require(&env, FROM_EMAIL)?;

        let html = self.templates.render(template_name, variables)?;

        tracing::info!(
            to = %to,
            from = %from_email,
            subject = %subject,
            template = %template_name,
            body_bytes = html.len(),
            "Sending transactional email"
        );

        let request = SendRequest {
            key: api_key,
            message: OutboundMessage {
                to: vec![Recipient {
                    email: to.to_string(),
                }],
                from_email,
                subject: subject.to_string(),
                html,
            },
        };

        match self.client.send_message(&request).await? {
            ProviderVerdict::Accepted { message_id, status } => {
                tracing::info!(
                    message_id = message_id.as_deref().unwrap_or("n/a"),
                    status = %status,
                    "Provider accepted message"
                );
                Ok(SendReceipt { message_id, status })
            }
            ProviderVerdict::Rejected { reason } => Err(DispatchError::ProviderRejected(reason)),
            ProviderVerdict::Malformed => Err(DispatchError::UnexpectedResponseShape),
        }
    }
}

/// Resolve a required, non-empty configuration value.
fn require(env: &BTreeMap<String, String>, key: &'static str) -> DispatchResult<String> {
    match env.get(key) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => Err(DispatchError::MissingCredential(key)),
    }
}

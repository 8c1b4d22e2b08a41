//! Mail relay client.
//!
//! The relay forwards a JSON-described message to a mailbox. Only the
//! request contract matters here: one POST, JSON in, success decided by the
//! HTTP status alone. The response body is never read.

use std::time::Duration;

use anyhow::{Context, Result};
use futures::future::BoxFuture;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use thiserror::Error;

use crate::config::Config;
use crate::contact::FormData;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("relay returned HTTP {0}")]
    Status(u16),
}

/// Destination for contact form messages.
pub trait MailRelay: Send + Sync {
    fn send<'a>(&'a self, message: &'a FormData) -> BoxFuture<'a, Result<(), RelayError>>;
}

/// Relay backed by the formsubmit.co AJAX endpoint.
#[derive(Debug, Clone)]
pub struct FormSubmitRelay {
    client: reqwest::Client,
    url: String,
}

impl FormSubmitRelay {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build relay HTTP client")?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.relay_url(),
            Duration::from_secs(config.relay_timeout_secs),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post(&self, message: &FormData) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(message)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RelayError::Status(response.status().as_u16()));
        }

        Ok(())
    }
}

impl MailRelay for FormSubmitRelay {
    fn send<'a>(&'a self, message: &'a FormData) -> BoxFuture<'a, Result<(), RelayError>> {
        Box::pin(self.post(message))
    }
}

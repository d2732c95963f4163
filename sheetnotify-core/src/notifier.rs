//! Edit notifier: builds the payload for an edit and posts it

use crate::config::NotifierConfig;
use crate::error::Result;
use crate::event::EditEvent;
use crate::payload::UpdatePayload;
use crate::transport::{HttpTransport, Transport};
use log::{debug, info, warn};
use reqwest::Url;

/// Outcome of a delivered notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub endpoint: Url,
    pub status: u16,
    pub updates: usize,
}

/// Main notifier interface
pub struct EditNotifier<T: Transport = HttpTransport> {
    config: NotifierConfig,
    transport: T,
}

impl EditNotifier<HttpTransport> {
    /// Create a notifier posting over HTTP with the given configuration
    pub fn new(config: NotifierConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> EditNotifier<T> {
    pub fn with_transport(config: NotifierConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Trigger entry point: notify and drop any failure after logging it.
    ///
    /// There is no retry; a lost notification stays lost.
    pub fn on_edit(&self, event: &EditEvent<'_>) {
        if let Err(e) = self.notify(event) {
            warn!(
                "Dropped edit notification for '{}' {}: {}",
                event.sheet_name(),
                event.range,
                e
            );
        }
    }

    /// Build the payload for an edit and post it once
    pub fn notify(&self, event: &EditEvent<'_>) -> Result<Delivery> {
        let payload = UpdatePayload::from_event(event);
        self.send(&payload)
    }

    /// Post an already built payload
    pub fn send(&self, payload: &UpdatePayload) -> Result<Delivery> {
        let endpoint = self.config.endpoint_for(&payload.sheet_name)?;
        let body = payload.to_json()?;
        debug!(
            "Posting {} updates ({} bytes) to {}",
            payload.updates.len(),
            body.len(),
            endpoint
        );

        let status = self.transport.post_json(&endpoint, body)?;
        debug!("{} answered with status {}", endpoint, status);
        info!(
            "Sent {} updates for sheet '{}'",
            payload.updates.len(),
            payload.sheet_name
        );

        Ok(Delivery {
            endpoint,
            status,
            updates: payload.updates.len(),
        })
    }
}

//! src/resolver/probe.rs
//! ============================================================================
//! # Probe: Existence Checks for Candidate Files
//!
//! A probe answers one question: does a resource exist at this URL? The
//! answer is a plain `bool`. Transport failures, timeouts and non-success
//! statuses all collapse into `false`.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use tracing::{info, trace};

use crate::error::AppError;

#[async_trait]
pub trait Probe: Send + Sync {
    async fn exists(&self, url: &str) -> bool;
}

/// `HEAD` request per candidate; only a 2xx status counts as present.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new() -> Result<Self, AppError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn exists(&self, url: &str) -> bool {
        let exists = match self
            .client
            .head(url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        };

        trace!(url, exists, "http probe");
        exists
    }
}

/// Local-disk probe: present iff the path names a regular file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

#[async_trait]
impl Probe for FsProbe {
    async fn exists(&self, url: &str) -> bool {
        let exists = tokio::fs::metadata(url)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);

        trace!(url, exists, "fs probe");
        exists
    }
}

/// Picks the probe that matches how `base` addresses the media.
pub fn probe_for(base: &str) -> Result<Arc<dyn Probe>, AppError> {
    let lower = base.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        info!("Probing over HTTP: {}", base);
        Ok(Arc::new(HttpProbe::new()?))
    } else {
        info!("Probing local files under: {}", base);
        Ok(Arc::new(FsProbe))
    }
}

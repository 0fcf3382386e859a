//! Configuration source resolution.
//!
//! A `ConfigResolver` walks an ordered list of `ConfigSource`s and returns the
//! first configuration it finds. Every probe is best-effort: a source that is
//! missing, unreachable, or malformed is skipped, never fatal. Only presence or
//! absence crosses the resolver boundary; per-source detail is available to
//! callers that probe a single source themselves.


use crate::config::FirebaseOptions;
use reqwest::header;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

/// Fallback config file checked after any inline sources, matching the layout
/// the Firebase console snippet is usually dropped into.
pub const PRIMARY_CONFIG_PATH: &str = "pages/firebase-config.json";
/// Second fallback, next to the process working directory root.
pub const SECONDARY_CONFIG_PATH: &str = "firebase-config.json";

/// One ordered location to check for a configuration record.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// A configuration injected at construction time. Replaces the original
    /// pattern of probing well-known global variables at call time.
    Inline(FirebaseOptions),
    /// A local JSON file, read fresh from disk on every probe.
    File(PathBuf),
    /// An HTTP location, fetched with caching disabled.
    Url(Url),
}

/// Outcome of probing a single source.
///
/// `NotFound` and `Transient` both fall through to the next source during
/// resolution; they are kept distinct so callers and tests can tell "nothing
/// there" apart from "tried and failed".
#[derive(Debug, Clone, PartialEq)]
pub enum Probe {
    Found(FirebaseOptions),
    NotFound,
    Transient,
}

/// Walks config sources in priority order, first match wins.
pub struct ConfigResolver {
    sources: Vec<ConfigSource>,
    client: reqwest::Client,
}

impl ConfigResolver {
    /// Creates a resolver over the given sources, checked in order.
    pub fn new(sources: Vec<ConfigSource>) -> Self {
        Self {
            // Plain client: a config probe is never retried, a failed source
            // just falls through to the next one.
            client: reqwest::Client::new(),
            sources,
        }
    }

    /// Resolver over the standard file fallback chain:
    /// `pages/firebase-config.json`, then `firebase-config.json`.
    pub fn default_paths() -> Self {
        Self::new(vec![
            ConfigSource::File(PathBuf::from(PRIMARY_CONFIG_PATH)),
            ConfigSource::File(PathBuf::from(SECONDARY_CONFIG_PATH)),
        ])
    }

    /// Returns the first configuration any source yields, or `None` if every
    /// source came up empty. Never fails: transient source errors are folded
    /// into absence.
    pub async fn resolve(&self) -> Option<FirebaseOptions> {
        for source in &self.sources {
            match self.probe(source).await {
                Probe::Found(options) => return Some(options),
                Probe::NotFound => {}
                Probe::Transient => {
                    debug!(?source, "transient failure probing config source, skipping");
                }
            }
        }
        None
    }

    /// Probes a single source. File reads go to disk every time and URL
    /// fetches send `Cache-Control: no-store`, so a config that appears after
    /// an earlier miss is picked up.
    pub async fn probe(&self, source: &ConfigSource) -> Probe {
        match source {
            ConfigSource::Inline(options) => Probe::Found(options.clone()),
            ConfigSource::File(path) => match tokio::fs::read(path).await {
                Ok(bytes) => match serde_json::from_slice(&bytes) {
                    Ok(options) => Probe::Found(options),
                    // Malformed content is indistinguishable from absence.
                    Err(_) => Probe::NotFound,
                },
                Err(e) if e.kind() == ErrorKind::NotFound => Probe::NotFound,
                Err(_) => Probe::Transient,
            },
            ConfigSource::Url(url) => {
                let response = match self
                    .client
                    .get(url.clone())
                    .header(header::CACHE_CONTROL, "no-store")
                    .send()
                    .await
                {
                    Ok(response) => response,
                    Err(_) => return Probe::Transient,
                };

                if !response.status().is_success() {
                    return Probe::NotFound;
                }

                match response.json::<FirebaseOptions>().await {
                    Ok(options) => Probe::Found(options),
                    Err(_) => Probe::NotFound,
                }
            }
        }
    }
}

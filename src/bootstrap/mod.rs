//! One-shot service initialization.
//!
//! `FirebaseBootstrap` owns the whole flow: resolve a configuration, hand it to
//! the SDK exactly once, cache the resulting handle bundle for the life of the
//! process. It is an explicit context object, constructed once at startup and
//! shared by reference; there is no hidden module-level state.
//!
//! The first resolution is single-flighted: concurrent callers racing the
//! initial `services()` call all await the same pending initialization, so the
//! SDK's `initialize_app` runs at most once per process.
//!
//! A negative outcome is memoized too. Once a call has observed "no
//! configuration" or an initializer failure, every later call returns `None`
//! without re-probing the sources; the unconfigured state is terminal.

#[cfg(test)]
mod tests;

use crate::resolve::ConfigResolver;
use crate::sdk::rest::{FirebaseApp, FirebaseAuth, FirebaseFirestore};
use crate::sdk::{FirebaseSdk, RestSdk};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{error, info, warn};

/// The cached handle bundle: application context, authentication client, and
/// document-store client. Built once, never mutated, shared by every caller.
pub struct FirebaseServices {
    pub app: FirebaseApp,
    pub auth: FirebaseAuth,
    pub db: FirebaseFirestore,
}

/// Resolves configuration lazily and initializes the SDK at most once.
pub struct FirebaseBootstrap {
    resolver: ConfigResolver,
    sdk: Arc<dyn FirebaseSdk>,
    services: OnceCell<Option<Arc<FirebaseServices>>>,
}

impl FirebaseBootstrap {
    /// Bootstrap over an explicit source list and SDK implementation.
    pub fn new(resolver: ConfigResolver, sdk: Arc<dyn FirebaseSdk>) -> Self {
        Self {
            resolver,
            sdk,
            services: OnceCell::new(),
        }
    }

    /// Bootstrap over the standard config file chain and the live REST SDK.
    pub fn with_defaults() -> Self {
        Self::new(ConfigResolver::default_paths(), Arc::new(RestSdk))
    }

    /// Whether any source currently yields a configuration. Only resolves;
    /// never initializes the SDK and never touches the cache.
    pub async fn is_configured(&self) -> bool {
        self.resolver.resolve().await.is_some()
    }

    /// Initializes on first call and returns the cached handle bundle on every
    /// call after that. `None` means the process runs without backend
    /// services, either because no source yielded a configuration or because
    /// the initializer rejected the one that was found.
    pub async fn services(&self) -> Option<Arc<FirebaseServices>> {
        self.services
            .get_or_init(|| self.initialize())
            .await
            .clone()
    }

    /// Convenience alias for [`services`](Self::services).
    pub async fn get_services(&self) -> Option<Arc<FirebaseServices>> {
        self.services().await
    }

    async fn initialize(&self) -> Option<Arc<FirebaseServices>> {
        let Some(options) = self.resolver.resolve().await else {
            warn!(
                "no Firebase config found; set an inline source or create {}",
                crate::resolve::PRIMARY_CONFIG_PATH
            );
            return None;
        };

        let app = match self.sdk.initialize_app(options).await {
            Ok(app) => app,
            Err(e) => {
                error!(error = %e, "failed to initialize Firebase");
                return None;
            }
        };

        let auth = self.sdk.auth(&app);
        let db = self.sdk.firestore(&app);
        info!(
            project_id = app.project_id().unwrap_or("<unset>"),
            "Firebase initialized from runtime config"
        );

        Some(Arc::new(FirebaseServices { app, auth, db }))
    }
}

//! The external SDK boundary.
//!
//! The bootstrap never talks to Firebase directly; it goes through the
//! `FirebaseSdk` capability trait (initialize an app, get an auth handle, get a
//! Firestore handle). `RestSdk` is the live implementation; tests substitute
//! their own to observe or fail initialization.

pub mod rest;


use crate::config::FirebaseOptions;
use rest::{FirebaseApp, FirebaseAuth, FirebaseFirestore};
use thiserror::Error;

/// Errors surfaced by an SDK implementation during initialization.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Project ID is missing from the configuration; no service endpoint can
    /// be derived without it.
    #[error("Project ID is missing from configuration")]
    ProjectIdMissing,
    /// The backend rejected the configuration.
    #[error("Initialization failed: {0}")]
    Init(String),
}

/// Capability set consumed by the bootstrap, supplied explicitly at
/// construction rather than discovered at call time.
#[async_trait::async_trait]
pub trait FirebaseSdk: Send + Sync {
    /// Creates the application handle from a resolved configuration.
    async fn initialize_app(&self, options: FirebaseOptions) -> Result<FirebaseApp, SdkError>;

    /// Returns the authentication client for an initialized app.
    fn auth(&self, app: &FirebaseApp) -> FirebaseAuth;

    /// Returns the document-store client for an initialized app.
    fn firestore(&self, app: &FirebaseApp) -> FirebaseFirestore;
}

/// The default implementation backed by the Firebase REST endpoints.
#[derive(Debug, Default, Clone, Copy)]
pub struct RestSdk;

#[async_trait::async_trait]
impl FirebaseSdk for RestSdk {
    async fn initialize_app(&self, options: FirebaseOptions) -> Result<FirebaseApp, SdkError> {
        if options.project_id.is_none() {
            return Err(SdkError::ProjectIdMissing);
        }
        Ok(FirebaseApp::new(options))
    }

    fn auth(&self, app: &FirebaseApp) -> FirebaseAuth {
        FirebaseAuth::new(app)
    }

    fn firestore(&self, app: &FirebaseApp) -> FirebaseFirestore {
        FirebaseFirestore::new(app)
    }
}

//! REST-backed service handles.
//!
//! A handle is a configured endpoint: an HTTP client plus the base URL derived
//! from the project configuration. The wire protocols behind those endpoints
//! are the backend's business, not this crate's.

use crate::config::FirebaseOptions;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};

const IDENTITY_TOOLKIT_V1_API: &str = "https://identitytoolkit.googleapis.com/v1";
const FIRESTORE_V1_API: &str =
    "https://firestore.googleapis.com/v1/projects/{project_id}/databases/(default)/documents";

fn service_client() -> ClientWithMiddleware {
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);

    ClientBuilder::new(Client::new())
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build()
}

/// The application handle: the resolved configuration plus the shared HTTP
/// client the service handles are built on.
#[derive(Debug, Clone)]
pub struct FirebaseApp {
    options: FirebaseOptions,
    client: ClientWithMiddleware,
}

impl FirebaseApp {
    pub fn new(options: FirebaseOptions) -> Self {
        Self {
            options,
            client: service_client(),
        }
    }

    pub fn options(&self) -> &FirebaseOptions {
        &self.options
    }

    pub fn project_id(&self) -> Option<&str> {
        self.options.project_id.as_deref()
    }

    pub fn client(&self) -> &ClientWithMiddleware {
        &self.client
    }
}

/// Authentication client handle, pointed at the Identity Toolkit API.
#[derive(Clone)]
pub struct FirebaseAuth {
    client: ClientWithMiddleware,
    base_url: String,
    api_key: Option<String>,
}

impl FirebaseAuth {
    pub fn new(app: &FirebaseApp) -> Self {
        Self {
            client: app.client.clone(),
            base_url: IDENTITY_TOOLKIT_V1_API.to_string(),
            api_key: app.options.api_key.clone(),
        }
    }

    /// Handle with a custom base URL (useful for testing).
    pub fn new_with_url(app: &FirebaseApp, base_url: String) -> Self {
        Self {
            client: app.client.clone(),
            base_url,
            api_key: app.options.api_key.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn client(&self) -> &ClientWithMiddleware {
        &self.client
    }
}

/// Document-store client handle, pointed at the Firestore v1 documents root
/// for the configured project.
#[derive(Clone)]
pub struct FirebaseFirestore {
    client: ClientWithMiddleware,
    base_url: String,
}

impl FirebaseFirestore {
    pub fn new(app: &FirebaseApp) -> Self {
        let project_id = app.options.project_id.clone().unwrap_or_default();
        Self {
            client: app.client.clone(),
            base_url: FIRESTORE_V1_API.replace("{project_id}", &project_id),
        }
    }

    /// Handle with a custom base URL (useful for testing).
    pub fn new_with_url(app: &FirebaseApp, base_url: String) -> Self {
        Self {
            client: app.client.clone(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> &ClientWithMiddleware {
        &self.client
    }
}

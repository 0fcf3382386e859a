use super::*;
use crate::config::FirebaseOptions;
use crate::resolve::{ConfigResolver, ConfigSource};
use crate::sdk::SdkError;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

/// SDK double that counts `initialize_app` calls and optionally rejects them.
struct CountingSdk {
    inits: AtomicUsize,
    fail: bool,
}

impl CountingSdk {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            inits: AtomicUsize::new(0),
            fail,
        })
    }

    fn init_count(&self) -> usize {
        self.inits.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl FirebaseSdk for CountingSdk {
    async fn initialize_app(&self, options: FirebaseOptions) -> Result<FirebaseApp, SdkError> {
        self.inits.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(SdkError::Init("backend rejected the configuration".into()))
        } else {
            Ok(FirebaseApp::new(options))
        }
    }

    fn auth(&self, app: &FirebaseApp) -> FirebaseAuth {
        FirebaseAuth::new(app)
    }

    fn firestore(&self, app: &FirebaseApp) -> FirebaseFirestore {
        FirebaseFirestore::new(app)
    }
}

fn inline_resolver() -> ConfigResolver {
    ConfigResolver::new(vec![ConfigSource::Inline(FirebaseOptions::with_project_id(
        "demo-project",
    ))])
}

fn empty_resolver(dir: &tempfile::TempDir) -> ConfigResolver {
    ConfigResolver::new(vec![ConfigSource::File(dir.path().join("absent.json"))])
}

#[tokio::test]
async fn repeated_calls_return_the_same_bundle() {
    let sdk = CountingSdk::new(false);
    let bootstrap = FirebaseBootstrap::new(inline_resolver(), sdk.clone());

    let first = bootstrap.services().await.unwrap();
    let second = bootstrap.services().await.unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(sdk.init_count(), 1);
    assert_eq!(first.app.project_id(), Some("demo-project"));
}

#[tokio::test]
async fn unconfigured_returns_none_without_initializing() {
    let dir = tempfile::tempdir().unwrap();
    let sdk = CountingSdk::new(false);
    let bootstrap = FirebaseBootstrap::new(empty_resolver(&dir), sdk.clone());

    assert!(bootstrap.services().await.is_none());
    assert!(bootstrap.services().await.is_none());
    assert_eq!(sdk.init_count(), 0);
}

#[tokio::test]
async fn concurrent_first_calls_initialize_once() {
    let sdk = CountingSdk::new(false);
    let bootstrap = FirebaseBootstrap::new(inline_resolver(), sdk.clone());

    let (a, b, c) = tokio::join!(
        bootstrap.services(),
        bootstrap.services(),
        bootstrap.services()
    );

    let (a, b, c) = (a.unwrap(), b.unwrap(), c.unwrap());
    assert!(Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(&b, &c));
    assert_eq!(sdk.init_count(), 1);
}

#[tokio::test]
async fn failed_initialization_is_caught_and_memoized() {
    let sdk = CountingSdk::new(true);
    let bootstrap = FirebaseBootstrap::new(inline_resolver(), sdk.clone());

    assert!(bootstrap.services().await.is_none());
    assert!(bootstrap.services().await.is_none());
    // The failure was observed once and never retried.
    assert_eq!(sdk.init_count(), 1);
}

#[tokio::test]
async fn is_configured_never_initializes() {
    let sdk = CountingSdk::new(false);
    let bootstrap = FirebaseBootstrap::new(inline_resolver(), sdk.clone());

    assert!(bootstrap.is_configured().await);
    assert_eq!(sdk.init_count(), 0);
}

#[tokio::test]
async fn get_services_aliases_services() {
    let sdk = CountingSdk::new(false);
    let bootstrap = FirebaseBootstrap::new(inline_resolver(), sdk.clone());

    let a = bootstrap.get_services().await.unwrap();
    let b = bootstrap.services().await.unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(sdk.init_count(), 1);
}

#[tokio::test]
async fn negative_result_is_terminal_even_if_config_appears_later() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("firebase-config.json");
    let sdk = CountingSdk::new(false);
    let bootstrap = FirebaseBootstrap::new(
        ConfigResolver::new(vec![ConfigSource::File(path.clone())]),
        sdk.clone(),
    );

    assert!(bootstrap.services().await.is_none());

    fs::write(&path, r#"{"projectId":"late"}"#).unwrap();

    // The probe sees the new file, but the cached outcome does not change.
    assert!(bootstrap.is_configured().await);
    assert!(bootstrap.services().await.is_none());
    assert_eq!(sdk.init_count(), 0);
}

#[tokio::test]
async fn bundle_handles_are_derived_from_the_resolved_config() {
    let sdk = CountingSdk::new(false);
    let bootstrap = FirebaseBootstrap::new(inline_resolver(), sdk);

    let services = bootstrap.services().await.unwrap();
    assert!(services.db.base_url().contains("projects/demo-project/"));
    assert_eq!(
        services.auth.base_url(),
        "https://identitytoolkit.googleapis.com/v1"
    );
}

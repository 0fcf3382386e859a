//! Firebase bootstrap for Rust applications: resolve a runtime configuration
//! from an ordered list of sources, initialize the SDK once, and share the
//! resulting service handles for the life of the process.
//!
//! ```rust,ignore
//! use firebase_bootstrap::FirebaseBootstrap;
//!
//! # async fn run() {
//! let bootstrap = FirebaseBootstrap::with_defaults();
//! if let Some(services) = bootstrap.services().await {
//!     let _ = services.db.base_url();
//! }
//! # }
//! ```

pub mod bootstrap;
pub mod config;
pub mod resolve;
pub mod sdk;

pub use bootstrap::{FirebaseBootstrap, FirebaseServices};
pub use config::FirebaseOptions;
pub use resolve::{ConfigResolver, ConfigSource, Probe};
pub use sdk::rest::{FirebaseApp, FirebaseAuth, FirebaseFirestore};
pub use sdk::{FirebaseSdk, RestSdk, SdkError};

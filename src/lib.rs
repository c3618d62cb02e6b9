//! # ferrous-inject
//!
//! Graph-driven dependency injection for Rust. Declare *providers*
//! (injectable services) and *consumers* (top-level handlers), and let the
//! shape of the dependency graph decide which instances are shared.
//!
//! ## Features
//!
//! - **Declarative metadata**: each type states its ordered dependency tokens
//!   and an optional scope through [`Injectable`]
//! - **Inferred sharing**: `Global` providers are built once; everything else
//!   is per-use, and anything that directly depends on a per-use entry
//!   becomes per-use too
//! - **Token indirection**: register a class under a string alias
//! - **Fail-fast configuration errors**: missing providers, cycles and
//!   conflicting declarations surface during bootstrap
//! - **Multi-module composition**: bootstrap several modules into one injector
//!
//! ## Quick Start
//!
//! ```rust
//! use ferrous_inject::{Arguments, DiResult, Injectable, Injector, ModuleDescriptor, Resolver, Scope, Token};
//! use std::sync::Arc;
//!
//! struct Database {
//!     url: String,
//! }
//!
//! impl Injectable for Database {
//!     fn scope() -> Scope { Scope::Global }
//!     fn construct(_: &mut Arguments) -> DiResult<Self> {
//!         Ok(Database { url: "postgres://localhost".to_string() })
//!     }
//! }
//!
//! struct UsersController {
//!     db: Arc<Database>,
//! }
//!
//! impl Injectable for UsersController {
//!     fn dependencies() -> Vec<Token> { vec![Token::of::<Database>()] }
//!     fn construct(args: &mut Arguments) -> DiResult<Self> {
//!         Ok(UsersController { db: args.next()? })
//!     }
//! }
//!
//! let mut injector = Injector::new();
//! injector.bootstrap(
//!     ModuleDescriptor::new("users")
//!         .provide::<Database>()
//!         .consume::<UsersController>(),
//! ).unwrap();
//!
//! let controller = injector.get_required::<UsersController>();
//! assert_eq!(controller.db.url, "postgres://localhost");
//!
//! // Every dependency is global, so the controller is shared too.
//! assert!(Arc::ptr_eq(&controller, &injector.get_required::<UsersController>()));
//! ```
//!
//! ## Scopes
//!
//! - **Global**: constructed once when its provider is resolved and reused
//!   for the injector's lifetime
//! - **Default**: a fresh instance on every lookup; consumers and global
//!   providers that depend on one directly become per-use as well
//!
//! See [`CaptivePolicy`] to keep such global providers global instead.
//!
//! See [`FreshDependencies`] for how per-use entries obtain their own
//! dependencies.

// Module declarations
pub mod config;
pub mod descriptors;
pub mod error;
pub mod key;
pub mod metadata;
pub mod module;
pub mod scope;
pub mod traits;

mod injector;
mod internal;
mod registration;
mod registry;

// Re-export core types
pub use config::{CaptivePolicy, FreshDependencies, InjectorOptions, DEFAULT_MAX_DEPTH};
pub use descriptors::{Constructor, Provider};
pub use error::{DiError, DiResult};
pub use injector::Injector;
pub use key::{token_of, Token};
pub use metadata::{InjectableMetadata, MetadataProvider, ScopeOverrides};
pub use module::{InjectorModule, ModuleDescriptor};
pub use registration::AnyArc;
pub use scope::{FactoryKind, Resolution, Scope};
pub use traits::{Arguments, Injectable, Resolver, ResolverCore};

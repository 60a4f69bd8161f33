//! Key-Value caching and visitor sessions for the Inkorner storefront.
//!
//! Wraps Spin's Key-Value store with typed JSON serialization and builds
//! the session layer on top of it. The storefront keeps each visitor's
//! cart snapshot in a session record addressed by a `sess_`-prefixed ID
//! carried in a cookie.
//!
//! On native targets the store is a process-local map with the same
//! semantics, so everything here runs under plain `cargo test`.
//!
//! # Example
//!
//! ```
//! use ink_cache::{Session, SessionId};
//!
//! let session = Session::<Vec<String>>::with_store("docs")?;
//! let id = SessionId::generate();
//!
//! session.update(&id, |wishlist| {
//!     wishlist.push("encre noire 30ml".to_string());
//! })?;
//!
//! assert_eq!(session.get(&id)?.map(|w| w.len()), Some(1));
//! # Ok::<(), ink_cache::CacheError>(())
//! ```

mod error;
mod kv;
mod session;

pub use error::CacheError;
pub use kv::Cache;
pub use session::{Session, SessionData, SessionId};

//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and
//! a `create_*` convenience function for quick default creation. Dispatchers and servers
//! always need an owner, so create a user first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let dispatcher = factory::create_dispatcher(&db, user.id).await?;
//! let server = factory::server::ServerFactory::new(&db, user.id)
//!     .name("Build Server")
//!     .build()
//!     .await?;
//! ```

pub mod dispatcher;
pub mod helpers;
pub mod server;
pub mod user;

pub use dispatcher::create_dispatcher;
pub use server::create_server;
pub use user::create_user;

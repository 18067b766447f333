//! Orchestrator Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! orchestrator API. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for inserting users, dispatchers and servers
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_dispatcher_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_resource_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let user = factory::create_user(db).await?;
//!     let dispatcher = factory::create_dispatcher(db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

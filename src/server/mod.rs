//! Server-side API backend.
//!
//! This module contains the backend for the dispatcher and server registry: API
//! endpoints, business logic, data access and infrastructure. The backend uses Axum as
//! the web framework, SeaORM for database operations and tower-sessions for reading the
//! authenticated user.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Owner-scoped orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guard
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the handler for the resource kind
//! 2. **Middleware** resolves the principal from the session
//! 3. **Controller** validates input into parameter models, calls service
//! 4. **Service** forwards the principal's ID with every data operation
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

//! Server-side backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including route handlers, business logic, data access, and infrastructure
//! services. The backend uses Axum as the web framework, SeaORM for database
//! operations, and tower-sessions for session management.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Access-control engine, auth guards, and session wrappers
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, setup tokens, config values)
//! - **Startup** (`startup`) - Initialization of database, sessions, and the setup check
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron jobs for automated housekeeping
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Session layer** loads (and later refreshes) the session
//! 2. **Access middleware** classifies the path and applies the access decision
//! 3. **Controller** validates access, converts DTOs to params, calls service
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;

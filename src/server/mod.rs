//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic, data access and serialization. The
//! backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and status mapping
//! - **Service Layer** (`service/`) - Transactions and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, field whitelists and the entity graph
//! - **Serialization** (`serialize`) - Rule-driven conversion of entity graphs to JSON
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection, migrations and app assembly
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Extract** (`extract`) - Request body extractor that defers body errors to the service
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts the body and calls the service
//! 3. **Service** validates the body, opens a transaction and calls repositories
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Service** commits and returns the loaded entity graph
//! 6. **Controller** serializes the graph with exclusion rules and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod model;
pub mod router;
pub mod serialize;
pub mod service;
pub mod startup;
pub mod state;

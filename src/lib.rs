//! # Charsheet Server Library
//!
//! This crate provides a tabletop RPG character sheet server with:
//! - RESTful HTTP API endpoints
//! - A GraphQL endpoint with GraphiQL IDE
//! - PostgreSQL for persistent storage
//! - Swagger UI documentation mounted at `/api`
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core entities and repository traits
//! - **Application Layer**: Business logic services and DTOs
//! - **Infrastructure Layer**: Database and metrics implementations
//! - **Presentation Layer**: HTTP handlers, GraphQL resolvers, middleware
//!
//! ## Module Structure
//!
//! ```text
//! charsheet_server/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities and repository traits
//! +-- application/   Application services and DTOs
//! +-- infrastructure/ Database and metrics implementations
//! +-- presentation/  HTTP routes, GraphQL, middleware, OpenAPI
//! +-- shared/        Common utilities (errors, prefixed IDs)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core entities
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP and GraphQL handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;

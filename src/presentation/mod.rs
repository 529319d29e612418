//! Presentation Layer
//!
//! HTTP routes, GraphQL surface, OpenAPI documentation, and middleware.

pub mod graphql;
pub mod http;
pub mod middleware;
pub mod openapi;

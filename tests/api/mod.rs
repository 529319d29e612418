//! HTTP endpoint tests.

mod auth_tests;
mod character_tests;
mod graphql_tests;
mod health_tests;

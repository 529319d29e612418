//! GraphQL Surface
//!
//! Schema, object types, and resolvers for the `/graphql` endpoint,
//! plus the GraphiQL IDE served on GET.

pub mod resolvers;
pub mod schema;
pub mod types;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    response::{Html, IntoResponse},
    Extension,
};

pub use schema::{create_schema, CharsheetSchema, GraphQLContext};

/// GraphiQL IDE endpoint
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// GraphQL endpoint handler
pub async fn graphql_handler(
    Extension(schema): Extension<CharsheetSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

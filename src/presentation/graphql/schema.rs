//! GraphQL schema assembly.

use async_graphql::{EmptySubscription, Schema};
use sqlx::PgPool;

use crate::presentation::graphql::resolvers::{Mutation, Query};

/// GraphQL context containing shared application state
pub struct GraphQLContext {
    pub db: PgPool,
}

/// The complete GraphQL schema
pub type CharsheetSchema = Schema<Query, Mutation, EmptySubscription>;

/// Create a new GraphQL schema backed by the given database pool
pub fn create_schema(db: PgPool) -> CharsheetSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(GraphQLContext { db })
        .finish()
}

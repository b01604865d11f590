use async_graphql::*;

use schema::*;

use crate::state::AppState;

pub mod error;
pub mod guard;
pub mod schema;

#[cfg(test)]
mod resolver_tests;

pub use error::ApiError;
pub use guard::{AuthGuard, require_user};

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn create_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

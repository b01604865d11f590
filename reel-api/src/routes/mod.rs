pub mod graphql;
pub mod health;


use salvo::prelude::*;

pub use health::*;

use crate::graphql::AppSchema;
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router(state: AppState, schema: AppSchema) -> Router {
    Router::new()
        .hoop(affix_state::inject(state))
        .push(Router::with_path("health").get(health_check))
        .push(
            Router::with_path("graphql")
                .hoop(affix_state::inject(schema))
                .get(graphql::graphiql)
                .post(graphql::graphql_handler),
        )
}

use async_graphql::http::GraphiQLSource;
use salvo::http::header::AUTHORIZATION;
use salvo::prelude::*;
use tracing::{error, warn};

use crate::graphql::AppSchema;
use crate::state::{AppContext, AppState, UserContext};

/// Extracts the token from an `Authorization` header value.
/// Both the `JWT` and `Bearer` schemes are accepted.
pub fn bearer_token(value: &str) -> Option<&str> {
    value
        .strip_prefix("JWT ")
        .or_else(|| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolves the caller from the request headers. A missing, malformed or
/// rejected token leaves the request anonymous.
async fn resolve_user(req: &Request, state: &AppState) -> Option<UserContext> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token)?;

    match state.services.auth.authenticate(token).await {
        Ok(user) => Some(UserContext {
            user_id: user.user_id,
            username: user.username,
        }),
        Err(e) => {
            warn!("GraphQL auth token rejected: {}", e);
            None
        }
    }
}

#[handler]
pub async fn graphql_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let (Ok(schema), Ok(state)) = (depot.obtain::<AppSchema>(), depot.obtain::<AppState>()) else {
        error!("GraphQL handler mounted without schema or state");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    };
    let schema = schema.clone();
    let state = state.clone();

    let gql_request: async_graphql::Request = match req.parse_json().await {
        Ok(r) => r,
        Err(_) => {
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Text::Plain("Invalid GraphQL request body"));
            return;
        }
    };

    let user_context = resolve_user(req, &state).await;
    let response = schema
        .execute(gql_request.data(AppContext::new(user_context)))
        .await;

    res.render(Json(response));
}

#[handler]
pub async fn graphiql(res: &mut Response) {
    res.render(Text::Html(
        GraphiQLSource::build().endpoint("/graphql").finish(),
    ));
}

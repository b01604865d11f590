use crate::graphql::error::ApiError;
use crate::state::{AppContext, UserContext};
use async_graphql::{Context, ErrorExtensions, Guard, Result};

/// Precondition for protected resolvers: the request must carry an
/// authenticated identity. A request without an `AppContext` is anonymous.
pub fn require_user(ctx: &Context<'_>) -> std::result::Result<UserContext, ApiError> {
    ctx.data_opt::<AppContext>()
        .and_then(AppContext::user_context)
        .ok_or(ApiError::PermissionDenied)
}

/// Field guard wrapping [`require_user`]; runs before the resolver body.
pub struct AuthGuard;

impl Guard for AuthGuard {
    async fn check(&self, ctx: &Context<'_>) -> Result<()> {
        require_user(ctx).map(|_| ()).map_err(|e| e.extend())
    }
}

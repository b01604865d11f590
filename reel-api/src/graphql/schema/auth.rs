use async_graphql::*;
use reel_auth::utils::models::{IssuedToken, TokenPayload};

use crate::graphql::error::gql_error;
use crate::state::AppState;

#[derive(SimpleObject)]
#[graphql(name = "ObtainJSONWebToken")]
pub struct ObtainJsonWebToken {
    pub payload: Json<TokenPayload>,
    pub refresh_expires_in: i64,
    pub token: String,
}

#[derive(SimpleObject)]
#[graphql(name = "Verify")]
pub struct VerifyPayload {
    pub payload: Json<TokenPayload>,
}

#[derive(SimpleObject)]
#[graphql(name = "Refresh")]
pub struct RefreshPayload {
    pub payload: Json<TokenPayload>,
    pub refresh_expires_in: i64,
    pub token: String,
}

impl From<IssuedToken> for ObtainJsonWebToken {
    fn from(issued: IssuedToken) -> Self {
        Self {
            payload: Json(issued.payload),
            refresh_expires_in: issued.refresh_expires_in,
            token: issued.token,
        }
    }
}

impl From<IssuedToken> for RefreshPayload {
    fn from(issued: IssuedToken) -> Self {
        Self {
            payload: Json(issued.payload),
            refresh_expires_in: issued.refresh_expires_in,
            token: issued.token,
        }
    }
}

/// Token mutations. All logic lives in the auth provider.
#[derive(Default)]
pub struct AuthMutation;

#[Object]
impl AuthMutation {
    async fn token_auth(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> Result<Option<ObtainJsonWebToken>> {
        let state = ctx.data::<AppState>()?;
        let issued = state
            .services
            .auth
            .token_auth(&username, &password)
            .await
            .map_err(gql_error)?;
        Ok(Some(issued.into()))
    }

    async fn verify_token(&self, ctx: &Context<'_>, token: String) -> Result<Option<VerifyPayload>> {
        let state = ctx.data::<AppState>()?;
        let payload = state
            .services
            .auth
            .verify_token(&token)
            .await
            .map_err(gql_error)?;
        Ok(Some(VerifyPayload {
            payload: Json(payload),
        }))
    }

    async fn refresh_token(
        &self,
        ctx: &Context<'_>,
        token: String,
    ) -> Result<Option<RefreshPayload>> {
        let state = ctx.data::<AppState>()?;
        let issued = state
            .services
            .auth
            .refresh_token(&token)
            .await
            .map_err(gql_error)?;
        Ok(Some(issued.into()))
    }
}

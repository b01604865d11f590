use async_graphql::*;

use crate::graphql::error::{ApiError, gql_error};
use crate::graphql::schema::movie::MovieType;
use crate::models::domain::{CreateDirector, Director, UpdateDirector};
use crate::state::AppState;

/// External shape of a director, including the derived `fullname`.
pub struct DirectorType(Director);

impl From<Director> for DirectorType {
    fn from(director: Director) -> Self {
        Self(director)
    }
}

#[Object(name = "DirectorType")]
impl DirectorType {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn first_name(&self) -> &str {
        &self.0.first_name
    }

    async fn last_name(&self) -> &str {
        &self.0.last_name
    }

    async fn fullname(&self) -> String {
        self.0.full_name()
    }

    /// Movies attributed to this director.
    async fn movie_set(&self, ctx: &Context<'_>) -> Result<Vec<MovieType>> {
        let state = ctx.data::<AppState>()?;
        let movies = state
            .services
            .movies
            .movies_by_director(self.0.id)
            .await
            .map_err(gql_error)?;
        Ok(movies.into_iter().map(MovieType::from).collect())
    }
}

#[derive(SimpleObject)]
#[graphql(name = "DirectorCreateMutation")]
pub struct DirectorCreatePayload {
    pub director: Option<DirectorType>,
}

#[derive(SimpleObject)]
#[graphql(name = "DirectorUpdateMutation")]
pub struct DirectorUpdatePayload {
    pub director: Option<DirectorType>,
}

/// Always carries `director: null`; there is nothing left to describe.
#[derive(SimpleObject)]
#[graphql(name = "DirectorDeleteMutation")]
pub struct DirectorDeletePayload {
    pub director: Option<DirectorType>,
}

fn parse_id(id: &ID) -> Result<i32> {
    id.parse::<i32>().map_err(|_| {
        gql_error(ApiError::InvalidInput(format!(
            "Field 'id' expected a number but got '{}'.",
            id.as_str()
        )))
    })
}

// Root fields return `Option` so a failing field nulls only itself.

#[derive(Default)]
pub struct DirectorQuery;

#[Object]
impl DirectorQuery {
    /// Every director, in store order.
    async fn all_directors(&self, ctx: &Context<'_>) -> Result<Option<Vec<DirectorType>>> {
        let state = ctx.data::<AppState>()?;
        let directors = state
            .services
            .directors
            .list_directors()
            .await
            .map_err(gql_error)?;
        Ok(Some(directors.into_iter().map(DirectorType::from).collect()))
    }

    /// A single director; `null` when no `id` is given.
    async fn director_detail(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> Result<Option<DirectorType>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let state = ctx.data::<AppState>()?;
        let director = state
            .services
            .directors
            .get_director(id)
            .await
            .map_err(gql_error)?;
        Ok(Some(director.into()))
    }
}

#[derive(Default)]
pub struct DirectorMutation;

#[Object]
impl DirectorMutation {
    async fn create_director(
        &self,
        ctx: &Context<'_>,
        first_name: String,
        last_name: String,
    ) -> Result<Option<DirectorCreatePayload>> {
        let state = ctx.data::<AppState>()?;
        let director = state
            .services
            .directors
            .create_director(CreateDirector {
                first_name,
                last_name,
            })
            .await
            .map_err(gql_error)?;
        Ok(Some(DirectorCreatePayload {
            director: Some(director.into()),
        }))
    }

    /// Patches a director. An omitted or `null` name keeps its stored value.
    async fn update_director(
        &self,
        ctx: &Context<'_>,
        id: ID,
        first_name: MaybeUndefined<String>,
        last_name: MaybeUndefined<String>,
    ) -> Result<Option<DirectorUpdatePayload>> {
        let id = parse_id(&id)?;
        let update = UpdateDirector {
            first_name: first_name.take(),
            last_name: last_name.take(),
        };

        let state = ctx.data::<AppState>()?;
        let director = state
            .services
            .directors
            .update_director(id, update)
            .await
            .map_err(gql_error)?;
        Ok(Some(DirectorUpdatePayload {
            director: Some(director.into()),
        }))
    }

    async fn delete_director(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> Result<Option<DirectorDeletePayload>> {
        let id = parse_id(&id)?;

        let state = ctx.data::<AppState>()?;
        state
            .services
            .directors
            .delete_director(id)
            .await
            .map_err(gql_error)?;
        Ok(Some(DirectorDeletePayload { director: None }))
    }
}

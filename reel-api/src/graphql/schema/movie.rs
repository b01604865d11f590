use async_graphql::*;

use crate::graphql::AuthGuard;
use crate::graphql::error::gql_error;
use crate::graphql::schema::director::DirectorType;
use crate::models::domain::Movie;
use crate::services::DirectorError;
use crate::state::AppState;

pub struct MovieType(Movie);

impl From<Movie> for MovieType {
    fn from(movie: Movie) -> Self {
        Self(movie)
    }
}

#[Object(name = "MovieType")]
impl MovieType {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn year(&self) -> i32 {
        self.0.year
    }

    async fn director(&self, ctx: &Context<'_>) -> Result<Option<DirectorType>> {
        let Some(director_id) = self.0.director_id else {
            return Ok(None);
        };

        let state = ctx.data::<AppState>()?;
        match state.services.directors.get_director(director_id).await {
            Ok(director) => Ok(Some(director.into())),
            Err(DirectorError::NotFound) => Ok(None),
            Err(e) => Err(gql_error(e)),
        }
    }
}

#[derive(Default)]
pub struct MovieQuery;

#[Object]
impl MovieQuery {
    /// Every movie, in store order. Requires an authenticated caller.
    #[graphql(guard = "AuthGuard")]
    async fn all_movies(&self, ctx: &Context<'_>) -> Result<Option<Vec<MovieType>>> {
        let state = ctx.data::<AppState>()?;
        let movies = state
            .services
            .movies
            .list_movies()
            .await
            .map_err(gql_error)?;
        Ok(Some(movies.into_iter().map(MovieType::from).collect()))
    }

    /// A single movie by `id`, or by `title` when no `id` is given.
    /// `id` wins when both are supplied; `null` when neither is.
    async fn movie_detail(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
        title: Option<String>,
    ) -> Result<Option<MovieType>> {
        let state = ctx.data::<AppState>()?;
        let movies = &state.services.movies;

        let movie = match (id, title) {
            (Some(id), _) => movies.get_movie(id).await,
            (None, Some(title)) => movies.get_movie_by_title(&title).await,
            (None, None) => return Ok(None),
        };

        movie.map(|m| Some(m.into())).map_err(gql_error)
    }
}

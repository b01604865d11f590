use std::sync::Arc;

use sea_orm::DbErr;
use thiserror::Error;
use tracing::debug;

use crate::models::domain::Movie;
use crate::repositories::MovieRepository;

#[async_trait::async_trait]
pub trait MovieService: Send + Sync + std::fmt::Debug {
    /// Every movie, in store order
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError>;

    /// A single movie by ID
    async fn get_movie(&self, id: i32) -> Result<Movie, MovieError>;

    /// A single movie by exact title
    async fn get_movie_by_title(&self, title: &str) -> Result<Movie, MovieError>;

    /// Movies attributed to a director
    async fn movies_by_director(&self, director_id: i32) -> Result<Vec<Movie>, MovieError>;
}

#[derive(Debug)]
pub struct LocalMovieService {
    movie_repo: Arc<dyn MovieRepository>,
}

impl LocalMovieService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        LocalMovieService { movie_repo }
    }
}

#[async_trait::async_trait]
impl MovieService for LocalMovieService {
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError> {
        Ok(self.movie_repo.find_all().await?)
    }

    async fn get_movie(&self, id: i32) -> Result<Movie, MovieError> {
        debug!("Looking up movie {}", id);
        self.movie_repo
            .find_by_id(id)
            .await?
            .ok_or(MovieError::NotFound)
    }

    async fn get_movie_by_title(&self, title: &str) -> Result<Movie, MovieError> {
        debug!("Looking up movie titled {:?}", title);
        self.movie_repo
            .find_by_title(title)
            .await?
            .ok_or(MovieError::NotFound)
    }

    async fn movies_by_director(&self, director_id: i32) -> Result<Vec<Movie>, MovieError> {
        Ok(self.movie_repo.find_by_director(director_id).await?)
    }
}

#[derive(Debug, Error)]
pub enum MovieError {
    #[error("Movie matching query does not exist.")]
    NotFound,
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}

#[cfg(test)]
#[path = "movie_tests.rs"]
mod movie_tests;

use sea_orm::DatabaseConnection;
use std::ops::Deref;
use std::sync::Arc;

use reel_auth::utils::{
    repository::{SqlUserRepository, UserRepository},
    service::{AuthService, LocalAuthService},
};

use crate::{
    config::ServerConfig,
    repositories::{SqlDirectorRepository, SqlMovieRepository},
    services::{DirectorService, LocalDirectorService, LocalMovieService, MovieService},
};

#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
pub struct AppStateInner {
    pub config: ServerConfig,
    pub services: AppServices,
}

impl AppState {
    pub fn new(config: ServerConfig, services: AppServices) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, services }),
        }
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Identity of the caller, present only when the request carried a valid token.
#[derive(Clone, Debug)]
pub struct UserContext {
    pub user_id: i32,
    pub username: String,
}

#[derive(Clone, Debug)]
pub struct AppContextInner {
    pub user_context: Option<UserContext>,
}

/// Per-request data attached to every GraphQL execution.
pub struct AppContext(Arc<AppContextInner>);

impl AppContext {
    pub fn new(user_context: Option<UserContext>) -> Self {
        Self(Arc::new(AppContextInner { user_context }))
    }

    pub fn user_context(&self) -> Option<UserContext> {
        self.0.user_context.clone()
    }
}

#[derive(Debug)]
pub struct AppServices {
    pub auth: Arc<dyn AuthService>,
    pub directors: Arc<dyn DirectorService>,
    pub movies: Arc<dyn MovieService>,
}

impl AppServices {
    pub fn new(config: &ServerConfig, db: DatabaseConnection) -> Self {
        let user_repo: Arc<dyn UserRepository> = Arc::new(SqlUserRepository::new(db.clone()));
        let director_repo = Arc::new(SqlDirectorRepository::new(db.clone()));
        let movie_repo = Arc::new(SqlMovieRepository::new(db));

        Self {
            auth: Arc::new(LocalAuthService::new(user_repo, config.jwt.clone())),
            directors: Arc::new(LocalDirectorService::new(director_repo)),
            movies: Arc::new(LocalMovieService::new(movie_repo)),
        }
    }
}

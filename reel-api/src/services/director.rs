use std::sync::Arc;

use sea_orm::DbErr;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::domain::{CreateDirector, Director, MAX_NAME_LEN, UpdateDirector};
use crate::repositories::DirectorRepository;

#[async_trait::async_trait]
pub trait DirectorService: Send + Sync + std::fmt::Debug {
    /// Every director, in store order
    async fn list_directors(&self) -> Result<Vec<Director>, DirectorError>;

    /// A single director by ID
    async fn get_director(&self, id: i32) -> Result<Director, DirectorError>;

    async fn create_director(&self, create: CreateDirector) -> Result<Director, DirectorError>;

    /// Applies the supplied fields to an existing director and saves it
    async fn update_director(
        &self,
        id: i32,
        update: UpdateDirector,
    ) -> Result<Director, DirectorError>;

    /// Deletes a director together with its movies
    async fn delete_director(&self, id: i32) -> Result<(), DirectorError>;
}

#[derive(Debug)]
pub struct LocalDirectorService {
    director_repo: Arc<dyn DirectorRepository>,
}

impl LocalDirectorService {
    pub fn new(director_repo: Arc<dyn DirectorRepository>) -> Self {
        LocalDirectorService { director_repo }
    }
}

fn validate_name(name: &str) -> Result<(), DirectorError> {
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(DirectorError::Validation(format!(
            "Ensure this value has at most {MAX_NAME_LEN} characters (it has {len})."
        )));
    }
    Ok(())
}

#[async_trait::async_trait]
impl DirectorService for LocalDirectorService {
    async fn list_directors(&self) -> Result<Vec<Director>, DirectorError> {
        Ok(self.director_repo.find_all().await?)
    }

    async fn get_director(&self, id: i32) -> Result<Director, DirectorError> {
        debug!("Looking up director {}", id);
        self.director_repo
            .find_by_id(id)
            .await?
            .ok_or(DirectorError::NotFound)
    }

    async fn create_director(&self, create: CreateDirector) -> Result<Director, DirectorError> {
        validate_name(&create.first_name)?;
        validate_name(&create.last_name)?;

        let director = self.director_repo.create(create).await?;
        info!("Created director {} ({})", director.full_name(), director.id);
        Ok(director)
    }

    async fn update_director(
        &self,
        id: i32,
        update: UpdateDirector,
    ) -> Result<Director, DirectorError> {
        if let Some(first_name) = &update.first_name {
            validate_name(first_name)?;
        }
        if let Some(last_name) = &update.last_name {
            validate_name(last_name)?;
        }

        let mut director = self
            .director_repo
            .find_by_id(id)
            .await?
            .ok_or(DirectorError::NotFound)?;

        update.apply(&mut director);

        let director = self.director_repo.update(director).await?;
        info!("Updated director {}", director.id);
        Ok(director)
    }

    async fn delete_director(&self, id: i32) -> Result<(), DirectorError> {
        let director = self
            .director_repo
            .find_by_id(id)
            .await?
            .ok_or(DirectorError::NotFound)?;

        self.director_repo.delete(director.id).await?;
        info!("Deleted director {} ({})", director.full_name(), director.id);
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum DirectorError {
    #[error("Director matching query does not exist.")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("Database error: {0}")]
    Db(DbErr),
}

impl From<DbErr> for DirectorError {
    fn from(e: DbErr) -> Self {
        match e {
            // Row vanished between the read and the write
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => DirectorError::NotFound,
            other => DirectorError::Db(other),
        }
    }
}

#[cfg(test)]
#[path = "director_tests.rs"]
mod director_tests;

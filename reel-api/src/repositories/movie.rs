use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::models::domain::Movie;

/// Repository for movie lookups. Movies are never written through this API.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync + std::fmt::Debug {
    async fn find_all(&self) -> Result<Vec<Movie>, DbErr>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, DbErr>;
    /// Exact title match; the lowest id wins when titles repeat.
    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, DbErr>;
    async fn find_by_director(&self, director_id: i32) -> Result<Vec<Movie>, DbErr>;
}

/// SQL-based implementation of the MovieRepository trait.
#[derive(Debug, Clone)]
pub struct SqlMovieRepository {
    db: DatabaseConnection,
}

impl SqlMovieRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for SqlMovieRepository {
    async fn find_all(&self) -> Result<Vec<Movie>, DbErr> {
        use reel_entity::movie;
        use sea_orm::{EntityTrait, QueryOrder};

        let models = movie::Entity::find()
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Movie::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, DbErr> {
        use reel_entity::movie;
        use sea_orm::EntityTrait;

        let model = movie::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Movie::from))
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, DbErr> {
        use reel_entity::movie;
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

        let model = movie::Entity::find()
            .filter(movie::Column::Title.eq(title))
            .order_by_asc(movie::Column::Id)
            .one(&self.db)
            .await?;

        Ok(model.map(Movie::from))
    }

    async fn find_by_director(&self, director_id: i32) -> Result<Vec<Movie>, DbErr> {
        use reel_entity::movie;
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

        let models = movie::Entity::find()
            .filter(movie::Column::DirectorId.eq(director_id))
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Movie::from).collect())
    }
}

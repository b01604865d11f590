use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::models::domain::{CreateDirector, Director};

/// Repository for director persistence operations.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait DirectorRepository: Send + Sync + std::fmt::Debug {
    async fn find_all(&self) -> Result<Vec<Director>, DbErr>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Director>, DbErr>;
    async fn create(&self, create: CreateDirector) -> Result<Director, DbErr>;
    /// Writes every column of an existing director.
    async fn update(&self, director: Director) -> Result<Director, DbErr>;
    /// Removes the director; the store cascades the delete to its movies.
    /// Returns the number of director rows removed.
    async fn delete(&self, id: i32) -> Result<u64, DbErr>;
}

#[derive(Debug, Clone)]
pub struct SqlDirectorRepository {
    db: DatabaseConnection,
}

impl SqlDirectorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DirectorRepository for SqlDirectorRepository {
    async fn find_all(&self) -> Result<Vec<Director>, DbErr> {
        use reel_entity::director;
        use sea_orm::{EntityTrait, QueryOrder};

        let models = director::Entity::find()
            .order_by_asc(director::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Director::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Director>, DbErr> {
        use reel_entity::director;
        use sea_orm::EntityTrait;

        let model = director::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Director::from))
    }

    async fn create(&self, create: CreateDirector) -> Result<Director, DbErr> {
        use reel_entity::director;
        use sea_orm::{ActiveModelTrait, Set};

        let new_director = director::ActiveModel {
            first_name: Set(create.first_name),
            last_name: Set(create.last_name),
            ..Default::default()
        };

        let result = new_director.insert(&self.db).await?;
        Ok(Director::from(result))
    }

    async fn update(&self, director: Director) -> Result<Director, DbErr> {
        use reel_entity::director as entity;
        use sea_orm::ActiveValue::{Set, Unchanged};
        use sea_orm::ActiveModelTrait;

        let model = entity::ActiveModel {
            id: Unchanged(director.id),
            first_name: Set(director.first_name),
            last_name: Set(director.last_name),
        };

        let result = model.update(&self.db).await?;
        Ok(Director::from(result))
    }

    async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        use reel_entity::director;
        use sea_orm::EntityTrait;

        let result = director::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

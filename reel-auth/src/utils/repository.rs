use async_trait::async_trait;
use sea_orm::*;

use crate::utils::models::{CreateUser, User};

/// Repository for managing user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug {
    /// Finds a user by their username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr>;

    /// Creates a new user in the database.
    async fn create(&self, user: CreateUser) -> Result<User, DbErr>;
}

#[derive(Debug)]
pub struct SqlUserRepository {
    db: DatabaseConnection,
}

impl SqlUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        use reel_entity::user;
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;
        Ok(model.map(User::from))
    }

    async fn create(&self, create: CreateUser) -> Result<User, DbErr> {
        use chrono::Utc;
        use reel_entity::user;
        use sea_orm::{ActiveModelTrait, Set};

        let CreateUser {
            username,
            password_hash,
            is_active,
        } = create;

        let new_user = user::ActiveModel {
            username: Set(username),
            password_hash: Set(password_hash),
            is_active: Set(is_active),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let result = new_user.insert(&self.db).await?;
        Ok(User::from(result))
    }
}

/// In-memory user repository for use in tests and offline scenarios.
#[cfg(any(test, feature = "test-utils"))]
pub mod in_memory {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    pub struct InMemoryUserRepository {
        users: Mutex<BTreeMap<i32, User>>,
    }

    impl InMemoryUserRepository {
        /// Flips the active flag of an existing user.
        pub fn set_active(&self, id: i32, is_active: bool) {
            if let Some(user) = self.users.lock().unwrap().get_mut(&id) {
                user.is_active = is_active;
            }
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
            let users = self.users.lock().unwrap();
            Ok(users.values().find(|u| u.username == username).cloned())
        }

        async fn create(&self, user: CreateUser) -> Result<User, DbErr> {
            let mut users = self.users.lock().unwrap();
            let id = users.keys().next_back().map_or(1, |last| last + 1);
            let new_user = User {
                id,
                username: user.username,
                password_hash: user.password_hash,
                is_active: user.is_active,
                created_at: Utc::now(),
            };
            users.insert(id, new_user.clone());
            Ok(new_user)
        }
    }
}

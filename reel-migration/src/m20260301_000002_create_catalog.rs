use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            "CREATE TABLE directors (
                id SERIAL PRIMARY KEY,
                first_name VARCHAR(32) NOT NULL,
                last_name VARCHAR(32) NOT NULL
            )",
        )
        .await?;

        // Removing a director removes its movies; the resolvers never cascade by hand.
        db.execute_unprepared(
            "CREATE TABLE movies (
                id SERIAL PRIMARY KEY,
                title VARCHAR(32) NOT NULL,
                year INTEGER NOT NULL DEFAULT 2000,
                director_id INTEGER NULL REFERENCES directors (id) ON DELETE CASCADE
            )",
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared("DROP TABLE IF EXISTS movies").await?;
        db.execute_unprepared("DROP TABLE IF EXISTS directors").await?;

        Ok(())
    }
}

//! In-memory store shared by the director and movie repositories in tests.
//!
//! Both repositories point at one [`InMemoryCatalog`] so that the foreign-key
//! rules of the SQL schema (movies reference existing directors, deleting a
//! director deletes its movies) hold here too.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use sea_orm::DbErr;

use super::{DirectorRepository, MovieRepository};
use crate::models::domain::{CreateDirector, DEFAULT_MOVIE_YEAR, Director, Movie};

#[derive(Debug, Default)]
struct Tables {
    directors: BTreeMap<i32, Director>,
    movies: BTreeMap<i32, Movie>,
    last_director_id: i32,
    last_movie_id: i32,
}

#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    tables: RwLock<Tables>,
}

impl InMemoryCatalog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn insert_director(&self, first_name: &str, last_name: &str) -> Director {
        let mut tables = self.tables.write();
        tables.last_director_id += 1;
        let director = Director {
            id: tables.last_director_id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        tables.directors.insert(director.id, director.clone());
        director
    }

    /// Inserts a movie the way the SQL schema would: `year` falls back to the
    /// column default and `director_id` must reference an existing director.
    pub fn insert_movie(
        &self,
        title: &str,
        year: Option<i32>,
        director_id: Option<i32>,
    ) -> Result<Movie, DbErr> {
        let mut tables = self.tables.write();
        if let Some(id) = director_id.filter(|id| !tables.directors.contains_key(id)) {
            return Err(DbErr::Custom(format!(
                "insert or update on table \"movies\" violates foreign key constraint: director {id} does not exist"
            )));
        }

        tables.last_movie_id += 1;
        let movie = Movie {
            id: tables.last_movie_id,
            title: title.to_string(),
            year: year.unwrap_or(DEFAULT_MOVIE_YEAR),
            director_id,
        };
        tables.movies.insert(movie.id, movie.clone());
        Ok(movie)
    }

    pub fn director(&self, id: i32) -> Option<Director> {
        self.tables.read().directors.get(&id).cloned()
    }

    pub fn movie(&self, id: i32) -> Option<Movie> {
        self.tables.read().movies.get(&id).cloned()
    }

    pub fn director_count(&self) -> usize {
        self.tables.read().directors.len()
    }

    pub fn movie_count(&self) -> usize {
        self.tables.read().movies.len()
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryDirectorRepository {
    catalog: Arc<InMemoryCatalog>,
}

impl InMemoryDirectorRepository {
    pub fn new(catalog: Arc<InMemoryCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl DirectorRepository for InMemoryDirectorRepository {
    async fn find_all(&self) -> Result<Vec<Director>, DbErr> {
        Ok(self.catalog.tables.read().directors.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Director>, DbErr> {
        Ok(self.catalog.director(id))
    }

    async fn create(&self, create: CreateDirector) -> Result<Director, DbErr> {
        Ok(self
            .catalog
            .insert_director(&create.first_name, &create.last_name))
    }

    async fn update(&self, director: Director) -> Result<Director, DbErr> {
        let mut tables = self.catalog.tables.write();
        match tables.directors.get_mut(&director.id) {
            Some(stored) => {
                *stored = director.clone();
                Ok(director)
            }
            None => Err(DbErr::RecordNotUpdated),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let mut tables = self.catalog.tables.write();
        if tables.directors.remove(&id).is_none() {
            return Ok(0);
        }
        // ON DELETE CASCADE
        tables.movies.retain(|_, movie| movie.director_id != Some(id));
        Ok(1)
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryMovieRepository {
    catalog: Arc<InMemoryCatalog>,
}

impl InMemoryMovieRepository {
    pub fn new(catalog: Arc<InMemoryCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn find_all(&self) -> Result<Vec<Movie>, DbErr> {
        Ok(self.catalog.tables.read().movies.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, DbErr> {
        Ok(self.catalog.movie(id))
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, DbErr> {
        let tables = self.catalog.tables.read();
        Ok(tables.movies.values().find(|m| m.title == title).cloned())
    }

    async fn find_by_director(&self, director_id: i32) -> Result<Vec<Movie>, DbErr> {
        let tables = self.catalog.tables.read();
        Ok(tables
            .movies
            .values()
            .filter(|m| m.director_id == Some(director_id))
            .cloned()
            .collect())
    }
}

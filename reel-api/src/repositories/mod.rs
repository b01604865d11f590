pub mod director;
pub mod movie;

#[cfg(any(test, feature = "test-utils"))]
pub mod in_memory;

pub use director::{DirectorRepository, SqlDirectorRepository};
pub use movie::{MovieRepository, SqlMovieRepository};

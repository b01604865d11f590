pub mod director;
pub mod movie;

pub use director::{DirectorError, DirectorService, LocalDirectorService};
pub use movie::{LocalMovieService, MovieError, MovieService};

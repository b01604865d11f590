/// Year assigned by the store when a movie is inserted without one.
pub const DEFAULT_MOVIE_YEAR: i32 = 2000;

/// A movie, optionally attributed to one director
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub director_id: Option<i32>,
}

impl From<reel_entity::movie::Model> for Movie {
    fn from(model: reel_entity::movie::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            year: model.year,
            director_id: model.director_id,
        }
    }
}

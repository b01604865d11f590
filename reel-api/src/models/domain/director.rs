/// Longest first or last name the store accepts.
pub const MAX_NAME_LEN: usize = 32;

/// A film director
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Director {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl Director {
    /// First and last name joined by a single space. Never stored.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Parameters for creating a director
#[derive(Debug, Clone)]
pub struct CreateDirector {
    pub first_name: String,
    pub last_name: String,
}

/// Partial update of a director. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateDirector {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateDirector {
    /// Overwrites only the fields that were supplied.
    pub fn apply(self, director: &mut Director) {
        if let Some(first_name) = self.first_name {
            director.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            director.last_name = last_name;
        }
    }
}

impl From<reel_entity::director::Model> for Director {
    fn from(model: reel_entity::director::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
        }
    }
}

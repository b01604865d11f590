pub mod director;
pub mod movie;
pub mod user;

pub mod prelude {
    pub use super::director::Entity as Director;
    pub use super::movie::Entity as Movie;
    pub use super::user::Entity as User;
}

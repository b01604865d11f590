pub mod director;
pub mod movie;

pub use director::*;
pub use movie::*;

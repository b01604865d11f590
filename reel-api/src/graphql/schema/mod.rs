use async_graphql::*;

use auth::AuthMutation;
use director::{DirectorMutation, DirectorQuery};
use movie::MovieQuery;

pub mod auth;
pub mod director;
pub mod movie;

#[derive(MergedObject, Default)]
pub struct QueryRoot(MovieQuery, DirectorQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(AuthMutation, DirectorMutation);

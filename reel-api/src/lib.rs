pub mod config;
pub mod graphql;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_support;

//! Export GraphQL schema to a file for code generation

use async_graphql::{EmptySubscription, Schema};
use eyre::Result;
use reel_api::graphql::schema::{MutationRoot, QueryRoot};
use std::fs;

fn main() -> Result<()> {
    // Build schema from type definitions only - no runtime services needed
    let schema = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .finish();

    let sdl = schema.sdl();

    let output_path = "schema.graphql";
    fs::write(output_path, &sdl)?;

    println!("GraphQL schema exported to: {output_path}");

    Ok(())
}

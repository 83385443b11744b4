// Composition root for the training bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the store and wire it into use case handlers.
// - Expose the HTTP router and the GraphQL read schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

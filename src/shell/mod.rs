// Composition root for the activities service.
//
// Responsibilities
// - Read config from the environment.
// - Build the roster store and wire it into the use case handlers.
// - Expose the REST, GraphQL and static routes on one router.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

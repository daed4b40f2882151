// Composition root: configuration, state wiring and the inbound surfaces.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

//! Star Wars people, planets and user favorites served over HTTP.

pub mod model;
pub mod server;

//! Side-effecting host operations: filesystem facade, tree listing, config.

pub mod config;
pub mod fs;
pub mod lister;

pub mod collision;
pub mod config;
pub mod prelude;
pub mod schedule;
pub mod shape;

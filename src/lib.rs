//! HTTP API over a SQLite dataset of cricket players, matches and per-match scores.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use routes::router;

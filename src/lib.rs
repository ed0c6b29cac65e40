pub mod config;
pub mod db;
pub mod game;
pub mod server;
pub mod telemetry;

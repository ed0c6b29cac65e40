pub mod app;
mod deserializers;
pub mod error;
pub mod extract;
mod routes;

pub mod bulk;
pub mod config;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod requests;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;

//! Zenithview domain types.
//!
//! Pure, I/O-free building blocks shared by the database layer, the mail
//! crate, the HTTP server and the admin dashboard controller.

pub mod application;
pub mod case_studies;
pub mod error;
pub mod html;
pub mod types;

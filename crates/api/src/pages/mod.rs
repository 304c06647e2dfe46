//! Server-rendered HTML for the public portfolio.
//!
//! Every dynamic value goes through [`zenith_core::html::escape`].

pub mod case_study;
pub mod layout;

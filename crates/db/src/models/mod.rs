//! Row structs for the `applications` table.
//!
//! Rows are decoded as-is and converted into the `zenith_core` domain types,
//! which normalize a NULL status to `new`.

pub mod application;

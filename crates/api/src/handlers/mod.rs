pub mod applications;
pub mod bulk;
pub mod portfolio;

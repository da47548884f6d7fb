//! Command implementations.

pub mod check;
pub mod images;
pub mod list;

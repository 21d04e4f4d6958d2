//! Database row structs.

pub mod book;

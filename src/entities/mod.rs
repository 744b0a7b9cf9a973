//! Entity module - SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod reading;

pub use reading::{Column as ReadingColumn, Entity as Reading, Model as ReadingModel};

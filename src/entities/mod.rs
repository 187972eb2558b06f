//! SeaORM entity models for the bundled local store

pub mod item;

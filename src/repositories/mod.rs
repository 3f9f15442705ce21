//! Repository layer for database operations.
//!
//! Repositories keep entities as plain data models and hold the queries that
//! read and write them, following the Data Mapper pattern recommended by
//! SeaORM.

pub mod snapshot;

pub use snapshot::SnapshotRepository;

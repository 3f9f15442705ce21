pub mod snapshot_entry;

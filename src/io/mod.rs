//! IO module aggregating mesh export helpers.

pub mod obj_write;

pub use obj_write::{export_obj_to_path, write_obj};

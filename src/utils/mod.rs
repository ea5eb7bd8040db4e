//! Small shared helpers.

pub mod object_id;

pub use object_id::parse_object_id;

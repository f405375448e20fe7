pub mod memory;
pub mod ordered_set;

//! Stable data types crossing the store boundary.

pub mod types;

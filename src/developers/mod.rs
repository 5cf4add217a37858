pub mod common;
pub mod next;

mod assert_rs;
mod entry_point_rs;

pub use assert_rs::AssertRs;
pub use entry_point_rs::{ENTRY_POINT_FILE, EntryPointRs};

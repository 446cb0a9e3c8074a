//! Filesystem helpers used by the acquirer and the expander.

pub mod writer;

pub use writer::create_with_mode;
pub use writer::mkdir_chain;
pub use writer::write_file;

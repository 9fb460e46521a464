/// Persistence layer: write records to disk and run the optional formatter.
pub mod errors;
pub mod formatter;
pub mod write;

pub use errors::PersistError;
pub use formatter::{find_on_path, run_formatter};
pub use write::write_records;

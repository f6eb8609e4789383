pub mod fs;

pub use fs::{display_name, file_exists, read_file_to_string, write_file_sync};

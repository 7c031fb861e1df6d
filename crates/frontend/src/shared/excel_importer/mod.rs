pub mod parser;

pub use parser::{read_excel_rows, read_file_text};

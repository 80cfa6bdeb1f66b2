//! Line-delimited input and output for batch runs.
//!
//! Batches are two parallel text files with one string per line. Row `i` of
//! the first file is compared with row `i` of the second. Results go to a
//! third file, one value per line, in input order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lexalign::parsing::lines::{read_lines, write_output};
//! use std::path::Path;
//!
//! let queries = read_lines(Path::new("input_queries.txt")).unwrap();
//! write_output(Path::new("-"), &format!("{} rows\n", queries.len())).unwrap();
//! ```

pub mod lines;

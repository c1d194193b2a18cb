//! Read and write helpers over a single SQLite connection.

pub mod counts;
pub mod insert;
pub mod snapshot;

pub use counts::{count_rows, table_counts, table_names, TableCount};
pub use insert::{classify, insert_row, insert_rows};
pub use snapshot::table_snapshot;

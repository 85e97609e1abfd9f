// Loader/normalizer: CSV in, immutable ContractTable out.
// A load either produces the whole table or fails with a LoadError; there is
// no partial table.

pub mod agency;
mod columns;
pub mod export;
mod io;
mod normalize;
pub mod parse;

pub use agency::{AgencyCatalog, AliasConflict, canonicalize};
pub use columns::{OPTIONAL_COLUMNS, REQUIRED_COLUMNS};
pub use export::write_csv;
pub use io::{load_table, read_table};

pub use deidash_types::{LoadError, LoadResult};

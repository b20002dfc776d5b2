mod parser;
mod repr;

pub use parser::{parse_directory, parse_header, Parser};
pub use repr::{ArchiveKind, Entry, Head, ENTRY_SIZE, IWAD_MAGIC, PWAD_MAGIC};

#[cfg(test)]
mod repr_test;

#[cfg(test)]
mod parser_test;

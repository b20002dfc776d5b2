use std::io;
use thiserror::Error;

/// Reasons an archive fails to decode.  Every variant is fatal to the decode
/// as a whole; no partially-built archive is ever handed out.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The byte source failed for a reason other than running out of data
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),

    /// Fewer bytes were available than a field or record requires
    #[error("Unexpected end of data while reading {0}")]
    Truncated(&'static str),

    #[error("Unrecognized archive tag {0:?}")]
    BadMagic([u8; 4]),

    /// A record array's byte size is not a multiple of its record width
    #[error("{size} bytes is not a whole number of {width}-byte records")]
    Misaligned { size: u32, width: usize },

    /// An offset resolves outside the range it is allowed to address
    #[error("{what} at offset {offset} ({length} bytes) exceeds limit of {limit} bytes")]
    OutOfBounds {
        what: &'static str,
        offset: u64,
        length: u64,
        limit: u64,
    },

    #[error("Section opened by `{0}` is never closed")]
    UnterminatedSection(String),

    #[error("Section marker `{inner}` appears inside section `{outer}`")]
    NestedSection { outer: String, inner: String },

    #[error("Section marker `{name}` has non-zero size {size}")]
    NonEmptyMarker { name: String, size: u32 },

    #[error("Map `{name}` needs 6 data lumps but only {found} follow it")]
    MissingMapLumps { name: String, found: usize },

    #[error("Invalid picture: {0}")]
    InvalidPicture(String),
}

impl FormatError {
    /// Classify an I/O failure that happened while reading `what`.  Running
    /// out of bytes is a format violation, not an I/O problem.
    pub fn from_io(err: io::Error, what: &'static str) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            FormatError::Truncated(what)
        } else {
            FormatError::Io(err)
        }
    }
}

impl From<io::Error> for FormatError {
    fn from(err: io::Error) -> FormatError {
        FormatError::from_io(err, "data")
    }
}

pub type Result<T> = core::result::Result<T, FormatError>;

/// Failed lookups against a decoded archive.  These are recoverable; the
/// archive itself stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No {kind} named `{name}`")]
    NotFound { kind: &'static str, name: String },

    #[error("{kind} index {index} out of range (count is {count})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        count: usize,
    },
}

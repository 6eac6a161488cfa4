//! Identifier table reading.

mod fields;
mod probe;
mod reader;

pub use fields::clean_field;
pub use probe::{LayoutProbe, probe_layout};
pub use reader::{DecodeOptions, DecodedTable, check_input_file, decode_participants};

use std::io;
use std::path::Path;

use crate::error::IngestError;

/// Maps an open/read failure to the matching ingest error.
fn open_error(path: &Path, e: io::Error) -> IngestError {
    if e.kind() == io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

//! Text file format for sylph tables.
//!
//! ## File Format
//!
//! ```text
//! NAME: users
//! FIELDS: ["id","name","age"]
//! TYPES: ["number","string","number"]
//! NULLABLES: [0,0,0]
//! DEFAULTS: {"2":"MTg="}
//! DEFAULT_KIND: {"2":"number"}
//! PRIMARY_KEY: 0
//! IS_AUTO_INCREMENT: 1
//! AUTO_INCREMENT_VALUE: 2
//! INDEXES: [2]
//! UNIQUES: [1]
//! DATA_START: 12
//! [1,"Ann",18]
//! [2,"Bo",30]
//! ```
//!
//! The header is a cross-check, not a schema source: loading requires the
//! schema the table was saved with, though its fields may be reordered.

mod base64;
mod codec;
mod header;
mod layout;
mod reader;
mod writer;

pub use header::Label;
pub use layout::FileLayout;
pub use reader::{from_str, load};
pub use writer::{save, to_string};

use std::io;
use std::path::Path;
use sylph_core::Error;

fn io_error(path: &Path, err: io::Error) -> Error {
    Error::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

use std::fmt;
use std::path::PathBuf;

// Errors surfaced while loading a cartridge image. Kept as a plain enum with manual `Display`/`Error`
// impls, matching the teacher's preference for std-only error handling over a derive crate.
#[derive(Debug)]
pub enum Error {
    CartridgeRead { path: PathBuf, source: std::io::Error },
    UnsupportedMbc { type_byte: u8 },
    InvalidHeader { reason: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CartridgeRead { path, source } => {
                write!(f, "failed to read cartridge image {}: {}", path.display(), source)
            }
            Error::UnsupportedMbc { type_byte } => {
                write!(f, "unsupported cartridge type: {:#04x}", type_byte)
            }
            Error::InvalidHeader { reason } => write!(f, "invalid cartridge header: {}", reason),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::CartridgeRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

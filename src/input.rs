use std::{fs::File, io::Read, path::Path};

use tracing::{debug, trace};

use crate::error::ErrorMessage;

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Read size hint when the input length is unknown. A multiple of 5 and 8,
/// the block sizes of both directions.
pub const DEFAULT_READ_SIZE: usize = 5 * 1024;

/// Read all bytes from the file at `path`, or from `stdin` when no path or
/// `-` is given.
pub fn read_input(path: Option<&Path>, stdin: impl Read) -> Result<Vec<u8>, ErrorMessage> {
    match path {
        Some(path) if path != Path::new(STDIN_PATH) => {
            let file = File::open(path).map_err(|source| ErrorMessage::OpenInput {
                path: path.to_path_buf(),
                source,
            })?;
            let size_hint = file
                .metadata()
                .ok()
                .and_then(|metadata| usize::try_from(metadata.len()).ok())
                .filter(|&len| len > 0)
                .unwrap_or(DEFAULT_READ_SIZE);
            debug!(path = %path.display(), size_hint, "reading input file");
            read_all(file, size_hint)
        }
        _ => {
            debug!("reading standard input");
            read_all(stdin, DEFAULT_READ_SIZE)
        }
    }
}

fn read_all(mut reader: impl Read, size_hint: usize) -> Result<Vec<u8>, ErrorMessage> {
    let mut input = Vec::with_capacity(size_hint);
    reader
        .read_to_end(&mut input)
        .map_err(|source| ErrorMessage::ReadInput { source })?;
    trace!(bytes = input.len(), "read input");
    Ok(input)
}

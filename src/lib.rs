use std::{
    ffi::OsString,
    io::{Read, Write},
    path::Path,
};

use clap::{Args, Parser};
use tracing::debug;

pub mod base32;
mod error;
mod input;

pub use error::{CodecError, ErrorMessage};

/// Emits a value encoded in or decoded from base32 on stdout.
///
/// When encoding, the input should contain raw binary data. Without a file
/// name (or with `-`), input is read from stdin.
#[derive(Parser, Debug)]
#[command(name = "base32c", version)]
pub struct Cli {
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Encode without trailing `=` padding
    #[arg(short, long, conflicts_with_all = ["decode", "decode_value"])]
    pub no_pad: bool,

    /// Input file (encode/decode) or base32 value (decode-value)
    pub input: Option<OsString>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ModeArgs {
    /// Encode raw binary data from a file or stdin
    #[arg(short, long)]
    pub encode: bool,

    /// Decode base32 text from a file or stdin
    #[arg(short, long)]
    pub decode: bool,

    /// Decode the base32 value given as argument
    #[arg(short = 'D', long)]
    pub decode_value: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
    DecodeValue,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.mode.encode {
            Mode::Encode
        } else if self.mode.decode {
            Mode::Decode
        } else {
            Mode::DecodeValue
        }
    }
}

/// Run the command selected by `cli`, reading input from a file, `stdin` or
/// the command line and writing the result to `stdout`.
pub fn run(cli: &Cli, stdin: impl Read, mut stdout: impl Write) -> Result<(), ErrorMessage> {
    let mode = cli.mode();
    debug!(?mode, pad = !cli.no_pad, "running");

    match mode {
        Mode::Encode => {
            let data = input::read_input(cli.input.as_deref().map(Path::new), stdin)?;
            let mut result = vec![0; base32::encoded_capacity(data.len())];
            let count = base32::encode(&data, &mut result, !cli.no_pad).map_err(|source| {
                ErrorMessage::Codec {
                    operation: "encode",
                    source,
                }
            })?;
            debug!(bytes = data.len(), characters = count, "encoded");
            write_output(&mut stdout, &result[..count])?;
            write_output(&mut stdout, b"\n")?;
        }
        Mode::Decode => {
            let encoded = input::read_input(cli.input.as_deref().map(Path::new), stdin)?;
            let decoded = decode(&encoded)?;
            write_output(&mut stdout, &decoded)?;
        }
        Mode::DecodeValue => {
            let value = cli.input.as_deref().ok_or(ErrorMessage::MissingValue)?;
            let decoded = decode(value.as_encoded_bytes())?;
            write_output(&mut stdout, &decoded)?;
        }
    }

    stdout.flush().map_err(ErrorMessage::WriteOutput)
}

fn decode(encoded: &[u8]) -> Result<Vec<u8>, ErrorMessage> {
    let mut result = vec![0; base32::decoded_capacity(encoded.len())];
    let count = base32::decode(encoded, &mut result).map_err(|source| ErrorMessage::Codec {
        operation: "decode",
        source,
    })?;
    debug!(characters = encoded.len(), bytes = count, "decoded");
    result.truncate(count);
    Ok(result)
}

fn write_output(stdout: &mut impl Write, bytes: &[u8]) -> Result<(), ErrorMessage> {
    stdout.write_all(bytes).map_err(ErrorMessage::WriteOutput)
}

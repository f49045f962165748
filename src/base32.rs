use crate::error::CodecError;

/// Symbols of the encoding, indexed by their 5-bit value.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Suffix character rounding encoded text up to a multiple of 8 characters.
pub const PAD: u8 = b'=';

/// Inputs to [`encode`] must be shorter than this many bytes.
pub const MAX_INPUT_LEN: usize = 1 << 28;

/// Decode base32 text into `result`, returning the number of bytes written.
///
/// Whitespace and `-` are skipped, letters are matched case-insensitively
/// and the commonly mistyped digits `0`, `1` and `8` are read as `O`, `L`
/// and `B`. Once `result` is full, further bytes are dropped silently but the
/// rest of the input is still checked for invalid characters. If room is
/// left, a nul byte is written right after the decoded data.
pub fn decode(encoded: &[u8], result: &mut [u8]) -> Result<usize, CodecError> {
    let capacity = result.len();
    let mut buffer: u32 = 0;
    let mut bits_left: u32 = 0;
    let mut count = 0;
    let mut padding = false;

    for (offset, &byte) in encoded.iter().enumerate() {
        if byte == PAD {
            padding = true;
            bits_left += 5;
            if bits_left >= 8 {
                bits_left -= 8;
            }
            if bits_left == 0 {
                padding = false;
            }
            continue;
        }
        // only `=` may follow a `=` until the padding block is complete
        if padding {
            return Err(invalid_character(byte, offset));
        }
        if is_separator(byte) {
            continue;
        }

        let value = symbol_value(byte).ok_or_else(|| invalid_character(byte, offset))?;
        buffer = (buffer << 5) | u32::from(value);
        bits_left += 5;
        if bits_left >= 8 {
            bits_left -= 8;
            if count < capacity {
                result[count] = (buffer >> bits_left) as u8;
                count += 1;
            }
        }
    }

    if count < capacity {
        result[count] = 0;
    }
    Ok(count)
}

/// Encode `data` into `result`, returning the number of characters written.
///
/// With `pad` set, `=` is appended until the output length is a multiple of
/// 8. The output is always followed by a nul byte, so `result` needs one slot
/// more than the encoded text. When it is too small, as much text as fits is
/// left in `result`, nul terminated in its last slot, and
/// [`CodecError::BufferTooSmall`] is returned.
pub fn encode(data: &[u8], result: &mut [u8], pad: bool) -> Result<usize, CodecError> {
    let length = data.len();
    if length >= MAX_INPUT_LEN {
        return Err(CodecError::InvalidLength(length));
    }
    let capacity = result.len();
    if capacity == 0 {
        return Err(CodecError::InvalidCapacity);
    }

    let mut count = 0;
    if let Some(&first) = data.first() {
        let mut buffer = u32::from(first);
        let mut next = 1;
        let mut bits_left: u32 = 8;
        while count < capacity && (bits_left > 0 || next < length) {
            if bits_left < 5 {
                if next < length {
                    buffer = (buffer << 8) | u32::from(data[next]);
                    next += 1;
                    bits_left += 8;
                } else {
                    // last group, fill up with zero bits
                    buffer <<= 5 - bits_left;
                    bits_left = 5;
                }
            }
            let index = (buffer >> (bits_left - 5)) & 0x1f;
            bits_left -= 5;
            result[count] = ALPHABET[index as usize];
            count += 1;
        }
    }

    while pad && count < capacity && count % 8 != 0 {
        result[count] = PAD;
        count += 1;
    }

    if count >= capacity {
        result[capacity - 1] = 0;
        return Err(CodecError::BufferTooSmall { capacity });
    }
    result[count] = 0;
    Ok(count)
}

/// Buffer size that fits the padded encoding of `length` bytes and its terminator.
pub fn encoded_capacity(length: usize) -> usize {
    (length + 4) / 5 * 8 + 1
}

/// Buffer size that fits the bytes decoded from `length` characters.
pub fn decoded_capacity(length: usize) -> usize {
    (length + 7) / 8 * 5
}

/// Encode `data` into a newly allocated string.
pub fn encode_to_string(data: &[u8], pad: bool) -> Result<String, CodecError> {
    let mut result = vec![0; encoded_capacity(data.len())];
    let count = encode(data, &mut result, pad)?;
    Ok(result[..count].iter().map(|&byte| char::from(byte)).collect())
}

/// Decode base32 text into a newly allocated vector.
pub fn decode_to_vec(encoded: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut result = vec![0; decoded_capacity(encoded.len())];
    let count = decode(encoded, &mut result)?;
    result.truncate(count);
    Ok(result)
}

fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n' | b'-')
}

/// Map a character to its 5-bit value, correcting `0`, `1` and `8` first.
fn symbol_value(byte: u8) -> Option<u8> {
    let byte = match byte {
        b'0' => b'O',
        b'1' => b'L',
        b'8' => b'B',
        other => other,
    };
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b'a'..=b'z' => Some(byte - b'a'),
        b'2'..=b'7' => Some(byte - b'2' + 26),
        _ => None,
    }
}

fn invalid_character(byte: u8, offset: usize) -> CodecError {
    CodecError::InvalidCharacter {
        character: char::from(byte),
        offset,
    }
}

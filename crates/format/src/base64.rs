//! Base64 (RFC 4648, standard alphabet, padded) for default payloads.

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Base64 decode error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base64Error {
    InvalidCharacter(char),
    InvalidLength,
}

impl std::fmt::Display for Base64Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter(c) => write!(f, "invalid base64 character '{}'", c),
            Self::InvalidLength => f.write_str("invalid base64 length"),
        }
    }
}

impl std::error::Error for Base64Error {}

/// Encodes bytes with padding.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() + 2) / 3 * 4);

    for chunk in data.chunks(3) {
        let b0 = chunk[0] as u32;
        let b1 = chunk.get(1).copied().unwrap_or(0) as u32;
        let b2 = chunk.get(2).copied().unwrap_or(0) as u32;
        let combined = (b0 << 16) | (b1 << 8) | b2;

        out.push(ALPHABET[((combined >> 18) & 0x3F) as usize] as char);
        out.push(ALPHABET[((combined >> 12) & 0x3F) as usize] as char);
        out.push(if chunk.len() > 1 {
            ALPHABET[((combined >> 6) & 0x3F) as usize] as char
        } else {
            '='
        });
        out.push(if chunk.len() > 2 {
            ALPHABET[(combined & 0x3F) as usize] as char
        } else {
            '='
        });
    }

    out
}

/// Decodes padded or unpadded input.
///
/// Padding, when present, must complete the last 4-character group.
pub fn decode(s: &str) -> Result<Vec<u8>, Base64Error> {
    let data = s.trim_end_matches('=');
    let padding = s.len() - data.len();
    if data.len() % 4 == 1 || (padding > 0 && (padding > 2 || s.len() % 4 != 0)) {
        return Err(Base64Error::InvalidLength);
    }
    let s = data;

    let mut out = Vec::with_capacity(s.len() * 3 / 4);
    let mut buffer = 0u32;
    let mut bits = 0;

    for c in s.chars() {
        buffer = (buffer << 6) | decode_char(c)? as u32;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    Ok(out)
}

fn decode_char(c: char) -> Result<u8, Base64Error> {
    match c {
        'A'..='Z' => Ok(c as u8 - b'A'),
        'a'..='z' => Ok(c as u8 - b'a' + 26),
        '0'..='9' => Ok(c as u8 - b'0' + 52),
        '+' => Ok(62),
        '/' => Ok(63),
        _ => Err(Base64Error::InvalidCharacter(c)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4648_vectors() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "Zg==");
        assert_eq!(encode(b"fo"), "Zm8=");
        assert_eq!(encode(b"foo"), "Zm9v");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");

        assert_eq!(decode("Zg==").unwrap(), b"f");
        assert_eq!(decode("Zm8").unwrap(), b"fo");
        assert_eq!(decode("Zm9vYmFy").unwrap(), b"foobar");
    }

    #[test]
    fn test_utf8_payload() {
        let text = "héllo, wörld";
        assert_eq!(decode(&encode(text.as_bytes())).unwrap(), text.as_bytes());
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode("Zm9v!A"), Err(Base64Error::InvalidCharacter('!')));
        assert_eq!(decode("Zm9vY"), Err(Base64Error::InvalidLength));
    }

    #[test]
    fn test_decode_rejects_stray_padding() {
        assert_eq!(decode("Zg====="), Err(Base64Error::InvalidLength));
        assert_eq!(decode("Zg="), Err(Base64Error::InvalidLength));
        assert_eq!(decode("Zm9v===="), Err(Base64Error::InvalidLength));
        assert_eq!(decode("Zm8=").unwrap(), b"fo");
    }
}

use std::fmt::{Display, Formatter};

/// Text encodings understood by
/// [`Overlay::get_file_contents_as_text_with_encoding`](struct.Overlay.html#method.get_file_contents_as_text_with_encoding).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    /// ISO-8859-1. Every byte maps to the code point of the same value.
    Latin1,
}

impl Display for TextEncoding {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            TextEncoding::Utf8 => write!(fmt, "UTF-8"),
            TextEncoding::Utf16Le => write!(fmt, "UTF-16LE"),
            TextEncoding::Utf16Be => write!(fmt, "UTF-16BE"),
            TextEncoding::Latin1 => write!(fmt, "ISO-8859-1"),
        }
    }
}

impl TextEncoding {
    /// Decodes `bytes` as text. A leading byte order mark for this encoding
    /// is dropped. Malformed sequences (and a dangling odd byte in UTF-16)
    /// become U+FFFD, so this never fails.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => {
                let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF")
                    .unwrap_or(bytes);
                String::from_utf8_lossy(bytes).into_owned()
            },
            TextEncoding::Utf16Le =>
                decode_utf16(bytes.strip_prefix(b"\xFF\xFE").unwrap_or(bytes),
                             u16::from_le_bytes),
            TextEncoding::Utf16Be =>
                decode_utf16(bytes.strip_prefix(b"\xFE\xFF").unwrap_or(bytes),
                             u16::from_be_bytes),
            TextEncoding::Latin1 =>
                bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let chunks = bytes.chunks_exact(2);
    let dangling = !chunks.remainder().is_empty();
    let mut ret: String = char::decode_utf16(
        chunks.map(|x| unit([x[0], x[1]]))
    ).map(|x| x.unwrap_or(char::REPLACEMENT_CHARACTER)).collect();
    if dangling { ret.push(char::REPLACEMENT_CHARACTER) }
    ret
}

mod header;
mod question;
mod query;
mod answer;

use std::convert::TryFrom;
use crate::cursor::Cursor;
use crate::error::{DnsError, DnsResult};

pub use question::QueryType;
pub use query::{DnsQuery, build_query};
pub use answer::{DnsResponse, ResourceRecord, COLUMN_SEPARATOR};

const C_FACTOR: u8 = 192u8;
const DC_FACTOR: u16 = 16383u16;
const MAX_LABEL_LEN: usize = 63;

/// Encodes a dotted name as length-prefixed labels closed by the root label.
///
/// A single trailing dot is accepted as the fully-qualified spelling of the
/// same name. Characters are written as Latin-1 bytes.
pub fn wrap_name(name: &str) -> DnsResult<Vec<u8>> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        return Err(DnsError::InvalidName(name.to_string()));
    }
    let mut vec = Vec::with_capacity(trimmed.len() + 2);
    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(DnsError::InvalidName(name.to_string()));
        }
        let bytes = label.chars()
            .map(|c| u8::try_from(u32::from(c)).ok())
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| DnsError::InvalidName(name.to_string()))?;
        if bytes.len() > MAX_LABEL_LEN {
            return Err(DnsError::LabelTooLong(label.to_string()));
        }
        vec.push(bytes.len() as u8);
        vec.extend(bytes);
    }
    vec.push(0u8);
    Ok(vec)
}

/// Decodes the possibly compressed name starting at `start`.
///
/// Returns the dotted name and the offset right after the name in the
/// record stream. Once a pointer has been followed that offset is fixed to
/// the byte after the first pointer, wherever the labels themselves live.
pub fn unzip_domain(buf: &[u8], start: usize) -> DnsResult<(String, usize)> {
    let mut name = String::new();
    let mut index = start;
    let mut next = None;
    let mut hops = 0usize;
    loop {
        let seg_len = *buf.get(index).ok_or(DnsError::Truncated(index))?;
        if seg_len & C_FACTOR == C_FACTOR {
            let low = *buf.get(index + 1).ok_or(DnsError::Truncated(index + 1))?;
            hops += 1;
            if hops > buf.len() {
                return Err(DnsError::CompressionLoop(index));
            }
            if next.is_none() {
                next = Some(index + 2);
            }
            index = (u16::from_be_bytes([seg_len, low]) & DC_FACTOR) as usize;
        } else if seg_len == 0 {
            return Ok((name, next.unwrap_or(index + 1)));
        } else if seg_len as usize > MAX_LABEL_LEN {
            return Err(DnsError::MalformedName(index));
        } else {
            let end = index + 1 + seg_len as usize;
            let segment = buf.get(index + 1..end).ok_or(DnsError::Truncated(buf.len()))?;
            if !name.is_empty() {
                name.push('.');
            }
            name.extend(segment.iter().map(|&b| b as char));
            index = end;
        }
    }
}

pub fn take_name(cursor: &mut Cursor) -> DnsResult<String> {
    let (name, next) = unzip_domain(cursor.get_buf(), cursor.get_current_index())?;
    cursor.at(next);
    Ok(name)
}

#[cfg(test)]
pub mod tests {
    use crate::protocol::{wrap_name, unzip_domain, take_name};
    use crate::cursor::Cursor;
    use crate::error::DnsError;

    pub use crate::protocol::answer::tests::{get_valid_response, get_response_prefix, push_record};

    #[test]
    fn should_return_labels_when_call_wrap_name_given_dotted_name() {
        let name = "www.baidu.com";

        let result = wrap_name(name).unwrap();

        let expected = vec![3, 119, 119, 119, 5, 98, 97, 105, 100, 117, 3, 99, 111, 109, 0];
        assert_eq!(expected, result)
    }

    #[test]
    fn should_return_same_name_when_unzip_given_wrapped_name() {
        let bytes = wrap_name("example.com").unwrap();

        let (name, next) = unzip_domain(&bytes, 0).unwrap();

        assert_eq!("example.com", name);
        assert_eq!(bytes.len(), next)
    }

    #[test]
    fn should_ignore_trailing_dot_when_call_wrap_name_given_fully_qualified_name() {
        let name = "example.com.";

        let result = wrap_name(name).unwrap();

        assert_eq!(wrap_name("example.com").unwrap(), result)
    }

    #[test]
    fn should_succeed_when_call_wrap_name_given_labels_up_to_63_bytes() {
        (1..=63).for_each(|len| {
            let label = "a".repeat(len);

            let result = wrap_name(&label).unwrap();

            assert_eq!(len as u8, result[0]);
            assert_eq!(len + 2, result.len());
        });
    }

    #[test]
    fn should_return_label_too_long_when_call_wrap_name_given_64_byte_label() {
        let name = format!("{}.com", "a".repeat(64));

        let result = wrap_name(&name);

        assert!(matches!(result, Err(DnsError::LabelTooLong(_))))
    }

    #[test]
    fn should_return_invalid_name_when_call_wrap_name_given_adjacent_dots() {
        let result = wrap_name("example..com");

        assert!(matches!(result, Err(DnsError::InvalidName(_))))
    }

    #[test]
    fn should_return_invalid_name_when_call_wrap_name_given_empty_name() {
        assert!(matches!(wrap_name(""), Err(DnsError::InvalidName(_))));
        assert!(matches!(wrap_name("."), Err(DnsError::InvalidName(_))));
        assert!(matches!(wrap_name(".com"), Err(DnsError::InvalidName(_))))
    }

    #[test]
    fn should_return_invalid_name_when_call_wrap_name_given_char_outside_latin1() {
        let result = wrap_name("例え.jp");

        assert!(matches!(result, Err(DnsError::InvalidName(_))))
    }

    #[test]
    fn should_follow_pointer_when_unzip_given_pointer_to_offset_12() {
        let mut bytes = vec![0u8; 12];
        bytes.extend(wrap_name("example.com").unwrap());
        let pointer_start = bytes.len();
        bytes.extend(&[0xC0, 0x0C]);

        let (name, next) = unzip_domain(&bytes, pointer_start).unwrap();

        assert_eq!("example.com", name);
        assert_eq!(pointer_start + 2, next)
    }

    #[test]
    fn should_return_offset_after_first_pointer_when_unzip_given_labels_then_pointer() {
        let mut bytes = vec![0u8; 12];
        bytes.extend(wrap_name("google.com").unwrap());
        let start = bytes.len();
        bytes.extend(&[4, b'a', b'l', b't', b'1', 0xC0, 0x0C, 0xFF]);

        let (name, next) = unzip_domain(&bytes, start).unwrap();

        assert_eq!("alt1.google.com", name);
        assert_eq!(start + 7, next)
    }

    #[test]
    fn should_return_compression_loop_when_unzip_given_self_pointer() {
        let bytes = vec![0xC0, 0x00];

        let result = unzip_domain(&bytes, 0);

        assert!(matches!(result, Err(DnsError::CompressionLoop(_))))
    }

    #[test]
    fn should_return_compression_loop_when_unzip_given_two_pointers_to_each_other() {
        let bytes = vec![1, b'a', 0xC0, 0x04, 0xC0, 0x00];

        let result = unzip_domain(&bytes, 0);

        assert!(matches!(result, Err(DnsError::CompressionLoop(_))))
    }

    #[test]
    fn should_return_truncated_when_unzip_given_label_past_end() {
        let bytes = vec![7, b'e', b'x', b'a'];

        let result = unzip_domain(&bytes, 0);

        assert!(matches!(result, Err(DnsError::Truncated(_))))
    }

    #[test]
    fn should_return_truncated_when_unzip_given_missing_root_label() {
        let bytes = vec![3, b'c', b'o', b'm'];

        let result = unzip_domain(&bytes, 0);

        assert!(matches!(result, Err(DnsError::Truncated(4))))
    }

    #[test]
    fn should_return_malformed_name_when_unzip_given_reserved_length_prefix() {
        let bytes = vec![0x40, b'a', 0];

        let result = unzip_domain(&bytes, 0);

        assert!(matches!(result, Err(DnsError::MalformedName(0))))
    }

    #[test]
    fn should_decode_bytes_as_latin1_when_unzip_given_high_bytes() {
        let bytes = vec![2, 0xE9, b'a', 0];

        let (name, _) = unzip_domain(&bytes, 0).unwrap();

        assert_eq!("éa", name)
    }

    #[test]
    fn should_move_cursor_after_pointer_when_call_take_name_given_pointer() {
        let mut bytes = vec![0u8; 12];
        bytes.extend(wrap_name("a.very.long.name.example").unwrap());
        let pointer_start = bytes.len();
        bytes.extend(&[0xC0, 0x0C, 0x00, 0x01]);
        let mut cursor = Cursor::from(&bytes);
        cursor.at(pointer_start);

        let name = take_name(&mut cursor).unwrap();

        assert_eq!("a.very.long.name.example", name);
        assert_eq!(pointer_start + 2, cursor.get_current_index())
    }
}

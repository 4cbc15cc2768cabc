mod basic;
mod alias;
mod ipv4;
mod mx;

use std::fmt::{Display, Formatter};
use crate::cursor::Cursor;
use crate::error::{DnsError, DnsResult};

pub use basic::BasicData;
pub use alias::AliasResource;
pub use ipv4::Ipv4Resource;
pub use mx::MxResource;

pub const COLUMN_SEPARATOR: &str = "    ";

const TYPE_A: u16 = 1;
const TYPE_NS: u16 = 2;
const TYPE_CNAME: u16 = 5;
const TYPE_MX: u16 = 15;

pub trait Resource<T> {
    fn get_name(&self) -> &String;
    fn get_ttl(&self) -> u32;
    fn get_data(&self) -> &T;
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum ResourceRecord {
    Ipv4(Ipv4Resource),
    Ns(AliasResource),
    Cname(AliasResource),
    Mx(MxResource),
}

impl ResourceRecord {
    /// Reads one record and leaves the cursor on the first byte after its RDATA.
    pub fn from(cursor: &mut Cursor) -> DnsResult<Self> {
        let basic = BasicData::from(cursor)?;
        let data_start = cursor.get_current_index();
        let data_end = data_start + basic.get_data_len() as usize;
        if data_end > cursor.get_buf().len() {
            return Err(DnsError::Truncated(cursor.get_buf().len()));
        }
        let record = match basic.get_type() {
            TYPE_A => ResourceRecord::Ipv4(Ipv4Resource::create(basic, cursor)?),
            TYPE_NS => ResourceRecord::Ns(AliasResource::create(basic, cursor)?),
            TYPE_CNAME => ResourceRecord::Cname(AliasResource::create(basic, cursor)?),
            TYPE_MX => ResourceRecord::Mx(MxResource::create(basic, cursor)?),
            other => return Err(DnsError::UnsupportedRecordType(other)),
        };
        cursor.at(data_end);
        Ok(record)
    }
}

impl Display for ResourceRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sep = COLUMN_SEPARATOR;
        match self {
            ResourceRecord::Ipv4(r) => {
                write!(f, "IP{}{}{}{}", sep, r.get_data(), sep, r.get_ttl())
            }
            ResourceRecord::Ns(r) => {
                write!(f, "NS{}{}{}{}", sep, r.get_data(), sep, r.get_ttl())
            }
            ResourceRecord::Cname(r) => {
                write!(f, "CNAME{}{}{}{}", sep, r.get_data(), sep, r.get_ttl())
            }
            ResourceRecord::Mx(r) => {
                write!(f, "MX{}{}{}{}{}{}", sep, r.get_data(), sep, r.get_preference(), sep, r.get_ttl())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::protocol::answer::resource::{Resource, ResourceRecord};
    use crate::cursor::Cursor;
    use crate::error::DnsError;

    fn get_record_bytes(_type: u16, rdata: &[u8]) -> Vec<u8> {
        let mut vec = vec![6, b'g', b'o', b'o', b'g', b'l', b'e', 3, b'c', b'o', b'm', 0];
        vec.extend(&_type.to_be_bytes());
        vec.extend(&[0, 1, 0, 0, 0x01, 0x2C]);
        vec.extend(&(rdata.len() as u16).to_be_bytes());
        vec.extend(rdata);
        vec
    }

    #[test]
    fn should_return_ipv4_record_when_call_from_given_a_record() {
        let bytes = get_record_bytes(1, &[8, 8, 8, 8]);
        let mut cursor = Cursor::from(&bytes);

        let result = ResourceRecord::from(&mut cursor).unwrap();

        assert!(matches!(&result, ResourceRecord::Ipv4(r) if r.get_name() == "google.com"));
        assert_eq!("IP    8.8.8.8    300", result.to_string());
        assert_eq!(bytes.len(), cursor.get_current_index())
    }

    #[test]
    fn should_return_mx_record_when_call_from_given_mx_record_with_pointer() {
        let rdata = [0, 10, 4, b'a', b'l', b't', b'1', 0xC0, 0x00];
        let bytes = get_record_bytes(15, &rdata);
        let mut cursor = Cursor::from(&bytes);

        let result = ResourceRecord::from(&mut cursor).unwrap();

        assert_eq!("MX    alt1.google.com    10    300", result.to_string());
        assert_eq!(bytes.len(), cursor.get_current_index())
    }

    #[test]
    fn should_return_cname_record_when_call_from_given_cname_record() {
        let bytes = get_record_bytes(5, &[3, b'w', b'w', b'w', 0xC0, 0x00]);
        let mut cursor = Cursor::from(&bytes);

        let result = ResourceRecord::from(&mut cursor).unwrap();

        assert_eq!("CNAME    www.google.com    300", result.to_string())
    }

    #[test]
    fn should_return_ns_record_when_call_from_given_ns_record() {
        let bytes = get_record_bytes(2, &[3, b'n', b's', b'1', 0xC0, 0x00]);
        let mut cursor = Cursor::from(&bytes);

        let result = ResourceRecord::from(&mut cursor).unwrap();

        assert_eq!("NS    ns1.google.com    300", result.to_string())
    }

    #[test]
    fn should_skip_to_rdata_end_when_call_from_given_rdata_longer_than_name() {
        let mut bytes = get_record_bytes(2, &[0xC0, 0x00, 0xAA, 0xBB]);
        bytes.push(0x77);
        let mut cursor = Cursor::from(&bytes);

        ResourceRecord::from(&mut cursor).unwrap();

        assert_eq!(bytes.len() - 1, cursor.get_current_index())
    }

    #[test]
    fn should_return_unsupported_record_type_when_call_from_given_soa_record() {
        let bytes = get_record_bytes(6, &[0, 0]);
        let mut cursor = Cursor::from(&bytes);

        let result = ResourceRecord::from(&mut cursor);

        assert!(matches!(result, Err(DnsError::UnsupportedRecordType(6))))
    }

    #[test]
    fn should_return_truncated_when_call_from_given_rdata_length_past_end() {
        let mut bytes = get_record_bytes(1, &[8, 8, 8, 8]);
        bytes.truncate(bytes.len() - 2);
        let mut cursor = Cursor::from(&bytes);

        let result = ResourceRecord::from(&mut cursor);

        assert!(matches!(result, Err(DnsError::Truncated(_))))
    }

    #[test]
    fn should_return_truncated_when_call_from_given_a_record_of_wrong_length() {
        let bytes = get_record_bytes(1, &[8, 8, 8]);
        let mut cursor = Cursor::from(&bytes);

        let result = ResourceRecord::from(&mut cursor);

        assert!(matches!(result, Err(DnsError::Truncated(_))))
    }
}

use crate::cursor::Cursor;
use crate::error::{DnsError, DnsResult};

pub const HEADER_SIZE: usize = 12;

const QUERY_ONLY_RECURSIVELY: u16 = 0x0100;
const QR_FLAG: u16 = 0x8000;
const AA_FLAG: u16 = 0x0400;
const RA_FLAG: u16 = 0x0080;
const RCODE_MASK: u16 = 0x000F;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl From<&Header> for Vec<u8> {
    fn from(header: &Header) -> Self {
        let mut result = Vec::with_capacity(HEADER_SIZE);
        result.extend(&header.id.to_be_bytes());
        result.extend(&header.flags.to_be_bytes());
        result.extend(&header.question_count.to_be_bytes());
        result.extend(&header.answer_count.to_be_bytes());
        result.extend(&header.authority_count.to_be_bytes());
        result.extend(&header.additional_count.to_be_bytes());
        result
    }
}

impl Header {
    pub fn query(id: u16) -> Self {
        Header {
            id,
            flags: QUERY_ONLY_RECURSIVELY,
            question_count: 1,
            answer_count: 0,
            authority_count: 0,
            additional_count: 0,
        }
    }

    pub fn from(cursor: &mut Cursor) -> DnsResult<Self> {
        Ok(Header {
            id: cursor.take_u16()?,
            flags: cursor.take_u16()?,
            question_count: cursor.take_u16()?,
            answer_count: cursor.take_u16()?,
            authority_count: cursor.take_u16()?,
            additional_count: cursor.take_u16()?,
        })
    }

    pub fn is_response(&self) -> bool {
        self.flags & QR_FLAG == QR_FLAG
    }

    pub fn is_authoritative(&self) -> bool {
        self.flags & AA_FLAG == AA_FLAG
    }

    pub fn is_recursion_available(&self) -> bool {
        self.flags & RA_FLAG == RA_FLAG
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & RCODE_MASK) as u8
    }

    /// Checks that the header belongs to a usable answer to a recursive query.
    ///
    /// An error RCODE wins over the QR and RA bits.
    pub fn validate(&self) -> DnsResult<()> {
        match self.rcode() {
            1 => return Err(DnsError::FormatError),
            2 => return Err(DnsError::ServerFailure),
            3 => return Err(DnsError::NameError),
            4 => return Err(DnsError::NotImplemented),
            5 => return Err(DnsError::Refused),
            _ => {}
        }
        if !self.is_response() {
            return Err(DnsError::NotAResponse);
        }
        if !self.is_recursion_available() {
            return Err(DnsError::RecursionNotSupported);
        }
        Ok(())
    }
}

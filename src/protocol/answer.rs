mod resource;

use crate::cursor::Cursor;
use crate::error::DnsResult;
use crate::protocol::header::Header;

pub use resource::{ResourceRecord, COLUMN_SEPARATOR};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DnsResponse {
    header: Header,
    answers: Vec<ResourceRecord>,
    authorities: Vec<ResourceRecord>,
    additionals: Vec<ResourceRecord>,
}

impl DnsResponse {
    /// Decodes a reply whose question section ends at `question_len`.
    ///
    /// The header is validated before any record is read. Any error aborts
    /// the whole decode, so a caller never sees a partial record list.
    pub fn decode(buf: &[u8], question_len: usize) -> DnsResult<Self> {
        let mut cursor = Cursor::from(buf);
        let header = Header::from(&mut cursor)?;
        header.validate()?;
        cursor.at(question_len);
        let answers = take_records(&mut cursor, header.answer_count)?;
        let authorities = take_records(&mut cursor, header.authority_count)?;
        let additionals = take_records(&mut cursor, header.additional_count)?;
        Ok(DnsResponse {
            header,
            answers,
            authorities,
            additionals,
        })
    }

    pub fn get_id(&self) -> u16 {
        self.header.id
    }

    pub fn is_authoritative(&self) -> bool {
        self.header.is_authoritative()
    }

    pub fn get_answers(&self) -> &Vec<ResourceRecord> {
        &self.answers
    }

    pub fn get_authorities(&self) -> &Vec<ResourceRecord> {
        &self.authorities
    }

    pub fn get_additionals(&self) -> &Vec<ResourceRecord> {
        &self.additionals
    }
}

fn take_records(cursor: &mut Cursor, count: u16) -> DnsResult<Vec<ResourceRecord>> {
    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        records.push(ResourceRecord::from(cursor)?);
    }
    Ok(records)
}

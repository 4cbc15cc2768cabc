use crate::buffer::MAX_PACKET_SIZE;
use crate::error::{DnsError, DnsResult};
use crate::protocol::header::{Header, HEADER_SIZE};
use crate::protocol::question::{Question, QueryType};

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DnsQuery {
    header: Header,
    question: Question,
}

impl DnsQuery {
    pub fn new(id: u16, name: &str, query_type: QueryType) -> DnsResult<Self> {
        Ok(DnsQuery {
            header: Header::query(id),
            question: Question::new(name, query_type)?,
        })
    }

    pub fn get_id(&self) -> u16 {
        self.header.id
    }

    /// Length of header plus question, which is where the answer section of
    /// the reply starts since servers echo the question back.
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE + self.question.encoded_len()
    }
}

impl From<&DnsQuery> for Vec<u8> {
    fn from(query: &DnsQuery) -> Self {
        let mut vec: Vec<u8> = (&query.header).into();
        let question: Vec<u8> = (&query.question).into();
        vec.extend(question);
        vec
    }
}

/// Builds the query datagram, rejecting any that would not fit one packet.
pub fn build_query(id: u16, name: &str, query_type: QueryType) -> DnsResult<(DnsQuery, Vec<u8>)> {
    let query = DnsQuery::new(id, name, query_type)?;
    let bytes: Vec<u8> = (&query).into();
    if bytes.len() > MAX_PACKET_SIZE {
        return Err(DnsError::MessageTooLarge(bytes.len()));
    }
    Ok((query, bytes))
}

use std::fmt::{Display, Formatter};
use crate::error::DnsResult;
use crate::protocol::wrap_name;

const CLASS_IN: u16 = 1;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum QueryType {
    A,
    NS,
    MX,
}

impl QueryType {
    pub fn code(&self) -> u16 {
        match self {
            QueryType::A => 1,
            QueryType::NS => 2,
            QueryType::MX => 15,
        }
    }
}

impl Display for QueryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            QueryType::A => "A",
            QueryType::NS => "NS",
            QueryType::MX => "MX",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Question {
    name: Vec<u8>,
    _type: u16,
    class: u16,
}

impl From<&Question> for Vec<u8> {
    fn from(question: &Question) -> Self {
        let mut result = Vec::with_capacity(question.name.len() + 4);
        result.extend(&question.name);
        result.extend(&question._type.to_be_bytes());
        result.extend(&question.class.to_be_bytes());
        result
    }
}

impl Question {
    pub fn new(name: &str, query_type: QueryType) -> DnsResult<Self> {
        Ok(Question {
            name: wrap_name(name)?,
            _type: query_type.code(),
            class: CLASS_IN,
        })
    }

    pub fn encoded_len(&self) -> usize {
        self.name.len() + 4
    }
}

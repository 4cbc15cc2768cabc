use crate::cursor::Cursor;
use crate::error::{DnsError, DnsResult};
use crate::protocol::take_name;

const CLASS_IN: u16 = 1;

/// Fields shared by every resource record, read up to the start of RDATA.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct BasicData {
    name: String,
    _type: u16,
    class: u16,
    ttl: u32,
    data_len: u16,
}

impl BasicData {
    pub fn from(cursor: &mut Cursor) -> DnsResult<Self> {
        let name = take_name(cursor)?;
        let _type = cursor.take_u16()?;
        let class = cursor.take_u16()?;
        if class != CLASS_IN {
            return Err(DnsError::UnsupportedClass(class));
        }
        let high = cursor.take_u16()? as u32;
        let low = cursor.take_u16()? as u32;
        let data_len = cursor.take_u16()?;
        Ok(BasicData {
            name,
            _type,
            class,
            ttl: high * 65536 + low,
            data_len,
        })
    }

    pub fn get_name(&self) -> &String {
        &self.name
    }

    pub fn get_ttl(&self) -> u32 {
        self.ttl
    }

    pub fn get_type(&self) -> u16 {
        self._type
    }

    pub fn get_data_len(&self) -> u16 {
        self.data_len
    }
}

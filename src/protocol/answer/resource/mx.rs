use crate::cursor::Cursor;
use crate::error::DnsResult;
use crate::protocol::answer::resource::{Resource, BasicData};
use crate::protocol::take_name;

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct MxResource {
    basic: BasicData,
    preference: u16,
    exchange: String,
}

impl Resource<String> for MxResource {
    fn get_name(&self) -> &String {
        self.basic.get_name()
    }

    fn get_ttl(&self) -> u32 {
        self.basic.get_ttl()
    }

    fn get_data(&self) -> &String {
        &self.exchange
    }
}

impl MxResource {
    pub fn create(basic: BasicData, cursor: &mut Cursor) -> DnsResult<Self> {
        let preference = cursor.take_u16()?;
        let exchange = take_name(cursor)?;
        Ok(MxResource {
            basic,
            preference,
            exchange,
        })
    }

    pub fn get_preference(&self) -> u16 {
        self.preference
    }
}

use crate::cursor::Cursor;
use crate::error::DnsResult;
use crate::protocol::answer::resource::{Resource, BasicData};
use crate::protocol::take_name;

/// A record whose RDATA is a single domain name (NS and CNAME).
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct AliasResource {
    basic: BasicData,
    data: String,
}

impl Resource<String> for AliasResource {
    fn get_name(&self) -> &String {
        self.basic.get_name()
    }

    fn get_ttl(&self) -> u32 {
        self.basic.get_ttl()
    }

    fn get_data(&self) -> &String {
        &self.data
    }
}

impl AliasResource {
    pub fn create(basic: BasicData, cursor: &mut Cursor) -> DnsResult<Self> {
        let data = take_name(cursor)?;
        Ok(AliasResource {
            basic,
            data,
        })
    }
}

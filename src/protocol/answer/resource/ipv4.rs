use crate::protocol::answer::resource::{Resource, BasicData};
use crate::cursor::Cursor;
use crate::error::{DnsError, DnsResult};
use std::net::Ipv4Addr;

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Ipv4Resource {
    basic: BasicData,
    data: Ipv4Addr,
}

impl Resource<Ipv4Addr> for Ipv4Resource {
    fn get_name(&self) -> &String {
        self.basic.get_name()
    }

    fn get_ttl(&self) -> u32 {
        self.basic.get_ttl()
    }

    fn get_data(&self) -> &Ipv4Addr {
        &self.data
    }
}

impl Ipv4Resource {
    pub fn create(basic: BasicData, cursor: &mut Cursor) -> DnsResult<Self> {
        if basic.get_data_len() != 4 {
            return Err(DnsError::Truncated(cursor.get_current_index()));
        }
        let data = Ipv4Addr::from(cursor.take_bytes::<4>()?);
        Ok(Ipv4Resource {
            basic,
            data,
        })
    }
}

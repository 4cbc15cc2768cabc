use crate::error::{DnsError, DnsResult};

/// Read position over a received datagram.
///
/// A cursor lives only for one decode pass and is handed explicitly to every
/// field reader; it is never stored inside the decoded values.
pub struct Cursor<'a> {
    buf: &'a [u8],
    current: usize,
}

impl<'a> Cursor<'a> {
    pub fn from(buf: &'a [u8]) -> Self {
        Cursor {
            buf,
            current: 0,
        }
    }

    pub fn at(&mut self, index: usize) {
        self.current = index;
    }

    pub fn get_current_index(&self) -> usize {
        self.current
    }

    pub fn get_buf(&self) -> &'a [u8] {
        self.buf
    }

    pub fn take(&mut self) -> DnsResult<u8> {
        let result = *self.buf.get(self.current)
            .ok_or(DnsError::Truncated(self.current))?;
        self.current += 1;
        Ok(result)
    }

    pub fn take_u16(&mut self) -> DnsResult<u16> {
        Ok(u16::from_be_bytes([self.take()?, self.take()?]))
    }

    pub fn take_bytes<const N: usize>(&mut self) -> DnsResult<[u8; N]> {
        let mut result = [0u8; N];
        result.copy_from_slice(self.take_slice(N)?);
        Ok(result)
    }

    pub fn take_slice(&mut self, len: usize) -> DnsResult<&'a [u8]> {
        let end = self.current + len;
        if end > self.buf.len() {
            return Err(DnsError::Truncated(self.buf.len()));
        }
        let result = &self.buf[self.current..end];
        self.current = end;
        Ok(result)
    }
}

use std::net::SocketAddr;
use std::time::Duration;
use async_trait::async_trait;
use tokio::net::UdpSocket;
use tokio::time;
use crate::buffer::PacketBuffer;
use crate::client::Transport;
use crate::error::{DnsError, DnsResult};

/// Talks to one name server, binding a new ephemeral socket for every
/// attempt. The socket is dropped when the attempt returns.
pub struct UdpTransport {
    server: SocketAddr,
}

impl UdpTransport {
    pub fn new(server: SocketAddr) -> Self {
        UdpTransport {
            server
        }
    }
}

#[async_trait]
impl Transport for UdpTransport {
    async fn exchange(&self, datagram: &[u8], timeout: Duration) -> DnsResult<Vec<u8>> {
        let socket = UdpSocket::bind(("0.0.0.0", 0)).await?;
        socket.send_to(datagram, self.server).await?;
        let mut buffer = PacketBuffer::new();
        match time::timeout(timeout, socket.recv_from(buffer.as_mut_slice())).await {
            Ok(Ok((len, src))) => {
                debug!("{} bytes from {}", len, src);
                buffer.set_len(len);
                Ok(buffer.to_vec())
            }
            Ok(Err(e)) => Err(e.into()),
            Err(_) => Err(DnsError::SocketTimeout),
        }
    }
}

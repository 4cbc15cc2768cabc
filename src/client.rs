use std::time::Duration;
use async_trait::async_trait;
use tokio::time::Instant;
use crate::error::{DnsError, DnsResult};
use crate::params::QueryParams;
use crate::protocol::{build_query, DnsQuery, DnsResponse};
use crate::system::next_id;

/// One send followed by one bounded wait for a reply.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Returns the raw reply, or `DnsError::SocketTimeout` when nothing
    /// arrived within `timeout`.
    async fn exchange(&self, datagram: &[u8], timeout: Duration) -> DnsResult<Vec<u8>>;
}

#[derive(Debug)]
pub struct QueryOutcome {
    pub response: DnsResponse,
    pub elapsed: Duration,
    pub retries: u32,
}

struct Attempt {
    query: DnsQuery,
    reply: DnsResult<Vec<u8>>,
    elapsed: Duration,
}

enum State {
    Idle,
    Sent(Attempt),
    TimedOut,
    Succeeded(QueryOutcome),
    Failed(DnsError),
}

pub struct DnsClient<'a, T: Transport> {
    transport: &'a T,
    params: &'a QueryParams,
}

impl<'a, T: Transport> DnsClient<'a, T> {
    pub fn new(transport: &'a T, params: &'a QueryParams) -> Self {
        DnsClient {
            transport,
            params,
        }
    }

    /// Drives one exchange to completion. A timeout is retried with a freshly
    /// built query until `max_retries` is used up; every other failure ends
    /// the exchange immediately.
    pub async fn send_query(&self) -> DnsResult<QueryOutcome> {
        let mut retries = 0u32;
        let mut state = State::Idle;
        loop {
            state = match state {
                State::Idle => self.send(retries).await,
                State::Sent(attempt) => self.receive(attempt, retries),
                State::TimedOut => {
                    let retries_left = self.params.max_retries - retries;
                    warn!("Socket timed out, retries left: {}", retries_left);
                    if retries_left > 0 {
                        retries += 1;
                        State::Idle
                    } else {
                        State::Failed(DnsError::MaxRetriesExceeded(self.params.max_retries))
                    }
                }
                State::Succeeded(outcome) => return Ok(outcome),
                State::Failed(e) => return Err(e),
            }
        }
    }

    async fn send(&self, retries: u32) -> State {
        let (query, datagram) = match build_query(next_id(), &self.params.name, self.params.query_type) {
            Ok(built) => built,
            Err(e) => return State::Failed(e),
        };
        debug!("attempt {} sends query id {} ({} bytes) to {}",
               retries + 1, query.get_id(), datagram.len(), self.params.server_addr());
        let start = Instant::now();
        let reply = self.transport.exchange(&datagram, self.params.timeout).await;
        State::Sent(Attempt {
            query,
            reply,
            elapsed: start.elapsed(),
        })
    }

    fn receive(&self, attempt: Attempt, retries: u32) -> State {
        let bytes = match attempt.reply {
            Ok(bytes) => bytes,
            Err(e) if e.is_recoverable() => return State::TimedOut,
            Err(e) => return State::Failed(e),
        };
        info!("received {} bytes after {:?}", bytes.len(), attempt.elapsed);
        if let Err(e) = validate_id(&attempt.query, &bytes) {
            return State::Failed(e);
        }
        match DnsResponse::decode(&bytes, attempt.query.encoded_len()) {
            Ok(response) => State::Succeeded(QueryOutcome {
                response,
                elapsed: attempt.elapsed,
                retries,
            }),
            Err(e) => {
                debug!("response could not be decoded: {:?}", e);
                State::Failed(e)
            }
        }
    }
}

fn validate_id(query: &DnsQuery, bytes: &[u8]) -> DnsResult<()> {
    if bytes.len() < 2 {
        return Err(DnsError::Truncated(bytes.len()));
    }
    let response = u16::from_be_bytes([bytes[0], bytes[1]]);
    if response != query.get_id() {
        return Err(DnsError::IdMismatch { request: query.get_id(), response });
    }
    Ok(())
}

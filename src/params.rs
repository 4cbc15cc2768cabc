use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;
use regex::Regex;
use crate::cli::Args;
use crate::config::Config;
use crate::error::{DnsError, DnsResult};
use crate::protocol::{build_query, QueryType};

const SERVER_PATTERN: &str = r"^@(\d+)\.(\d+)\.(\d+)\.(\d+)$";
const MAX_TIMEOUT_SECS: u64 = 60;
const MAX_RETRIES: i64 = 100;

/// Everything one invocation needs, validated before any socket is opened.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct QueryParams {
    pub name: String,
    pub query_type: QueryType,
    pub server: Ipv4Addr,
    pub port: u16,
    pub timeout: Duration,
    pub max_retries: u32,
}

impl QueryParams {
    pub fn from(args: &Args, config: &Config) -> DnsResult<Self> {
        let timeout_secs = args.timeout.unwrap_or(config.timeout_secs);
        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(invalid("The timeout option must be expressed in seconds, and must be at most 60 seconds."));
        }
        if timeout_secs == 0 {
            return Err(invalid("The timeout option must be at least 1 second."));
        }
        let max_retries = args.max_retries.unwrap_or(config.max_retries);
        if max_retries > MAX_RETRIES {
            return Err(invalid("The maximum number of retries option must be at most 100."));
        }
        if max_retries < 0 {
            return Err(invalid("The maximum number of retries option must be at least 0."));
        }
        let query_type = match (args.mx, args.ns) {
            (true, true) => return Err(invalid("The -mx and -ns options cannot be used together.")),
            (true, false) => QueryType::MX,
            (false, true) => QueryType::NS,
            (false, false) => QueryType::A,
        };
        let params = QueryParams {
            name: args.name.clone(),
            query_type,
            server: parse_server(&args.server)?,
            port: args.port.unwrap_or(config.port),
            timeout: Duration::from_secs(timeout_secs),
            max_retries: max_retries as u32,
        };
        build_query(0, &params.name, params.query_type)?;
        Ok(params)
    }

    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.server, self.port))
    }
}

fn parse_server(text: &str) -> DnsResult<Ipv4Addr> {
    let pattern = Regex::new(SERVER_PATTERN).map_err(|e| invalid(&e.to_string()))?;
    let captures = pattern.captures(text)
        .ok_or_else(|| invalid("The IPv4 address of the DNS server must be in @a.b.c.d format."))?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = captures[i + 1].parse()
            .map_err(|_| invalid("The IPv4 address of the DNS server must be comprised of octets of value between 0 and 255."))?;
    }
    Ok(Ipv4Addr::from(octets))
}

fn invalid(message: &str) -> DnsError {
    DnsError::InvalidArgument(message.to_string())
}

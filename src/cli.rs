use clap::{ArgAction, Parser};
use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Debug, Parser)]
#[command(
    name = "dnsclient",
    about = "Sends one DNS query over UDP and prints the records of the reply",
    override_usage = "dnsclient [-t timeout] [-r max-retries] [-p port] [-mx|-ns] @server name"
)]
pub struct Args {
    /// Seconds to wait for a reply before retransmitting (at most 60)
    #[arg(short = 't', value_name = "timeout")]
    pub timeout: Option<u64>,

    /// Number of retransmissions after a timeout (0 to 100)
    #[arg(short = 'r', value_name = "max-retries", allow_negative_numbers = true)]
    pub max_retries: Option<i64>,

    /// UDP port of the name server
    #[arg(short = 'p', value_name = "port")]
    pub port: Option<u16>,

    /// Ask for mail-exchange records
    #[arg(long = "mx")]
    pub mx: bool,

    /// Ask for name-server records
    #[arg(long = "ns")]
    pub ns: bool,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file holding defaults
    #[arg(long = "config", value_name = "file", default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// IPv4 address of the name server, written @a.b.c.d
    #[arg(value_name = "@server")]
    pub server: String,

    /// Domain name to query
    #[arg(value_name = "name")]
    pub name: String,
}

/// Accepts the single-dash `-mx` / `-ns` spellings.
pub fn rewrite_args<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    args.into_iter()
        .map(|arg| match arg.as_str() {
            "-mx" => "--mx".to_string(),
            "-ns" => "--ns".to_string(),
            _ => arg,
        })
        .collect()
}

pub fn parse() -> Args {
    Args::parse_from(rewrite_args(std::env::args()))
}

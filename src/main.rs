#[macro_use]
extern crate log;

mod buffer;
mod cli;
mod client;
mod config;
mod cursor;
mod display;
mod error;
mod params;
mod protocol;
mod socket;
mod system;

use log::LevelFilter;
use simple_logger::SimpleLogger;
use crate::client::DnsClient;
use crate::config::Config;
use crate::params::QueryParams;
use crate::socket::UdpTransport;
use crate::system::Result;

//dnsclient -mx @8.8.8.8 mcgill.ca
#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        println!("{}", display::render_error(&*e));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = cli::parse();
    let config = config::init_from_toml(&args.config).await?;
    init_logger(&config, args.verbose)?;
    let params = QueryParams::from(&args, &config)?;
    display::render_request(&params).iter().for_each(|line| println!("{}", line));

    let transport = UdpTransport::new(params.server_addr());
    let outcome = DnsClient::new(&transport, &params).send_query().await?;
    display::render_outcome(&outcome).iter().for_each(|line| println!("{}", line));
    Ok(())
}

fn init_logger(config: &Config, verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => config.level_filter()?,
        1 => config.level_filter()?.max(LevelFilter::Info),
        _ => LevelFilter::Debug,
    };
    SimpleLogger::new().with_level(level).init()?;
    Ok(())
}

use std::error::Error;
use rand::Rng;

pub type Result<T> = core::result::Result<T, Box<dyn Error>>;

pub fn next_id() -> u16 {
    rand::thread_rng().gen()
}

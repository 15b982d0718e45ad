#[macro_use]
extern crate log;

pub mod assembler;
pub mod chapters;
pub mod config;
pub mod crypto;
pub mod error;
pub mod groups;
pub mod key;
pub mod numeral;
pub mod pages;
pub mod payload;
pub mod source;
pub mod timestamp;
pub mod title;

pub use error::Error;

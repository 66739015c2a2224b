pub mod error;
pub mod header_source;
pub mod whoami;

mod error;
mod header_source;
mod whoami;

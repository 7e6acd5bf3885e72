//! The Discord objects exchanged with the REST API

pub mod channel;
pub mod embed;
pub mod flags;
pub mod gateway;
pub mod message;
pub mod snowflake;
pub mod user;

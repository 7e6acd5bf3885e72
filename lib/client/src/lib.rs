pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod rest;

pub mod structures {
    pub use structures::*;
}

pub use client::Client;
pub use config::ClientConfig;
pub use error::{HttpError, Result};
pub use http::{ReqwestTransport, Route, Transport};
pub use rest::Rest;

pub const API_URL: &str = "https://discord.com/api/v10";

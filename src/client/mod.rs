mod client_impl;
mod config;
mod factory;

pub use client_impl::MediaClient;
pub use config::{endpoint_url, MediaClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use factory::MediaClientBuilder;

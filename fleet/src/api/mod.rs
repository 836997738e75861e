mod client;
mod error;
#[cfg(test)]
pub mod test_server;

pub use client::HttpClient;
pub use error::ApiError;

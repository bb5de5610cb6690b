//! Remote auth service adapter

pub mod remote_client;

pub use remote_client::RemoteAuthClient;

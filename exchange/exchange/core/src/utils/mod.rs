pub mod crypto;
pub mod http_client;
pub mod http_utils;
pub mod sign;

pub mod components;
pub mod handlers;
mod http;
pub mod pages;

pub use http::*;

//! Image source implementations

mod http;

pub use http::HttpImageSource;

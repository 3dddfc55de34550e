// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;
pub mod throttle;

pub use net::{FetchError, HttpClient};
pub use throttle::Throttle;

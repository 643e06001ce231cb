#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod builtins;
pub mod value;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn doctor_banner() -> String {
    format!("gleblang-core v{} on {}", version(), std::env::consts::OS)
}

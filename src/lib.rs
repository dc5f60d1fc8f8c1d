pub mod client;
pub mod config;
pub mod types;

pub use client::{KeepcomClient, PROBE_PATHS, SmokeRun};
pub use config::{DEFAULT_BASE_URL, ProbeConfig};
pub use types::{LoginOutcome, LoginRequest, LoginResponse, ProbeReport};

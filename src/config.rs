use std::net::SocketAddr;

pub const DEFAULT_VERSION: &str = "dev";
pub const DEFAULT_LOG_FILTER: &str = "user_service=info";
pub const PORT: u16 = 3000;

/// Startup configuration, read once from the environment before serving.
#[derive(Debug, Clone)]
pub struct Config {
    pub version: String,
    pub bind_addr: SocketAddr
}

impl Config {

    pub fn from_env() -> Self {

        let version = resolve_version(std::env::var("VERSION").ok().as_deref());

        Config {
            version,
            bind_addr: ([0, 0, 0, 0], PORT).into()
        }

    }

}

// an empty VERSION counts as unset
pub fn resolve_version(env_value: Option<&str>) -> String {

    match env_value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => DEFAULT_VERSION.to_string()
    }

}

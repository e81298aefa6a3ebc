use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 3000;
    pub const BIND_ADDRESS: &str = "0.0.0.0";
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (env in production, a map in tests)
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup(env_vars::PORT) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "{} is not a valid port ({:?}), using {}",
                    env_vars::PORT,
                    raw,
                    defaults::PORT
                );
                defaults::PORT
            }),
            None => defaults::PORT,
        };

        let bind_address = lookup(env_vars::BIND_ADDRESS)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| defaults::BIND_ADDRESS.to_string());

        Self { port, bind_address }
    }
}

use std::net::{IpAddr, Ipv4Addr};
use rocket::figment::Figment;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/pemilu-list-db";
pub const DEFAULT_TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub address: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub store_backend: StoreBackend,
    pub template_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.into(),
            store_backend: StoreBackend::Postgres,
            template_dir: DEFAULT_TEMPLATE_DIR.into(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `PORT`, `ADDRESS`, `DATABASE_URL`, `STORE_BACKEND`
    /// and `TEMPLATE_DIR`. Unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            match port.trim().parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("Ignoring invalid PORT {:?}, using {}", port, DEFAULT_PORT),
            }
        }

        if let Some(address) = lookup("ADDRESS") {
            match address.trim().parse() {
                Ok(address) => config.address = address,
                Err(_) => warn!("Ignoring invalid ADDRESS {:?}", address),
            }
        }

        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.trim().is_empty()) {
            config.database_url = url;
        }

        if let Some(backend) = lookup("STORE_BACKEND") {
            match backend.trim().to_ascii_lowercase().as_str() {
                "postgres" | "postgresql" => config.store_backend = StoreBackend::Postgres,
                "memory" => config.store_backend = StoreBackend::Memory,
                other => warn!("Unknown STORE_BACKEND {:?}, using postgres", other),
            }
        }

        if let Some(dir) = lookup("TEMPLATE_DIR").filter(|d| !d.trim().is_empty()) {
            config.template_dir = dir;
        }

        config
    }

    pub fn figment(&self) -> Figment {
        rocket::Config::figment()
            .merge(("address", self.address))
            .merge(("port", self.port))
            .merge(("template_dir", self.template_dir.as_str()))
    }
}

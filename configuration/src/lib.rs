use std::path::PathBuf;
use std::time::Duration;
use serde::Deserialize;
use dns::{Flags, QueryOptions, DEFAULT_QUERY_ID};

pub fn get_config<'de, T: Deserialize<'de>>(config_path: PathBuf) -> Result<T, config::ConfigError> {
    let f = config::File::from(config_path);
    let config = config::Config::builder()
        .add_source(f)
        .build()?;
    config.try_deserialize::<T>()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DigConfiguration {
    pub dns: DnsConfiguration,
    pub query: QueryConfiguration,
}

impl DigConfiguration {
    /// Loads `config_path`, falling back to the defaults when it does not exist.
    pub fn load(config_path: PathBuf) -> Result<Self, config::ConfigError> {
        if config_path.exists() {
            get_config(config_path)
        } else {
            Ok(Self::default())
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DnsConfiguration {
    pub server_address: String,
    timeout_ms: Option<u64>,
}

impl DnsConfiguration {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub fn set_timeout_ms(&mut self, timeout_ms: u64) {
        self.timeout_ms = Some(timeout_ms);
    }
}

impl Default for DnsConfiguration {
    fn default() -> Self {
        Self {
            server_address: String::from("8.8.8.8:53"),
            timeout_ms: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct QueryConfiguration {
    pub id: u16,
    pub answer_count: u16,
    pub recursion_desired: bool,
}

impl QueryConfiguration {
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            id: self.id,
            flags: Flags {
                rd: self.recursion_desired as u16,
                ..Default::default()
            },
            answer_count: self.answer_count,
        }
    }
}

impl Default for QueryConfiguration {
    fn default() -> Self {
        Self {
            id: DEFAULT_QUERY_ID,
            answer_count: 1,
            recursion_desired: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn from_toml(s: &str) -> DigConfiguration {
        Config::builder()
            .add_source(File::from_str(s, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn empty_file_keeps_defaults() {
        let c = from_toml("");
        assert_eq!(c.dns.server_address, "8.8.8.8:53");
        assert_eq!(c.dns.timeout(), None);
        assert_eq!(c.query.query_options(), QueryOptions::default());
    }

    #[test]
    fn values_override_defaults() {
        let c = from_toml(
            r#"
            [dns]
            server_address = "114.114.114.114:53"
            timeout_ms = 1500

            [query]
            id = 4660
            answer_count = 0
            recursion_desired = true
            "#,
        );

        assert_eq!(c.dns.server_address, "114.114.114.114:53");
        assert_eq!(c.dns.timeout(), Some(Duration::from_millis(1500)));

        let options = c.query.query_options();
        assert_eq!(options.id, 0x1234);
        assert_eq!(options.answer_count, 0);
        assert_eq!(options.flags.pack(), 0x0100);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let c = DigConfiguration::load(PathBuf::from("./no_such_dig_config.toml")).unwrap();
        assert_eq!(c.query.id, DEFAULT_QUERY_ID);
    }
}

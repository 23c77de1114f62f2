use std::path::PathBuf;
use argh::FromArgs;
use configuration::DigConfiguration;

fn default_config_path () -> PathBuf {
    PathBuf::from("./dig_config.toml")
}

#[derive(Debug, FromArgs)]
#[argh(description = "send one A query for a domain and print the decoded question and answer records")]
pub struct CliArgs {
    #[argh(positional, description = "domain name to query")]
    pub domain: String,

    #[argh(
        option,
        description = "config file path, default: './dig_config.toml'",
        default = "default_config_path()"
    )]
    pub config: PathBuf,

    #[argh(option, short = 's', description = "resolver address as host:port")]
    pub server: Option<String>,

    #[argh(option, description = "query id")]
    pub id: Option<u16>,

    #[argh(option, description = "answer count written into the query header")]
    pub answer_count: Option<u16>,

    #[argh(switch, description = "set the recursion desired bit")]
    pub recursion_desired: bool,

    #[argh(option, description = "give up waiting for the reply after this many milliseconds")]
    pub timeout_ms: Option<u64>,
}

impl CliArgs {
    pub fn apply(&self, config: &mut DigConfiguration) {
        if let Some(server) = &self.server {
            config.dns.server_address = server.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.dns.set_timeout_ms(timeout_ms);
        }
        if let Some(id) = self.id {
            config.query.id = id;
        }
        if let Some(answer_count) = self.answer_count {
            config.query.answer_count = answer_count;
        }
        if self.recursion_desired {
            config.query.recursion_desired = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::from_args(&["dig"], args).unwrap()
    }

    #[test]
    fn defaults() {
        let args = parse(&["example.com"]);
        assert_eq!(args.domain, "example.com");
        assert_eq!(args.config, default_config_path());

        let mut config = DigConfiguration::default();
        args.apply(&mut config);
        assert_eq!(config.dns.server_address, "8.8.8.8:53");
        assert_eq!(config.query.answer_count, 1);
    }

    #[test]
    fn flags_override_config() {
        let args = parse(&[
            "-s",
            "1.1.1.1:53",
            "--id",
            "7",
            "--answer-count",
            "0",
            "--recursion-desired",
            "--timeout-ms",
            "200",
            "z.cn",
        ]);

        let mut config = DigConfiguration::default();
        args.apply(&mut config);
        assert_eq!(config.dns.server_address, "1.1.1.1:53");
        assert_eq!(config.dns.timeout(), Some(std::time::Duration::from_millis(200)));

        let options = config.query.query_options();
        assert_eq!(options.id, 7);
        assert_eq!(options.answer_count, 0);
        assert_eq!(options.flags.rd, 1);
    }
}

use std::collections::HashSet;
use std::fs::File;

use serde::{
    Deserialize,
    Serialize,
};
use tb_api::v1::Client;
use tracing::*;

// Organizations aren't managed through the API; the set of clients a container can reference is
// seeded from the server config file at startup.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(default)]
    pub clients: Vec<Client>,
}

impl ServerConfig {
    pub fn load(filename: &str) -> anyhow::Result<ServerConfig> {
        let config: ServerConfig = serde_yaml::from_reader(File::open(filename)?)?;
        config.warn_duplicate_clients();
        Ok(config)
    }

    pub fn load_or_default(maybe_filename: Option<&str>) -> anyhow::Result<ServerConfig> {
        match maybe_filename {
            Some(filename) => ServerConfig::load(filename),
            None => {
                info!("no config file given, starting without any clients");
                Ok(ServerConfig::default())
            },
        }
    }

    fn warn_duplicate_clients(&self) {
        let mut seen = HashSet::new();
        for client in &self.clients {
            if !seen.insert(client.id.as_str()) {
                warn!("client id {} is configured more than once; the last entry wins", client.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_parse_config() {
        let config_yml = "
---
clients:
  - id: 12345-abcdef
    name: Testorganization
  - id: 67890-ghijkl
    name: Labor Nord
";

        let config: ServerConfig = serde_yaml::from_str(config_yml).unwrap();
        assert_eq!(config.clients.len(), 2);
        assert_eq!(config.clients[0], Client { id: "12345-abcdef".into(), name: "Testorganization".into() });
    }

    #[rstest]
    fn test_parse_empty_config() {
        let config: ServerConfig = serde_yaml::from_str("--- {}").unwrap();
        assert!(config.clients.is_empty());
    }

    #[rstest]
    fn test_load_or_default_without_file() {
        let config = ServerConfig::load_or_default(None).unwrap();
        assert!(config.clients.is_empty());
    }

    #[rstest]
    fn test_load_missing_file() {
        assert!(ServerConfig::load("/does/not/exist.yml").is_err());
    }
}

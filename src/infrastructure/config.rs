use config::{Config, Environment, File, Map};
use serde::Deserialize;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/800x400";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub fleet: FleetSettings,
    #[serde(default)]
    pub assets: AssetSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FleetSettings {
    #[serde(default = "default_sprinters")]
    pub sprinters: usize,
    #[serde(default = "default_party_buses")]
    pub party_buses: usize,
    /// Seed for synthetic data; unset means a new fleet on every start.
    pub seed: Option<u64>,
}

impl Default for FleetSettings {
    fn default() -> Self {
        Self {
            sprinters: default_sprinters(),
            party_buses: default_party_buses(),
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetSettings {
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_sprinters() -> usize {
    7
}

fn default_party_buses() -> usize {
    8
}

fn default_placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

/// `FLEET__SECTION__KEY` variables; `vars` replaces the process environment when given.
fn environment(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix("FLEET")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .source(vars)
}

/// Load `config/app.*` (optional) overlaid with `FLEET__*` environment variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = Config::builder()
        .add_source(File::with_name("config/app").required(false))
        .add_source(environment(None))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = parse("");
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.fleet.sprinters, 7);
        assert_eq!(config.fleet.party_buses, 8);
        assert_eq!(config.fleet.seed, None);
        assert_eq!(config.assets.placeholder_image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_partial_overrides() {
        let config = parse(
            r#"
            [server]
            bind = "127.0.0.1:3000"

            [fleet]
            party_buses = 2
            seed = 42
            "#,
        );
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.fleet.sprinters, 7);
        assert_eq!(config.fleet.party_buses, 2);
        assert_eq!(config.fleet.seed, Some(42));
    }

    #[test]
    fn test_environment_overrides_file() {
        let vars = Map::from([
            ("FLEET__SERVER__BIND".to_string(), "127.0.0.1:9000".to_string()),
            ("FLEET__FLEET__SEED".to_string(), "7".to_string()),
            ("OTHER__FLEET__SPRINTERS".to_string(), "1".to_string()),
        ]);
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(
                "[server]\nbind = \"0.0.0.0:8080\"\n[fleet]\nseed = 1\n",
                FileFormat::Toml,
            ))
            .add_source(environment(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:9000");
        assert_eq!(config.fleet.seed, Some(7));
        assert_eq!(config.fleet.sprinters, 7);
    }
}

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::Level;
use crate::core::library::LibraryResult;

const ENV_PREFIX: &str = "LMS_";

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}


// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    #[serde(deserialize_with = "as_text")]
    pub branch_id: String,
    #[serde(deserialize_with = "as_text")]
    pub log_level: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            log_level: "info".to_string(),
        }
    }

    // Layers LMS_BRANCH_ID and LMS_LOG_LEVEL over the defaults.
    pub fn from_env() -> LibraryResult<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Configuration::new("dev")))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        Ok(config)
    }

    // Only level names are accepted; anything else, numbers included, means info.
    pub fn max_level(&self) -> Level {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

// Env values that look like numbers or flags arrive typed; keep them as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum EnvValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

fn as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where D: Deserializer<'de> {
    Ok(match EnvValue::deserialize(deserializer)? {
        EnvValue::Text(s) => s,
        EnvValue::Integer(n) => n.to_string(),
        EnvValue::Float(n) => n.to_string(),
        EnvValue::Flag(b) => b.to_string(),
    })
}

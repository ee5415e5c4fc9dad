use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

// MongoDB config comes from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// Present iff MONGODB_URL/MONGO_URL is set; absent means the
    /// in-memory store serves this process
    pub mongodb: Option<MongoConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = if mongo_configured() {
            Some(MongoConfig::from_env()?)
        } else {
            None
        };
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
        })
    }
}

fn mongo_configured() -> bool {
    std::env::var("MONGODB_URL").is_ok() || std::env::var("MONGO_URL").is_ok()
}

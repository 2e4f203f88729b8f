pub mod config;
pub mod context;
mod error;
mod reader;

pub use config::{ConfigError, EnvLoader, RawEnv};
pub use context::AppContext;
pub use error::Error;
pub use reader::{get_env, Configuration, EnvReader};

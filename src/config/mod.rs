//! Populating the raw environment value handed to the reader.

mod builder;
mod env;
mod error;
mod file;
mod raw;
mod source;

pub use builder::EnvLoader;
pub use env::EnvSource;
pub use error::ConfigError;
pub use file::FileSource;
pub use raw::RawEnv;
pub use source::{CompiledSource, RawSource};

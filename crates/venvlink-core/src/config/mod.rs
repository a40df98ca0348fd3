//! venvlink configuration layer
//!
//! All environment variable reads live here; the linker and the CLI only see
//! structured config.
//!
//! - `loader`: `.env` loading plus `env_or` / `env_optional` / `env_bool`
//! - `schema`: `LinkerConfig`, `ObservabilityConfig`
//! - `env_keys`: key constants

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or, load_dotenv, load_dotenv_from_dir};
pub use schema::{LinkerConfig, ObservabilityConfig, DEFAULT_PYTHON_VERSION};

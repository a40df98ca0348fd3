//! Expose a system-installed Python library inside a managed virtualenv.
//!
//! - `probe`: where the library and the venv live
//! - `site_packages`: link target path and interpreter version
//! - `linker`: idempotent symlink creation
//! - `installer`: delegated `<manager> install`
//! - `bootstrap`: the aggregate, returning `BootstrapError` instead of exiting

pub mod bootstrap;
pub mod error;
pub mod installer;
pub mod linker;
pub mod probe;
pub mod site_packages;

pub use bootstrap::{bootstrap, plan, BootstrapOptions, BootstrapReport};
pub use error::BootstrapError;
pub use installer::{DependencyInstaller, ManagerInstaller};
pub use linker::{ensure_link, link_status, LinkOutcome, LinkPlan, LinkStatus};
pub use probe::{CommandProbe, EnvironmentProbe};

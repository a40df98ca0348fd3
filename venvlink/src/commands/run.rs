//! `venvlink [all|link|install]`

use venvlink_core::config::LinkerConfig;
use venvlink_env::{
    bootstrap, BootstrapError, BootstrapOptions, BootstrapReport, CommandProbe, LinkOutcome,
    ManagerInstaller,
};

/// Run the selected steps against the real interpreter and manager.
pub fn cmd_run(config: &LinkerConfig, options: BootstrapOptions) -> Result<(), BootstrapError> {
    let probe = CommandProbe::new(config);
    let installer = ManagerInstaller::new(config.manager.clone());
    let report = bootstrap(&probe, &installer, config, options)?;
    eprintln!("{}", summary(&report));
    Ok(())
}

/// One line per completed step.
pub fn summary(report: &BootstrapReport) -> String {
    let mut lines = Vec::new();
    if let (Some(plan), Some(outcome)) = (&report.plan, report.link) {
        let verb = match outcome {
            LinkOutcome::Created => "Linked",
            LinkOutcome::AlreadyPresent => "Already linked",
        };
        lines.push(format!(
            "✓ {}: {} -> {}",
            verb,
            plan.target.display(),
            plan.library_path.display()
        ));
    }
    if report.dependencies_installed {
        lines.push("✓ Dependencies installed".to_string());
    }
    lines.join("\n")
}

//! `venvlink check`: resolve everything, change nothing.

use anyhow::Result;
use serde::Serialize;
use venvlink_core::config::LinkerConfig;
use venvlink_env::{link_status, plan, BootstrapError, CommandProbe, LinkPlan, LinkStatus};

#[derive(Debug, Serialize)]
pub struct CheckReport {
    #[serde(flatten)]
    pub plan: LinkPlan,
    pub link: LinkStatus,
}

/// Resolve the plan and inspect the target.
pub fn inspect(config: &LinkerConfig) -> Result<CheckReport, BootstrapError> {
    let probe = CommandProbe::new(config);
    let plan = plan(&probe, config)?;
    let link = link_status(&plan.target);
    Ok(CheckReport { plan, link })
}

pub fn render_text(report: &CheckReport) -> String {
    let state = match &report.link {
        LinkStatus::Missing => "missing (run `venvlink link`)".to_string(),
        LinkStatus::Symlink { points_to } if *points_to == report.plan.library_path => {
            "linked".to_string()
        }
        LinkStatus::Symlink { points_to } => {
            format!("link to {} (not the library)", points_to.display())
        }
        LinkStatus::Occupied => "present (not a link, left as is)".to_string(),
    };
    format!(
        "library:        {}\n\
         library path:   {}\n\
         venv:           {}\n\
         python:         {}\n\
         target:         {}\n\
         state:          {}",
        report.plan.library,
        report.plan.library_path.display(),
        report.plan.venv_root.display(),
        report.plan.python_version,
        report.plan.target.display(),
        state
    )
}

pub fn render_json(report: &CheckReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

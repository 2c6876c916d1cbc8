use minijinja::context;

use crate::adapters::templates::{SETUP_SCRIPT, TemplateCatalog};
use crate::domain::{AppError, FleetConfig, TeamName};

/// Host directory holding per-team artifact directories.
pub const ARTIFACTS_DIR: &str = "mlflow_artifacts";

/// Directory creation and permission statements, one pair per team, in order.
pub fn team_directory_commands(teams: &[TeamName]) -> Vec<String> {
    teams
        .iter()
        .map(|team| {
            format!(
                "mkdir -p \"{dir}/{team}\"\nchmod 755 \"{dir}/{team}\"",
                dir = ARTIFACTS_DIR,
                team = team
            )
        })
        .collect()
}

/// Render `setup.sh`. Marking it executable is the caller's job.
pub fn render_setup_script(
    templates: &TemplateCatalog,
    config: &FleetConfig,
) -> Result<String, AppError> {
    let mkdir_commands = team_directory_commands(&config.teams.team_list).join("\n");

    templates.render(
        SETUP_SCRIPT,
        context! {
            artifacts_dir => ARTIFACTS_DIR,
            mkdir_commands => mkdir_commands,
            db_password => &config.database.local_password,
        },
    )
}

//! Implementation of the `seedkit new` command.
//!
//! Responsibility: resolve the name and the starter paths, load the starter
//! config, call the core scaffold service, and display results. No business
//! logic lives here.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use seedkit_adapters::{LocalFilesystem, StarterConfigLoader};
use seedkit_core::{
    application::{ScaffoldPlan, ScaffoldReport, ScaffoldService},
    domain::ProjectName,
    error::SeedkitError,
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Template location relative to the executable's directory.
const DEFAULT_TEMPLATE_DIR: &str = "../templates/default";
/// Starter config location relative to the executable's directory.
const DEFAULT_STARTER_CONFIG: &str = "../config.json";

/// Execute the `seedkit new` command.
///
/// Dispatch sequence:
/// 1. Take the name from the argument, the prompt, or the default
/// 2. Validate it
/// 3. Resolve template / starter config / destination paths
/// 4. Load and validate the starter config
/// 5. Run the pipeline via `ScaffoldService`
/// 6. Print the report
///
/// Nothing on disk changes before step 5.
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1-2. Name
    let raw_name = match args.name.as_deref() {
        Some(name) => name.to_owned(),
        None => prompt_name(&config.defaults.project_name, args.yes || global.quiet)?,
    };
    let project_name = ProjectName::parse(&raw_name).map_err(SeedkitError::from)?;

    // 3. Paths
    let template_dir = resolve_starter_path(
        args.template_dir.as_deref(),
        config.paths.template_dir.as_deref(),
        DEFAULT_TEMPLATE_DIR,
        "template directory",
    )?;
    let starter_config_path = resolve_starter_path(
        args.starter_config.as_deref(),
        config.paths.starter_config.as_deref(),
        DEFAULT_STARTER_CONFIG,
        "starter config",
    )?;
    let parent = match args.output_dir {
        Some(dir) => dir,
        None => std::env::current_dir()
            .with_cli_context(|| "failed to read the current directory")?,
    };
    let destination = parent.join(project_name.as_str());

    debug!(
        template = %template_dir.display(),
        starter_config = %starter_config_path.display(),
        destination = %destination.display(),
        "Paths resolved"
    );

    // 4. Starter config (validates the template scope)
    let starter = StarterConfigLoader::new(&starter_config_path).load()?;

    // 5. Scaffold
    let plan = ScaffoldPlan::new(project_name, template_dir, destination);
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    info!(project = %plan.project_name, path = %plan.destination.display(), "Scaffold started");
    output.header(&format!("Creating '{}'...", plan.project_name))?;

    let spinner = output.spinner();
    let result = service.scaffold_with_progress(&plan, &starter, |stage| {
        if let Some(pb) = &spinner {
            pb.set_message(stage.to_string());
        } else {
            debug!(%stage, "Stage started");
        }
    });
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let report = result?;

    // 6. Report
    print_report(&report, &output)
}

/// Pick the explicit path, else the configured one, else the one next to
/// the executable.
fn resolve_starter_path(
    flag: Option<&Path>,
    configured: Option<&Path>,
    default_relative: &str,
    what: &'static str,
) -> CliResult<PathBuf> {
    if let Some(path) = flag.or(configured) {
        return Ok(path.to_path_buf());
    }
    let exe = std::env::current_exe().map_err(|e| CliError::PathResolution {
        what,
        reason: format!("cannot determine executable location: {e}"),
    })?;
    let exe_dir = exe.parent().ok_or_else(|| CliError::PathResolution {
        what,
        reason: format!("executable '{}' has no parent directory", exe.display()),
    })?;
    Ok(exe_dir.join(default_relative))
}

/// Ask for a name, offering `default`. Falls back to `default` without
/// asking when `skip` is set or stdin is not a terminal.
fn prompt_name(default: &str, skip: bool) -> CliResult<String> {
    if skip || !std::io::stdin().is_terminal() {
        return Ok(default.to_owned());
    }
    read_name(default)
}

#[cfg(feature = "interactive")]
fn read_name(default: &str) -> CliResult<String> {
    let value: String = dialoguer::Input::new()
        .with_prompt("Project name (root package name)")
        .default(default.to_owned())
        .interact_text()
        .map_err(|e| CliError::IoError {
            message: "failed to read project name".into(),
            source: std::io::Error::other(e),
        })?;
    let value = value.trim();
    Ok((if value.is_empty() { default } else { value }).to_owned())
}

#[cfg(not(feature = "interactive"))]
fn read_name(default: &str) -> CliResult<String> {
    Ok(default.to_owned())
}

fn print_report(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(report);
    }

    let name = &report.project_name;
    output.success(&format!("Created {name}"))?;
    output.success(&format!("Root package name: {}", report.root_package_name))?;
    output.success(&format!("Workspace scope: {}", report.workspace_scope))?;
    if report.rewrite.oversized_skipped > 0 {
        output.warning(&format!(
            "{} large file(s) were not rescoped; check them by hand",
            report.rewrite.oversized_skipped
        ))?;
    }
    output.print("Next:")?;
    output.print(&format!("  cd {name}"))?;
    output.print("  bun install")?;
    output.print("  bun run dev")?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

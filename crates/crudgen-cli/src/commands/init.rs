//! `crudgen init` — install the built-in skeleton set.

use crudgen_adapters::{LocalFilesystem, skeletons};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Install the built-in skeletons into the configured skeleton directory.
pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let dir = args.skeleton_dir.unwrap_or_else(|| config.skeleton_dir());

    output.info(&format!("Installing skeletons into {}...", dir.display()))?;

    let filesystem = LocalFilesystem::new();
    let installed =
        skeletons::install(&filesystem, &dir, args.force).map_err(CliError::Core)?;

    for path in &installed {
        output.print(&format!("  {}", path.display()))?;
    }
    output.success(&format!(
        "Installed {} skeleton files into {}",
        installed.len(),
        dir.display()
    ))?;

    Ok(())
}

//! Check command implementation.
//!
//! Validates options and package.json without generating descriptors.

use bundlecfg_config::{normalize, plan, FsValidator, OptionsValidator, Variant};

use crate::cli::CheckArgs;
use crate::config;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load options from file and environment
/// 2. Schema checks, manifest presence, explicit entry point on disk
/// 3. Parse package.json and normalize (catches a missing package name)
/// 4. Report the variants and output files that would be produced
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let root = config::project_dir(&args.project)?;
    let options = config::load_project_options(&args.project, &root)?;
    FsValidator::new(&root).validate(&options)?;
    ui::success("Options are valid");

    let ctx = config::build_context(&root, None)?;
    let normalized = normalize(&options, &ctx)?;
    ui::success(&format!(
        "package.json is valid (export name '{}')",
        normalized.export_name
    ));

    for variant in plan(&options.target) {
        let file = match variant {
            Variant::Cjs => &normalized.outputs.cjs,
            Variant::Esm => &normalized.outputs.esm,
            Variant::Umd => &normalized.outputs.umd,
        };
        ui::info(&format!("  {variant} → {}", file.display()));
    }

    if !ctx.project_dir().join(&normalized.input).exists() {
        ui::warning(&format!(
            "Entry point {} does not exist yet",
            normalized.input.display()
        ));
    }

    ui::success("All checks passed!");
    Ok(())
}

//! Generate command implementation.

use std::fs;
use std::io::Write;

use bundlecfg_config::{configure, Configured};

use crate::cli::GenerateArgs;
use crate::config;
use crate::error::Result;
use crate::ui;

/// Render descriptors as JSON text.
pub fn render(configured: &Configured, compact: bool) -> Result<String> {
    let mut text = if compact {
        serde_json::to_string(configured)?
    } else {
        serde_json::to_string_pretty(configured)?
    };
    text.push('\n');
    Ok(text)
}

/// Execute the generate command.
///
/// 1. Resolve the project directory and load layered options
/// 2. Read package.json into a build context
/// 3. Build descriptors for every requested target
/// 4. Print them, or write them to `--out`
pub fn execute(args: GenerateArgs) -> Result<()> {
    let root = config::project_dir(&args.project)?;
    let options = config::load_options(&args, &root)?;
    let ctx = config::build_context(&root, args.node_env.as_deref())?;

    tracing::info!(
        project = %root.display(),
        targets = ?options.target.iter().map(|t| t.as_str()).collect::<Vec<_>>(),
        "generating build descriptors"
    );

    let configured = configure(&options, &ctx, None)?;
    let text = render(&configured, args.compact)?;

    match &args.out {
        Some(path) => {
            let path = root.join(path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, text)?;
            ui::success(&format!(
                "Wrote {} descriptor(s) to {}",
                configured.count(),
                path.display()
            ));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

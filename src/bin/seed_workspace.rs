use std::path::{Path, PathBuf};

use clap::Parser;

use catering_desk::constants::DEFAULT_WORKSPACE_FILE;
use catering_desk::error::{CateringError, Result};
use catering_desk::logging;
use catering_desk::state::{save_workspace, Workspace};

#[derive(Parser, Debug)]
#[command(name = "seed_workspace")]
#[command(about = "Write the demo catering workspace to a JSON file")]
struct Args {
    /// Output path
    #[arg(long, default_value = DEFAULT_WORKSPACE_FILE)]
    out: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

/// Write the demo workspace to `out`, refusing to replace a file unless `force` is set.
fn write_seed(out: &Path, force: bool) -> Result<Workspace> {
    if out.exists() && !force {
        return Err(CateringError::InvalidArgument(format!(
            "{} already exists; pass --force to overwrite it",
            out.display()
        )));
    }

    let workspace = Workspace::seeded();
    save_workspace(out, &workspace)?;
    Ok(workspace)
}

fn main() {
    logging::init();
    let args = Args::parse();

    match write_seed(&args.out, args.force) {
        Ok(workspace) => println!(
            "Wrote demo workspace to {} ({} users, {} events, {} menus)",
            args.out.display(),
            workspace.users.len(),
            workspace.events.len(),
            workspace.menus.len()
        ),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

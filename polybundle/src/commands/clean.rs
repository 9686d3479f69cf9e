//! Build output cleanup.

use anyhow::Result;
use polybundle_core::clean_all;

use crate::formatting::{print_key_value, print_section_header, print_success};

use super::Workspace;

pub fn cmd_clean(workspace: &Workspace, packages: Vec<String>) -> Result<()> {
    let packages = workspace.load_packages(&packages)?;

    print_section_header("[Clean]");

    let removed = clean_all(&packages, &workspace.config.dist_dir)?;
    for dist in &removed {
        print_success(&dist.display().to_string());
    }

    println!();
    print_key_value(
        "Cleaned",
        &format!("{} of {} packages", removed.len(), packages.len()),
    );
    println!();

    Ok(())
}

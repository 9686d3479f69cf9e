//! Discovery and plan inspection commands.

use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use polybundle_core::Package;

use crate::formatting::{
    print_package_table, print_plan_table, print_section_header, print_warning,
};

use super::Workspace;

pub fn cmd_plan(workspace: &Workspace, packages: Vec<String>, json: bool) -> Result<()> {
    let packages = workspace.load_packages(&packages)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&packages)?);
        return Ok(());
    }

    print_section_header("[Build Plan]");

    if packages.is_empty() {
        print_warning("No packages found");
        println!();
        return Ok(());
    }

    for pkg in &packages {
        println!(
            "  {} {}",
            pkg.display_name().bold().white(),
            format!("({})", pkg.path.display()).bright_black()
        );

        if pkg.configs.is_empty() {
            println!("    {}", "nothing to build".bright_black());
            println!();
            continue;
        }

        let base = &pkg.path;
        let rows: Vec<_> = pkg
            .configs
            .iter()
            .flat_map(|config| {
                config.outputs.iter().map(move |output| {
                    (
                        config.bundler.kind().to_string(),
                        output.format.to_string(),
                        relative_to(&output.file, base),
                        output_notes(output),
                    )
                })
            })
            .collect();
        print_plan_table(&rows);
        println!();
    }

    Ok(())
}

pub fn cmd_list(workspace: &Workspace, json: bool) -> Result<()> {
    let packages = workspace.load_packages(&[])?;

    if json {
        let entries: Vec<_> = packages
            .iter()
            .map(|pkg| {
                serde_json::json!({
                    "name": pkg.name,
                    "path": pkg.path,
                    "configs": pkg.configs.len(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    print_section_header("[Packages]");

    if packages.is_empty() {
        print_warning("No packages found");
    } else {
        println!(
            "  {} Found {} {}",
            "OK".green(),
            packages.len().to_string().bold().cyan(),
            "packages".bold()
        );
        println!();
        let rows: Vec<_> = packages.iter().map(package_row).collect();
        print_package_table(&rows);
    }
    println!();

    Ok(())
}

fn package_row(pkg: &Package) -> (String, String, usize) {
    (
        pkg.display_name(),
        pkg.path.display().to_string(),
        pkg.configs.len(),
    )
}

fn relative_to(file: &Path, base: &Path) -> String {
    file.strip_prefix(base)
        .unwrap_or(file)
        .display()
        .to_string()
}

fn output_notes(output: &polybundle_core::OutputTarget) -> String {
    let mut notes = Vec::new();
    if output.exports.is_some() {
        notes.push("named exports".to_string());
    }
    if let Some(name) = &output.name {
        notes.push(format!("global {}", name));
    }
    if output.sourcemap {
        notes.push("sourcemap".to_string());
    }
    if !output.globals.is_empty() {
        let externals = output
            .globals
            .iter()
            .map(|(module, global)| format!("{} -> {}", module, global))
            .collect::<Vec<_>>()
            .join(", ");
        notes.push(format!("externals: {}", externals));
    }
    notes.join("; ")
}

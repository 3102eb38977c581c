//! Human-facing terminal output
//!
//! Styled listings for the bundles and repos commands. Machine-readable
//! documents (port specs, assembled universes) never go through here;
//! they are serialized straight to stdout by the commands.

use std::path::PathBuf;

use console::Style;

use crate::config::Config;
use crate::source::Repo;
use crate::specs::BundleSpec;

/// Print every bundle with its apps, marking activated ones.
pub fn display_bundles<'a>(
    bundles: impl Iterator<Item = (&'a String, &'a BundleSpec)>,
    activated: &[String],
) {
    let mut any = false;
    for (name, bundle) in bundles {
        any = true;
        let marker = if activated.contains(name) { "*" } else { " " };
        println!(
            "{} {}",
            Style::new().green().apply_to(marker),
            Style::new().bold().yellow().apply_to(name)
        );
        if let Some(ref description) = bundle.description {
            println!("    {description}");
        }
        if bundle.apps.is_empty() {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Apps:"),
                Style::new().dim().apply_to("none")
            );
        } else {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Apps:"),
                bundle.apps.join(", ")
            );
        }
    }
    if !any {
        println!("No bundles defined.");
    } else {
        println!();
        println!(
            "{} activated",
            Style::new().green().apply_to("*")
        );
    }
}

/// Print the repo table: Full Name / Short Name / Local Override.
pub fn display_repos(repos: &[Repo], config: &Config) {
    if repos.is_empty() {
        println!("No repos referenced.");
        return;
    }

    let rows: Vec<(&str, &str, Option<&PathBuf>)> = repos
        .iter()
        .map(|repo| {
            (
                repo.remote_path(),
                repo.short_name(),
                config.repo_overrides.get(repo.remote_path()),
            )
        })
        .collect();

    let full_width = column_width("Full Name", rows.iter().map(|(full, _, _)| *full));
    let short_width = column_width("Short Name", rows.iter().map(|(_, short, _)| *short));

    let header = Style::new().bold();
    println!(
        "{}  {}  {}",
        header.apply_to(format!("{:full_width$}", "Full Name")),
        header.apply_to(format!("{:short_width$}", "Short Name")),
        header.apply_to("Local Override"),
    );
    for (full, short, override_path) in rows {
        let override_text = override_path
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        println!("{full:full_width$}  {short:short_width$}  {override_text}");
    }
}

/// A dim status note on stderr, keeping stdout clean for documents.
pub fn note(message: &str) {
    eprintln!("{}", Style::new().dim().apply_to(message));
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(str::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

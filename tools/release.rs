//! Maintainer release tool.
//!
//! Bumps the crate version, records the changes since the previous tag in
//! `CHANGELOG.md`, tags the release and optionally publishes it.
//!
//! Run with: cargo run --features release --bin release

use chrono::Local;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;
use toml_edit::{DocumentMut, Item};

type Error = Box<dyn std::error::Error>;

const MANIFEST: &str = "Cargo.toml";
const CHANGELOG: &str = "CHANGELOG.md";

fn git(args: &[&str]) -> Result<Option<String>, Error> {
    let output = Command::new("git").args(args).output()?;
    if !output.status.success() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8(output.stdout)?.trim().to_string()))
}

fn run(program: &str, args: &[&str]) -> Result<(), Error> {
    println!("Executing: {} {}", program, args.join(" "));
    let status = Command::new(program).args(args).status()?;
    if !status.success() {
        return Err(format!("`{} {}` failed", program, args.join(" ")).into());
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String, io::Error> {
    print!("{}: ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn confirm(message: &str) -> Result<bool, io::Error> {
    Ok(prompt(&format!("{} (y/n)", message))?.to_lowercase() == "y")
}

/// Every part must be a plain number: `MAJOR.MINOR.PATCH`.
fn is_valid_version(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

fn changes_since(previous_tag: Option<&str>) -> Result<String, Error> {
    let range = previous_tag.map(|tag| format!("{}..HEAD", tag));
    let mut args = vec!["log", "--pretty=format:- %s"];
    if let Some(range) = range.as_deref() {
        args.push(range);
    }
    Ok(git(&args)?.unwrap_or_default())
}

fn prepend_changelog(version: &str, changes: &str) -> Result<(), Error> {
    let existing = if Path::new(CHANGELOG).exists() {
        fs::read_to_string(CHANGELOG)?
    } else {
        "# Changelog\n".to_string()
    };

    let (title, rest) = existing.split_once('\n').unwrap_or((existing.as_str(), ""));
    let entry = format!(
        "\n## {} ({})\n\n{}\n",
        version,
        Local::now().format("%Y-%m-%d"),
        if changes.is_empty() { "- No notable changes" } else { changes }
    );
    fs::write(CHANGELOG, format!("{}\n{}{}", title, entry, rest))?;
    Ok(())
}

fn main() -> Result<(), Error> {
    let mut manifest = fs::read_to_string(MANIFEST)?.parse::<DocumentMut>()?;
    let current = manifest["package"]["version"]
        .as_str()
        .ok_or("Could not find package.version in Cargo.toml")?
        .to_string();

    println!("Current version is: {}", current);
    let version = prompt("Enter new version")?;
    if !is_valid_version(&version) {
        return Err(format!("`{}` is not a MAJOR.MINOR.PATCH version", version).into());
    }
    if version == current {
        return Err("New version matches the current version".into());
    }

    let previous_tag = git(&["describe", "--tags", "--abbrev=0"])?;
    println!(
        "Previous tag: {}",
        previous_tag.as_deref().unwrap_or("None")
    );

    let changes = changes_since(previous_tag.as_deref())?;
    if changes.is_empty() {
        println!("Warning: No commits found since the previous tag.");
    } else {
        println!("Changes:\n{}", changes);
    }

    if !confirm(&format!("Ready to release version {}?", version))? {
        println!("Release aborted.");
        return Ok(());
    }

    // Tests run before anything is written
    run("cargo", &["test", "--all-targets"])?;

    manifest["package"]["version"] = Item::from(version.as_str());
    fs::write(MANIFEST, manifest.to_string())?;
    prepend_changelog(&version, &changes)?;
    println!("Updated {} and {}", MANIFEST, CHANGELOG);

    // Refreshes Cargo.lock with the new version
    run("cargo", &["check"])?;

    let tag = format!("v{}", version);
    run("git", &["add", MANIFEST, "Cargo.lock", CHANGELOG])?;
    run("git", &["commit", "-m", &format!("Release {}", version)])?;
    run("git", &["tag", "-a", &tag, "-m", &format!("Version {}", version)])?;
    run("git", &["push"])?;
    run("git", &["push", "--tags"])?;

    if confirm("Publish to crates.io?")? {
        run("cargo", &["publish"])?;
    } else {
        println!("Skipping crates.io publishing.");
    }

    if confirm("Create GitHub release?")? {
        run("gh", &["release", "create", &tag, "--title", &tag, "--notes", &changes])?;
    } else {
        println!("Skipping GitHub release creation.");
    }

    println!("Successfully released version {}", version);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        assert!(is_valid_version("1.2.3"));
        assert!(is_valid_version("0.10.0"));
        assert!(!is_valid_version("1.2"));
        assert!(!is_valid_version("1.2.x"));
        assert!(!is_valid_version("1..3"));
    }
}

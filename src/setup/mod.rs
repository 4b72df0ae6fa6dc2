// SPDX-License-Identifier: MPL-2.0
//! One-time interactive installer that copies the theme folder into a project.
//!
//! # Flow
//!
//! 1. CI environments (`CI`, `CONTINUOUS_INTEGRATION`, `NUKE_SKIP_SETUP`) are skipped
//! 2. A `.nukerc` pointing at an existing folder means the theme is already installed
//! 3. Otherwise a numbered menu asks where to copy the theme
//! 4. After copying, `.nukerc` records the location and next steps are printed
//!
//! Failures are printed with a manual recovery instruction; the installer
//! never aborts the surrounding package installation.

pub mod copy;
pub mod prompt;
pub mod sidecar;

pub use copy::{copy_recursive, CopyStats};
pub use prompt::{print_menu, Choice, Prompt};
pub use sidecar::Sidecar;

use crate::config::defaults::PACKAGE_THEME_PATH;
use crate::error::{Error, Result};
use std::io::{self, BufRead, Write};
use std::path::{Component, Path, PathBuf};

/// Environment variables that disable the interactive setup when `"true"`.
pub const SKIP_ENV_VARS: [&str; 3] = ["CI", "CONTINUOUS_INTEGRATION", "NUKE_SKIP_SETUP"];

/// Printed at the end of the next steps.
pub const DOCS_URL: &str = "https://github.com/c-heer/nuke-design-system";

/// ANSI escape sequences used in installer output.
pub mod style {
    pub const RESET: &str = "\x1b[0m";
    pub const BRIGHT: &str = "\x1b[1m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GRAY: &str = "\x1b[90m";
}

use style::{BRIGHT, CYAN, GRAY, GREEN, RESET, YELLOW};

/// How a run ended. Every outcome is a successful exit.
#[derive(Debug)]
pub enum Outcome {
    /// Running under CI; nothing was asked.
    CiSkipped,
    /// `.nukerc` already points at an installed theme.
    AlreadyInstalled(String),
    /// The theme was copied to the given path.
    Installed(String),
    /// The operator chose not to install, or gave an invalid answer.
    Skipped,
    /// Copying failed; recovery instructions were printed.
    Failed(Error),
}

/// Resolves an install location entered by the operator under `project_root`.
///
/// A leading root or drive prefix is dropped, so `/assets/theme` lands in
/// `<project_root>/assets/theme`.
#[must_use]
pub fn project_path(project_root: &Path, target: &str) -> PathBuf {
    let relative: PathBuf = Path::new(target)
        .components()
        .filter(|component| {
            matches!(
                component,
                Component::Normal(_) | Component::CurDir | Component::ParentDir
            )
        })
        .collect();
    project_root.join(relative)
}

/// Whether any of [`SKIP_ENV_VARS`] is set to `"true"`.
pub fn is_ci(env: &dyn Fn(&str) -> Option<String>) -> bool {
    SKIP_ENV_VARS
        .iter()
        .any(|name| env(name).as_deref() == Some("true"))
}

/// Theme installer bound to a project.
#[derive(Debug, Clone)]
pub struct Installer {
    project_root: PathBuf,
    theme_source: PathBuf,
}

impl Installer {
    pub fn new(project_root: impl Into<PathBuf>, theme_source: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            theme_source: theme_source.into(),
        }
    }

    /// Installer using the theme folder shipped in `node_modules`.
    pub fn for_project(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let theme_source = project_root.join(PACKAGE_THEME_PATH);
        Self::new(project_root, theme_source)
    }

    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    #[must_use]
    pub fn theme_source(&self) -> &Path {
        &self.theme_source
    }

    /// Runs the interactive flow. Only failures to talk to the operator are
    /// returned as errors.
    pub fn run<R: BufRead, W: Write>(
        &self,
        prompt: &mut Prompt<R, W>,
        env: &dyn Fn(&str) -> Option<String>,
    ) -> io::Result<Outcome> {
        if is_ci(env) {
            writeln!(
                prompt.output(),
                "{GRAY}Skipping interactive setup (CI environment detected){RESET}"
            )?;
            return Ok(Outcome::CiSkipped);
        }

        print_banner(prompt.output())?;

        if let Some(theme_path) = self.existing_install() {
            writeln!(
                prompt.output(),
                "{GREEN}✓ Theme folder already exists at: {theme_path}{RESET}"
            )?;
            writeln!(prompt.output())?;
            print_next_steps(prompt.output(), &theme_path)?;
            return Ok(Outcome::AlreadyInstalled(theme_path));
        }

        print_menu(prompt.output())?;

        let Some(answer) = prompt.ask("Your choice [1-4]:")? else {
            print_skipped(prompt.output())?;
            return Ok(Outcome::Skipped);
        };

        let target = match Choice::parse(&answer) {
            Some(Choice::Skip) => None,
            Some(Choice::Custom) => prompt
                .ask("Enter custom path:")?
                .map(|path| path.trim().to_string())
                .filter(|path| !path.is_empty())
                .or_else(|| {
                    log::warn!("empty custom path, skipping setup");
                    None
                }),
            Some(choice) => choice.preset_path().map(str::to_string),
            None => {
                writeln!(prompt.output(), "{YELLOW}Invalid choice. Skipping setup.{RESET}")?;
                None
            }
        };

        let Some(target) = target else {
            print_skipped(prompt.output())?;
            return Ok(Outcome::Skipped);
        };

        match self.install(&target) {
            Ok(stats) => {
                log::info!("installed theme at {target} ({} files)", stats.files);
                writeln!(prompt.output())?;
                writeln!(prompt.output(), "{GREEN}{BRIGHT}✓ Success!{RESET}")?;
                writeln!(prompt.output(), "{GREEN}Theme copied to: {target}{RESET}")?;
                writeln!(prompt.output())?;
                print_next_steps(prompt.output(), &target)?;
                Ok(Outcome::Installed(target))
            }
            Err(err) => {
                log::error!("theme copy to {target} failed: {err}");
                print_failure(prompt.output(), &err)?;
                Ok(Outcome::Failed(err))
            }
        }
    }

    /// Copies the theme to `target` (relative to the project root) and
    /// records it in `.nukerc`.
    pub fn install(&self, target: &str) -> Result<CopyStats> {
        let destination = project_path(&self.project_root, target);
        let stats = copy_recursive(&self.theme_source, &destination)?;
        sidecar::save(&self.project_root, &Sidecar::new(target))?;
        Ok(stats)
    }

    /// Path recorded in `.nukerc`, if it names an existing folder.
    #[must_use]
    pub fn existing_install(&self) -> Option<String> {
        match sidecar::load(&self.project_root) {
            Ok(Some(sidecar)) if sidecar.theme_dir(&self.project_root).exists() => {
                Some(sidecar.theme_path)
            }
            Ok(_) => None,
            Err(err) => {
                let path = sidecar::path(&self.project_root);
                log::warn!("ignoring unreadable {}: {err}", path.display());
                None
            }
        }
    }
}

fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{CYAN}{BRIGHT}┌─────────────────────────────────────┐{RESET}")?;
    writeln!(out, "{CYAN}{BRIGHT}│  Nuke Design System Setup           │{RESET}")?;
    writeln!(out, "{CYAN}{BRIGHT}└─────────────────────────────────────┘{RESET}")?;
    writeln!(out)?;
    writeln!(out, "Where should we copy the theme folder?")?;
    writeln!(
        out,
        "{GRAY}This folder contains all CSS variables you can customize.{RESET}"
    )?;
    writeln!(out)
}

fn print_skipped(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{GRAY}Setup skipped.{RESET}")?;
    writeln!(out)?;
    writeln!(out, "To run setup later:")?;
    writeln!(out, "  {CYAN}npx @nuke.dev/design-system setup{RESET}")?;
    writeln!(out)?;
    writeln!(out, "Or manually copy the theme:")?;
    writeln!(out, "  {GRAY}cp -r {PACKAGE_THEME_PATH} ./nuke-theme{RESET}")?;
    writeln!(out)
}

fn print_failure(out: &mut impl Write, err: &Error) -> io::Result<()> {
    writeln!(out, "{YELLOW}Error copying theme:{RESET} {err}")?;
    writeln!(out)?;
    let hint = match err {
        Error::Setup(setup) => setup.recovery_hint(),
        _ => "You can manually copy the theme folder from:",
    };
    writeln!(out, "{hint}")?;
    writeln!(out, "  {PACKAGE_THEME_PATH}/")
}

fn print_next_steps(out: &mut impl Write, theme_path: &str) -> io::Result<()> {
    writeln!(out, "{BRIGHT}Next steps:{RESET}")?;
    writeln!(out)?;
    writeln!(out, "{BRIGHT}1.{RESET} Import in your CSS (in this order):")?;
    writeln!(out)?;
    writeln!(out, "   {GRAY}/* Import theme FIRST (your customized variables) */{RESET}")?;
    writeln!(out, "   {CYAN}@import '{theme_path}/all.css';{RESET}")?;
    writeln!(out)?;
    writeln!(out, "   {GRAY}/* Then import system logic */{RESET}")?;
    writeln!(out, "   {CYAN}@import '@nuke.dev/design-system/core/all.css';{RESET}")?;
    writeln!(out)?;
    writeln!(out, "{BRIGHT}2.{RESET} Optional: Import web components in your JS/HTML:")?;
    writeln!(out)?;
    writeln!(
        out,
        "   {CYAN}<script type=\"module\" src=\"node_modules/@nuke.dev/design-system/components/all.js\"></script>{RESET}"
    )?;
    writeln!(out)?;
    writeln!(out, "{BRIGHT}3.{RESET} Customize your theme:")?;
    writeln!(
        out,
        "   {GRAY}Edit files in {theme_path}/ to customize colors, spacing, etc.{RESET}"
    )?;
    writeln!(out)?;
    writeln!(out, "{GRAY}Documentation: {DOCS_URL}{RESET}")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn ci_detection_requires_literal_true() {
        assert!(is_ci(&env_from(&[("CI", "true")])));
        assert!(is_ci(&env_from(&[("NUKE_SKIP_SETUP", "true")])));
        assert!(!is_ci(&env_from(&[("CI", "1")])));
        assert!(!is_ci(&env_from(&[])));
    }

    #[test]
    fn absolute_targets_stay_under_the_project_root() {
        let root = Path::new("/work/app");
        assert_eq!(
            project_path(root, "/assets/theme"),
            PathBuf::from("/work/app/assets/theme")
        );
        assert_eq!(
            project_path(root, "./nuke-theme"),
            PathBuf::from("/work/app/./nuke-theme")
        );
        assert_eq!(project_path(root, "themes/nuke"), root.join("themes/nuke"));
    }

    #[test]
    fn installer_for_project_points_into_node_modules() {
        let installer = Installer::for_project("/work/app");
        assert!(installer
            .theme_source()
            .ends_with("node_modules/@nuke.dev/design-system/theme"));
    }

    #[test]
    fn failure_output_includes_manual_instruction() {
        let mut out = Vec::new();
        let err: Error = crate::error::SetupError::CopyFailed("denied".into()).into();
        print_failure(&mut out, &err).expect("write");

        let printed = String::from_utf8(out).expect("utf8");
        assert!(printed.contains("Error copying theme:"));
        assert!(printed.contains("manually copy"));
        assert!(printed.contains(PACKAGE_THEME_PATH));
    }

    #[test]
    fn next_steps_reference_the_theme_path() {
        let mut out = Vec::new();
        print_next_steps(&mut out, "./nuke-theme").expect("write");
        let printed = String::from_utf8(out).expect("utf8");
        assert!(printed.contains("@import './nuke-theme/all.css';"));
        assert!(printed.contains("Documentation: https://github.com/c-heer/nuke-design-system"));
    }
}

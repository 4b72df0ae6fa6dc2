// SPDX-License-Identifier: MPL-2.0
use nuke_design::setup::{Installer, Outcome, Prompt};
use std::io;
use std::path::PathBuf;

/// Environment variable naming the packaged theme folder.
const ENV_THEME_SOURCE: &str = "NUKE_THEME_SOURCE";

const HELP: &str = "\
nuke-setup: copy the Nuke Design System theme into your project

USAGE:
  nuke-setup [OPTIONS]

OPTIONS:
  --project-root <DIR>   Project to install into (default: current directory)
  --theme-source <DIR>   Theme folder to copy (default: node_modules/@nuke.dev/design-system/theme)
  -h, --help             Print this help
";

struct Flags {
    project_root: Option<PathBuf>,
    theme_source: Option<PathBuf>,
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        project_root: args.opt_value_from_str("--project-root")?,
        theme_source: args.opt_value_from_str("--theme-source")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return;
        }
        Err(err) => {
            eprintln!("nuke-setup: {err}");
            eprint!("{HELP}");
            std::process::exit(2);
        }
    };

    let project_root = match flags.project_root {
        Some(root) => root,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(err) => {
                eprintln!("nuke-setup: cannot determine the current directory: {err}");
                return;
            }
        },
    };

    let theme_source = flags
        .theme_source
        .or_else(|| std::env::var_os(ENV_THEME_SOURCE).map(PathBuf::from));
    let installer = match theme_source {
        Some(source) => Installer::new(project_root, source),
        None => Installer::for_project(project_root),
    };

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());
    let env = |name: &str| std::env::var(name).ok();

    // Setup never fails the surrounding install.
    match installer.run(&mut prompt, &env) {
        Ok(Outcome::Failed(err)) => log::debug!("setup finished with copy failure: {err}"),
        Ok(outcome) => log::debug!("setup finished: {outcome:?}"),
        Err(err) => log::error!("setup aborted, terminal unavailable: {err}"),
    }
}

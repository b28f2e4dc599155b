use std::{ffi::OsString, path::Path};

use resource_id_codegen::{
    console_logging, run_codegen, CodeGenConfig, CodeGenError, CodeGenTarget,
};

struct Args {
    help: bool,
    path: Option<String>,
    name: Option<String>,
    id: Option<String>,
    config: Option<String>,
    no_format: bool,
}

/// Long flags that are also accepted with a single dash, e.g. `-path=./`.
const LONG_FLAGS: &[&str] = &["help", "path", "name", "id", "config"];

/// Rewrite `-path value` and `-path=value` to their `--path` form.
fn normalize_flags(raw: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    raw.into_iter()
        .map(|arg| {
            let Some(flag) = arg.to_str().and_then(|a| a.strip_prefix('-')) else {
                return arg;
            };
            let key = flag.split('=').next().unwrap_or_default();
            if !flag.starts_with('-') && LONG_FLAGS.iter().any(|f| *f == key) {
                OsString::from(format!("--{flag}"))
            } else {
                arg
            }
        })
        .collect()
}

impl Args {
    pub fn parse_args(raw: impl IntoIterator<Item = OsString>) -> Result<Args, pico_args::Error> {
        let mut args = pico_args::Arguments::from_vec(normalize_flags(raw));
        let parsed = Args {
            help: args.contains(["-h", "--help"]),
            path: args.opt_value_from_str(["-p", "--path"])?,
            name: args.opt_value_from_str(["-n", "--name"])?,
            id: args.opt_value_from_str(["-i", "--id"])?,
            config: args.opt_value_from_str(["-c", "--config"])?,
            no_format: args.contains("--no-format"),
        };
        let remaining = args.finish();
        if !remaining.is_empty() {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unexpected arguments {remaining:?}"),
            });
        }
        Ok(parsed)
    }

    pub fn usage() {
        println!(
            r#"Resource ID generator
Usage:
  -h, -help, --help           Show help
  -p, -path, --path [path]    Relative path to the service package, `parse` is created below it
  -n, -name, --name [name]    PascalCase name of the resource type, e.g. SharedImageGallery
  -i, -id, --id [id]          An example resource ID to derive the segments from
  -c, -config, --config [file]
                              YAML file listing several targets, used instead of -path/-name/-id
  --no-format                 Write the generated code without running gofmt/goimports
Values can also be given as -key=value."#
        );
    }
}

fn main() -> Result<(), CodeGenError> {
    run_cli()
}

fn run_cli() -> Result<(), CodeGenError> {
    let args = Args::parse_args(std::env::args_os().skip(1))
        .map_err(|e| CodeGenError::other(format!("Invalid arguments: {e}")))?;
    if args.help {
        Args::usage();
        return Ok(());
    }

    console_logging::init();

    let (mut config, root_path) = match &args.config {
        Some(config_path) => {
            let config = CodeGenConfig::load(config_path)?;
            let mut root_path = Path::new(config_path)
                .parent()
                .and_then(|p| p.to_str())
                .unwrap_or_default()
                .to_owned();
            if root_path.is_empty() {
                root_path = ".".to_owned();
            }
            (config, root_path)
        }
        None => {
            let target = CodeGenTarget {
                path: args.path.unwrap_or_default(),
                name: args.name.unwrap_or_default(),
                id: args.id.unwrap_or_default(),
            };
            (CodeGenConfig::single(target), ".".to_owned())
        }
    };
    if args.no_format {
        config.format = false;
    }

    run_codegen(&config, &root_path)
}

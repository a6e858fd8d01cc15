// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_toast: toast notification demo

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --position <CORNER>   Default corner: top-left, top-right, bottom-left, bottom-right
  --duration <MS>       Default display time in milliseconds
  --config <PATH>       Load defaults from this toasts.toml
  --theme <MODE>        light, dark or system
  -h, --help            Print help
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        position: args.opt_value_from_str("--position")?,
        duration_ms: args.opt_value_from_str("--duration")?,
        config_path: args.opt_value_from_str("--config")?,
        theme: args.opt_value_from_str("--theme")?.unwrap_or_default(),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_toast=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

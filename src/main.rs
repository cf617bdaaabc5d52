// SPDX-License-Identifier: MPL-2.0
use iced_shell::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_shell

USAGE:
  iced_shell [OPTIONS]

OPTIONS:
  --data-dir DIR     Directory for the preference storage (state.cbor)
  --config-dir DIR   Directory for settings.toml
  -h, --help         Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        data_dir: parse_opt(&mut args, "--data-dir"),
        config_dir: parse_opt(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

fn parse_opt(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "invalid value for {key}");
            None
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
use art_space::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
ArtSpace - browse a small collection of paintings

USAGE:
  art_space [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring --lang");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring --config-dir");
        None
    });

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "unexpected arguments ignored");
    }

    if !paths::init_cli_overrides(config_dir.clone()) {
        tracing::debug!("config directory override already set");
    }

    app::run(Flags { lang, config_dir })
}

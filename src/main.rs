// SPDX-License-Identifier: MPL-2.0
use esim_workbench::app::{self, paths, Flags};

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> iced::Result {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: read_option(&mut args, "--lang"),
        i18n_dir: read_option(&mut args, "--i18n-dir"),
        config_dir: read_option(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("invalid value for {key}: {err}");
            None
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
use iced_toaster::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
iced_toaster: toast notification demo

USAGE:
  iced_toaster [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Read settings.toml from DIR
  --position <KEY>     Position for new toasts (e.g. bottom-left)
  --poll               Expire toasts from a polling tick instead of per-toast tasks
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iced_toaster=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    tracing::info!(?flags, "starting iced_toaster");
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        position: args.opt_value_from_str("--position")?,
        poll_timers: args.contains("--poll"),
    })
}

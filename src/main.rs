// SPDX-License-Identifier: MPL-2.0
use folio_gallery::app::{self, paths, Flags};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
Folio Gallery - browse photos by category

USAGE:
  folio_gallery [OPTIONS] [SOURCE]

ARGS:
  <SOURCE>              Manifest file (.toml) or a directory of category folders

OPTIONS:
  -h, --help            Print this help and exit
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --category <NAME>     Category selected at startup (default: all)

ENVIRONMENT:
  FOLIO_GALLERY_CONFIG_DIR   Config directory when --config-dir is absent
  RUST_LOG                   Log filter (default: info)
";

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let category = args.opt_value_from_str("--category")?;
    let source = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        config_dir,
        category,
        source,
    }))
}

fn main() -> iced::Result {
    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    init_logging();
    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::debug!(?flags, "starting");

    app::run(flags)
}

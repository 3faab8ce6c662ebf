// SPDX-License-Identifier: MPL-2.0
use text_eraser::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Text Eraser - remove visible text from images

USAGE:
  text_eraser [OPTIONS] [IMAGE]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  --data-dir <dir>     Directory holding state.cbor
  -h, --help           Print this help

ENVIRONMENT:
  GEMINI_API_KEY           API key (variable name set by [remote] api_key_env)
  TEXT_ERASER_CONFIG_DIR   Config directory override
  TEXT_ERASER_DATA_DIR     Data directory override
  RUST_LOG                 Log filter (default: text_eraser=info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("text_eraser=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;

    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        file_path,
        data_dir,
        config_dir,
    })
}

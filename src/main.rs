// SPDX-License-Identifier: MPL-2.0
use export_options::app::{self, paths, Flags};

const HELP: &str = "\
export_options - export settings panel with document preview

USAGE:
    export_options [OPTIONS] [DOCUMENT]

OPTIONS:
    --lang <LOCALE>        UI language (e.g. en-US, fr)
    --config-dir <DIR>     Directory holding settings.toml
    --document <PATH>      Page images directory or image file to preview
    -h, --help             Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let document = args.opt_value_from_str("--document")?;
    let trailing = args
        .finish()
        .into_iter()
        .next()
        .and_then(|arg| arg.into_string().ok());

    Ok(Some(Flags {
        lang,
        config_dir,
        document: document.or(trailing),
    }))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

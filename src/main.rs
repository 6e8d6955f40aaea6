// SPDX-License-Identifier: MPL-2.0
use iced_hover_zoom::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
Usage: iced_hover_zoom [OPTIONS] [IMAGE...]

Options:
  --lang LOCALE     Interface language (e.g. en-US, fr)
  --config FILE     Read settings from FILE instead of the user config
  --width PX        Container width for images given on the command line
  --height PX       Container height for images given on the command line
  -h, --help        Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_path: args.opt_value_from_os_str("--config", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
        width: args.opt_value_from_str("--width")?,
        height: args.opt_value_from_str("--height")?,
        images: args.finish().into_iter().map(PathBuf::from).collect(),
    })
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

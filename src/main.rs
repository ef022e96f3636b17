// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::ui::theming::ThemeMode;

const HELP: &str = "\
Iced Toast gallery

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --theme <light|dark|system>  Override the configured theme mode
  --config-dir <DIR>           Read and write settings.toml in DIR
  -h, --help                   Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let theme = match args.opt_value_from_str::<_, String>("--theme") {
        Ok(Some(name)) => {
            let mode = ThemeMode::from_name(&name);
            if mode.is_none() {
                eprintln!("Ignoring unknown theme '{name}'");
            }
            mode
        }
        Ok(None) => None,
        Err(error) => {
            eprintln!("Invalid --theme argument: {error}");
            None
        }
    };

    let config_dir = args
        .opt_value_from_str::<_, String>("--config-dir")
        .unwrap_or_else(|error| {
            eprintln!("Invalid --config-dir argument: {error}");
            None
        });

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    app::run(Flags { theme, config_dir })
}

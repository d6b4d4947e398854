// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use iced_folio::config::{self, Config};

const HELP: &str = "\
iced_folio - native portfolio showcase

USAGE:
    iced_folio [MANIFEST] [--config-dir DIR] [--init-config]

ARGS:
    MANIFEST            Portfolio manifest (default: ./portfolio.toml)

OPTIONS:
    --config-dir DIR    Directory holding settings.toml
    --init-config       Write the default settings.toml and exit
    -h, --help          Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let init_config = args.contains("--init-config");
    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    if init_config {
        paths::init_cli_overrides(config_dir);
        std::process::exit(write_default_config());
    }

    let flags = Flags {
        manifest_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
        config_dir,
    };

    app::run(flags)
}

/// Writes the default settings file unless one already exists.
fn write_default_config() -> i32 {
    let Some(path) = config::config_path_with_override(None) else {
        eprintln!("error: no config directory available");
        return 1;
    };
    if path.exists() {
        eprintln!("{} already exists; leaving it untouched", path.display());
        return 1;
    }
    match config::save_to_path(&Config::default(), &path) {
        Ok(()) => {
            println!("wrote {}", path.display());
            0
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

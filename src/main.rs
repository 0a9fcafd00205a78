use anyhow::{Context, Result};
use env_logger::Env;
use serde_json::{Map, Value};

use opensprinkler::constants::{defaults, envvars};
use opensprinkler::helpers::load_dotenv;
use opensprinkler::{ClientConfig, OpenSprinkler};

const HELP: &str = "\
Print the status variables of an OpenSprinkler controller

USAGE:
  os-status [--json] <hostname> <password>

FLAGS:
  --json        Print one JSON object instead of name: value lines
  -h, --help    Print this help
";

struct StatusArgs {
    json: bool,
    hostname: String,
    password: String,
}

fn parse_args() -> Result<Option<StatusArgs>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }
    let json = args.contains("--json");
    let parsed = StatusArgs {
        json,
        hostname: args.free_from_str().context("missing <hostname> argument")?,
        password: args.free_from_str().context("missing <password> argument")?,
    };
    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring extra arguments: {:?}", remaining);
    }
    Ok(Some(parsed))
}

fn main() -> Result<()> {
    let dotenv_files = load_dotenv();
    env_logger::Builder::from_env(
        Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL),
    )
    .init();
    for path in dotenv_files {
        log::debug!("Loaded {}", path.display());
    }

    let Some(args) = parse_args()? else {
        return Ok(());
    };

    let config = ClientConfig::new(&args.hostname, &args.password).with_env_overrides();
    let device = OpenSprinkler::new(&config);
    log::info!("Reading status from {}", device.host());

    let values = device.controller().get_all()?;
    if args.json {
        let mut object = Map::new();
        for (name, value) in values {
            object.insert(name.to_string(), serde_json::to_value(value)?);
        }
        println!("{}", Value::Object(object));
    } else {
        for (name, value) in values {
            println!("{name}: {value}");
        }
    }
    Ok(())
}

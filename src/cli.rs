// src/cli.rs
use std::{env, error::Error, fmt::Display, path::PathBuf, str::FromStr};

use uuid::Uuid;

use crate::config::{self, consts::{API_KEY_ENV, DEFAULT_DECIMALS, MAX_DECIMALS}, options::DivisorPaths, AppOptions};
use crate::file::Written;
use crate::progress::{ConsoleProgress, NullProgress, Progress};
use crate::score::path::parse_path_list;

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Mode {
    Help,
    Run(AppOptions),
}

/// Decide help vs run from the process arguments and environment.
pub fn detect_mode() -> Result<Mode, Box<dyn Error>> {
    let env_key = env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
    parse_args(env::args().skip(1), env_key)
}

/// Parse `-name=value` arguments on top of the config file (if any) and defaults.
///
/// Malformed values are warned about and left at their previous value. Only a
/// missing or invalid API key is an error.
pub fn parse_args<I, S>(args: I, env_key: Option<String>) -> Result<Mode, Box<dyn Error>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<Arg> = args.into_iter().map(|a| Arg::parse(a.as_ref())).collect();

    if args.iter().any(|a| a.name == "h" || a.name == "help") {
        return Ok(Mode::Help);
    }

    let mut opts = match args.iter().find(|a| a.name == "config") {
        Some(Arg { value: Some(path), .. }) => config::file::load(path),
        Some(_) => {
            logw!("-config needs a path, ignoring");
            AppOptions::default()
        }
        None => AppOptions::default(),
    };

    if env_key.is_some() {
        opts.scrape.api_key = env_key;
    }

    for arg in &args {
        apply(&mut opts, arg)?;
    }
    opts.validate();

    let key = opts
        .scrape
        .api_key
        .as_deref()
        .ok_or("Missing required argument: -apikey, use -help to learn more.")?;
    check_api_key(key)?;

    Ok(Mode::Run(opts))
}

/// Run with console progress when asked for, then report where the board went.
pub fn run(opts: AppOptions) -> Result<(), Box<dyn Error>> {
    let mut console = ConsoleProgress::default();
    let mut null = NullProgress;
    let progress: &mut dyn Progress = if opts.export.show_progress { &mut console } else { &mut null };

    let summary = crate::runner::run(&opts, progress)?;
    match summary.written {
        Written::File(path) => println!("Wrote {}", path.display()),
        Written::Stdout => {}
    }
    Ok(())
}

/* ---------------- Arguments ---------------- */

struct Arg {
    /// Lowercased, without leading dashes.
    name: String,
    raw_name: String,
    value: Option<String>,
}

impl Arg {
    fn parse(raw: &str) -> Self {
        let body = raw.trim_start_matches('-');
        let (name, value) = match body.split_once('=') {
            Some((n, v)) => (n, Some(s!(v))),
            None => (body, None),
        };
        Self { name: name.to_ascii_lowercase(), raw_name: s!(raw), value }
    }
}

fn apply(opts: &mut AppOptions, arg: &Arg) -> Result<(), Box<dyn Error>> {
    let v = arg.value.as_deref();
    match arg.name.as_str() {
        "apikey" => {
            let key = v.filter(|k| !k.is_empty()).ok_or("API key not valid, use -help to learn more.")?;
            opts.scrape.api_key = Some(s!(key));
        }
        "url" => match v {
            Some(url) if !url.is_empty() => opts.scrape.url = s!(url),
            _ => logw!("-URL needs a value, keeping {}", opts.scrape.url),
        },
        "playercount" => opts.scrape.player_count = parse_num(v, opts.scrape.player_count, "player count"),
        "mojangdelay" => opts.scrape.lookup_delay_ms = parse_num(v, opts.scrape.lookup_delay_ms, "Mojang delay"),
        "hypixeldelay" => opts.scrape.stats_delay_ms = parse_num(v, opts.scrape.stats_delay_ms, "Hypixel delay"),
        "pospaths" => match v {
            Some(list) => opts.score.positive_paths = parse_path_list(list),
            None => logw!("-posPaths needs a value, keeping the current paths"),
        },
        "negpaths" => match v {
            Some(list) => opts.score.negative_paths = parse_path_list(list),
            None => logw!("-negPaths needs a value, keeping the current paths"),
        },
        "multiplicative" => opts.score.multiplicative = parse_bool(v, opts.score.multiplicative, "multiplicative"),
        "reverse" | "reversed" => opts.score.reverse = parse_bool(v, opts.score.reverse, "reverse"),
        "legacynegpaths" => {
            let legacy = opts.score.divisor_paths == DivisorPaths::PositiveIndexed;
            opts.score.divisor_paths = if parse_bool(v, legacy, "legacyNegPaths") {
                DivisorPaths::PositiveIndexed
            } else {
                DivisorPaths::Negative
            };
        }
        "decimals" => opts.score.decimals = parse_decimals(v, opts.score.decimals),
        "showprogress" => opts.export.show_progress = parse_bool(v, opts.export.show_progress, "showProgress"),
        "filename" => match v {
            Some(name) if !name.is_empty() => opts.export.file_name = Some(PathBuf::from(name)),
            _ => logw!("-fileName needs a value, using the default name"),
        },
        "config" => {} // applied before everything else
        _ => logw!("unknown argument {}, ignoring (use -help to learn more)", arg.raw_name),
    }
    Ok(())
}

fn parse_num<T: FromStr + Display + Copy>(v: Option<&str>, current: T, label: &str) -> T {
    match v.map(|s| s.trim().parse::<T>()) {
        Some(Ok(n)) => n,
        _ => {
            logw!("could not parse {label}, use -help to learn more. Defaulting to: {current}");
            current
        }
    }
}

fn parse_bool(v: Option<&str>, current: bool, label: &str) -> bool {
    let Some(v) = v else { return true };
    match v.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => true,
        "false" | "no" | "off" | "0" => false,
        _ => {
            logw!("could not parse {label}, use -help to learn more. Defaulting to: {current}");
            current
        }
    }
}

fn parse_decimals(v: Option<&str>, current: u32) -> u32 {
    let n: i64 = parse_num(v, i64::from(current), "decimals");
    match u32::try_from(n) {
        Ok(d) if d <= MAX_DECIMALS => d,
        _ => {
            logw!("invalid number of decimals {n}, use -help to learn more. Defaulting to: {DEFAULT_DECIMALS}");
            DEFAULT_DECIMALS
        }
    }
}

/// The key must be a canonical hyphenated UUID.
fn check_api_key(key: &str) -> Result<(), Box<dyn Error>> {
    match Uuid::parse_str(key) {
        Ok(u) if u.hyphenated().to_string().eq_ignore_ascii_case(key) => Ok(()),
        _ => Err("API key not valid, use -help to learn more.".into()),
    }
}

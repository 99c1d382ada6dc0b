use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, builder::PossibleValuesParser, value_parser};
use log::{debug, warn};
use rayon::prelude::*;
use strum::IntoEnumIterator;

mod emit;
mod pixels;
mod types;

use types::*;

fn possible_values<E>() -> PossibleValuesParser
where
    E: IntoEnumIterator + Into<&'static str>,
{
    PossibleValuesParser::new(E::iter().map(Into::<&'static str>::into))
}

fn build_cli() -> Command {
    Command::new("splash-array")
        .about("Print an image as a greyscale C byte-array literal")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("name")
                .help("Image file name(s)")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("style")
                .short('s')
                .long("style")
                .help("Output preset")
                .long_help(
                    "Output preset. 'splash' prints `uchar splash[N]` with every line indented; \
                     'image' prints `const uint8_t image<stem>[N]` with the indent after each wrap.",
                )
                .default_value("splash")
                .value_parser(possible_values::<Preset>()),
        )
        .arg(
            Arg::new("array_name")
                .long("array-name")
                .help("Override the array name"),
        )
        .arg(
            Arg::new("element_type")
                .long("element-type")
                .help("Override the element type")
                .value_parser(possible_values::<ElementType>()),
        )
        .arg(
            Arg::new("wrap")
                .long("wrap")
                .help("Override the line wrap style")
                .value_parser(possible_values::<WrapStyle>()),
        )
        .arg(
            Arg::new("per_line")
                .short('w')
                .long("per-line")
                .help("Values per line")
                .default_value("24")
                .value_parser(value_parser!(u32).range(1..)),
        )
}

fn parse_enum<E: FromStr>(matches: &ArgMatches, id: &str) -> Result<Option<E>> {
    matches
        .get_one::<String>(id)
        .map(|s| E::from_str(s).map_err(|_| anyhow!("invalid value for --{id}: {s}")))
        .transpose()
}

fn style_from_matches(matches: &ArgMatches) -> Result<OutputStyle> {
    let preset = parse_enum::<Preset>(matches, "style")?.unwrap_or(Preset::Splash);
    let mut style = OutputStyle::from_preset(preset);

    if let Some(name) = matches.get_one::<String>("array_name") {
        style.name = ArrayName::Custom(name.clone());
    }
    if let Some(element_type) = parse_enum::<ElementType>(matches, "element_type")? {
        style.element_type = element_type;
    }
    if let Some(wrap) = parse_enum::<WrapStyle>(matches, "wrap")? {
        style.wrap = wrap;
    }
    if let Some(&per_line) = matches.get_one::<u32>("per_line") {
        style.per_line = per_line as usize;
    }
    Ok(style)
}

fn render_file(path: &Path, style: &OutputStyle) -> Result<String> {
    let img = pixels::load(path)?;
    let name = pixels::array_name(&style.name, path)?;
    Ok(emit::render(&name, &img.data, style))
}

fn main() -> Result<()> {
    env_logger::init();

    let matches = build_cli().get_matches();
    let style = style_from_matches(&matches)?;
    debug!("style: {:?}", style);

    let inputs = matches
        .get_many::<PathBuf>("name")
        .context("missing image file name")?
        .collect::<Vec<_>>();
    if inputs.len() > 1 && style.name != ArrayName::Derived {
        warn!(
            "{} inputs share the array name {:?}",
            inputs.len(),
            style.name
        );
    }

    let rendered = inputs
        .par_iter()
        .map(|path| render_file(path, &style))
        .collect::<Result<Vec<_>>>()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, text) in rendered.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        out.write_all(text.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use stacked_area::api::{StackedAreaChart, StackedAreaConfig};
use stacked_area::render::SvgRenderer;

struct CliArgs {
    config_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    hover: Option<(f64, f64)>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = stacked_area::telemetry::init_default_tracing();

    let args = parse_args()?;
    let raw = match &args.config_path {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("failed to read config from stdin: {err}"))?;
            buffer
        }
    };

    let config = StackedAreaConfig::from_json_str(&raw).map_err(|err| err.to_string())?;
    let mut chart = StackedAreaChart::new(SvgRenderer::new(), config)
        .map_err(|err| format!("failed to render chart: {err}"))?;
    if let Some((x, y)) = args.hover {
        chart
            .pointer_move(x, y)
            .map_err(|err| format!("failed to hover at ({x}, {y}): {err}"))?;
        chart
            .flush_frame()
            .map_err(|err| format!("failed to draw highlight: {err}"))?;
    }
    let document = chart
        .renderer()
        .document()
        .map_err(|err| format!("failed to serialize svg: {err}"))?;

    match &args.output_path {
        Some(path) => fs::write(path, document)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => io::stdout()
            .write_all(document.as_bytes())
            .map_err(|err| format!("failed to write svg to stdout: {err}")),
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut config_path = None;
    let mut output_path = None;
    let mut hover = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output" | "-o" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = Some(PathBuf::from(value));
            }
            "--hover" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --hover".to_owned())?;
                hover = Some(parse_point(&value)?);
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            "-" => config_path = None,
            other if other.starts_with('-') => {
                return Err(format!("unknown argument `{other}`\n\n{}", usage_message()));
            }
            path => config_path = Some(PathBuf::from(path)),
        }
    }

    Ok(CliArgs {
        config_path,
        output_path,
        hover,
    })
}

fn parse_point(value: &str) -> Result<(f64, f64), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{value}`"))?;
    let parse = |raw: &str| {
        raw.trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid coordinate `{raw}`: {err}"))
    };
    Ok((parse(x)?, parse(y)?))
}

fn usage_message() -> String {
    "Usage: render_stacked_svg [config.json | -] [options]\n\nReads a JSON chart config (stdin when no path or `-`) and writes the SVG document.\n\nOptions:\n  -o, --output <path>   Write to a file instead of stdout\n  --hover <x,y>         Draw the highlight for a pointer at pixel (x, y)\n  -h, --help            Show this message".to_owned()
}

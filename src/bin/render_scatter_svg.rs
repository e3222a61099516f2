use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use gleam_chart::api::{ScatterTheme, ScatterView, ScatterViewConfig};
use gleam_chart::core::DataSet;
use gleam_chart::render::{Color, SvgRenderer};
use gleam_chart::telemetry::init_default_tracing;

const DEFAULT_OUTPUT_PATH: &str = "scatter.svg";

#[derive(Debug)]
struct CliArgs {
    input_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    output_path: PathBuf,
    step: Option<i64>,
    elapsed_ms: Option<u64>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let data = match &args.input_path {
        Some(path) => DataSet::from_path(path),
        None => DataSet::homeric(),
    }
    .map_err(|err| err.to_string())?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            ScatterViewConfig::from_json_compat_str(&raw).map_err(|err| err.to_string())?
        }
        None => ScatterViewConfig::default(),
    };

    let mut view = ScatterView::mount(
        SvgRenderer::new().with_background(Color::WHITE),
        config,
        data,
        ScatterTheme::homeric(),
    )
    .map_err(|err| err.to_string())?;
    if let Some(step) = args.step {
        view.set_active_step(step).map_err(|err| err.to_string())?;
    }
    match args.elapsed_ms {
        Some(elapsed_ms) => {
            view.advance(Duration::from_millis(elapsed_ms))
                .map_err(|err| err.to_string())?;
        }
        None => {
            // Without an explicit sample time, render the settled end state.
            while view.is_animating() {
                view.advance(Duration::from_millis(16))
                    .map_err(|err| err.to_string())?;
            }
        }
    }

    let phase = view.phase();
    let document = view.unmount().into_document();
    fs::write(&args.output_path, document).map_err(|err| {
        format!(
            "failed to write svg output `{}`: {err}",
            args.output_path.display()
        )
    })?;
    println!(
        "wrote {} (phase: {phase:?})",
        args.output_path.display()
    );
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input_path = None;
    let mut config_path = None;
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut step = None;
    let mut elapsed_ms = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input_path = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--step" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --step".to_owned())?;
                step = Some(
                    value
                        .parse::<i64>()
                        .map_err(|err| format!("invalid --step `{value}`: {err}"))?,
                );
            }
            "--elapsed-ms" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --elapsed-ms".to_owned())?;
                elapsed_ms = Some(
                    value
                        .parse::<u64>()
                        .map_err(|err| format!("invalid --elapsed-ms `{value}`: {err}"))?,
                );
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        input_path,
        config_path,
        output_path,
        step,
        elapsed_ms,
    })
}

fn print_usage() {
    println!("{}", usage_message());
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --bin render_scatter_svg -- [options]\n\nOptions:\n  --input <path>       Colour-term data JSON (default: bundled Iliad data)\n  --config <path>      View config JSON, bare or contract v1\n  --output <path>      SVG output path (default: {DEFAULT_OUTPUT_PATH})\n  --step <n>           Active step pushed after mount\n  --elapsed-ms <n>     Sample the entrance at this time instead of its end\n  -h, --help           Show this message"
    )
}

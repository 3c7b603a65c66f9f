use clap::Parser;
use fast_hough::config::{load_config, SkewToolConfig};
use fast_hough::image::io::{load_image, write_json_file};
use fast_hough::FastHoughTransformer;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "fast-hough")]
#[command(about = "Estimate the slant angle of an image with the fast Hough transform")]
#[command(version)]
struct Cli {
    /// Image to analyse.
    input: PathBuf,

    /// Where to write the normalized accumulator as a grayscale image.
    output: PathBuf,

    /// Path to write a JSON report (per-angle profile, stage timings).
    #[arg(long)]
    report: Option<PathBuf>,

    /// JSON settings file overriding the transform parameters.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    // usage errors exit with status 2
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> fast_hough::Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SkewToolConfig::default(),
    };
    let report_path = cli.report.or(config.report);

    let image = load_image(&cli.input)?;
    let begin = Instant::now();
    let fht = FastHoughTransformer::with_params(image.as_view(), config.transform)?;
    let report = fht.report();
    let elapsed = begin.elapsed();

    println!("Slant angle = {}", report.angle_deg);
    println!(
        "Fast Hough transformation time = {} milliseconds",
        elapsed.as_millis()
    );

    fht.save_accumulator(&cli.output)?;
    println!("Saved accumulator to {}", cli.output.display());
    if let Some(path) = report_path {
        write_json_file(&path, &report)?;
        println!("Saved report to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn two_positionals_are_required() {
        let err = Cli::try_parse_from(["fast-hough", "in.png"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
        assert!(Cli::try_parse_from(["fast-hough", "a", "b", "c"]).is_err());

        let cli = Cli::try_parse_from(["fast-hough", "in.png", "out.png"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.png"));
        assert_eq!(cli.output, PathBuf::from("out.png"));
        assert!(cli.report.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn flags_take_values() {
        let cli = Cli::try_parse_from([
            "fast-hough", "--report", "r.json", "in.png", "out.png", "--config", "c.json",
        ])
        .unwrap();
        assert_eq!(cli.report, Some(PathBuf::from("r.json")));
        assert_eq!(cli.config, Some(PathBuf::from("c.json")));

        let missing = Cli::try_parse_from(["fast-hough", "in.png", "out.png", "--report"]);
        assert_eq!(missing.unwrap_err().exit_code(), 2);
        let unknown = Cli::try_parse_from(["fast-hough", "in.png", "out.png", "--verbose"]);
        assert_eq!(unknown.unwrap_err().kind(), ErrorKind::UnknownArgument);
    }
}

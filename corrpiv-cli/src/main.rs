mod config;

use clap::Parser;
use config::{ConfigFile, RunConfig};
use corrpiv::io::load_gray_frame;
use corrpiv::{frame_path, write_field_csv, DisplacementField, FramePair, Piv};
use std::error::Error;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Cross-correlation PIV over an image sequence")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable library tracing spans for profiling.
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut filter = EnvFilter::from_default_env().add_directive("corrpiv_cli=info".parse()?);
    if cli.trace {
        filter = filter.add_directive("corrpiv=info".parse()?);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)
        .map_err(|err| format!("reading {}: {err}", cli.config.display()))?;
    let run = ConfigFile::from_json(&config_text)?.resolve()?;
    run_sequence(&run)
}

fn run_sequence(run: &RunConfig) -> Result<(), Box<dyn Error>> {
    let piv = Piv::new(run.params)?;
    fs::create_dir_all(&run.output_dir)?;

    info!(
        input = %run.input_dir.display(),
        output = %run.output_dir.display(),
        "program start"
    );
    for pair in run.sequence.pairs() {
        let started = Instant::now();

        let first = load_gray_frame(frame_path(&run.input_dir, pair.first, &run.extension))?;
        let second = load_gray_frame(frame_path(&run.input_dir, pair.second, &run.extension))?;
        let field = piv.compute(&first, &second)?;
        write_pair(&run.output_dir, pair, &field)?;

        info!(
            first = pair.first,
            second = pair.second,
            determined = field.determined_count(),
            total = field.cols() * field.rows(),
            elapsed_s = started.elapsed().as_secs_f64(),
            "pair finished"
        );
    }
    info!("program end");
    Ok(())
}

fn write_pair(
    dir: &Path,
    pair: FramePair,
    field: &DisplacementField,
) -> Result<(), Box<dyn Error>> {
    let dx_path = dir.join(pair.dx_file_name());
    let dy_path = dir.join(pair.dy_file_name());
    let create = |path: &Path| {
        File::create(path)
            .map(BufWriter::new)
            .map_err(|err| format!("creating {}: {err}", path.display()))
    };
    let dx_out = create(dx_path.as_path())?;
    let dy_out = create(dy_path.as_path())?;
    write_field_csv(field, dx_out, dy_out).map_err(|err| {
        format!(
            "writing {} / {}: {err}",
            dx_path.display(),
            dy_path.display()
        )
    })?;
    Ok(())
}

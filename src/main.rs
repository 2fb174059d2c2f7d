use anyhow::{Context, bail};
use clap::Parser;
use contour_volume::{AnalysisWorker, EngineConfig, WorkerEvent, volume_estimate};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contour-volume", about = "Net area and volume of nested SVG contours")]
struct Cli {
    /// Input SVG file
    input: PathBuf,

    /// Extrusion depth; prints a volume estimate when given
    #[arg(short, long)]
    depth: Option<f64>,

    /// Points sampled per curve segment
    #[arg(long, default_value_t = contour_volume::CURVE_SAMPLES)]
    samples: usize,

    /// List every contour in draw order
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let svg = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let worker = AnalysisWorker::spawn(EngineConfig::with_curve_samples(cli.samples))?;
    let generation = worker.submit(svg)?;

    let analysis = loop {
        match worker.recv()? {
            WorkerEvent::Busy { .. } => eprintln!("Calculating..."),
            WorkerEvent::Done {
                generation: g,
                analysis,
            } if g == generation => break analysis,
            WorkerEvent::Failed { error, .. } => bail!("{}: {error}", cli.input.display()),
            _ => {}
        }
    };

    for warning in &analysis.warnings {
        eprintln!("warning: {warning}");
    }

    if cli.list {
        for contour in &analysis.contours {
            println!(
                "#{:<4} depth {:<3} {:<5} area {:.3}",
                contour.element,
                contour.depth,
                format!("{:?}", contour.fill).to_lowercase(),
                contour.area
            );
        }
    }

    println!("net area: {:.3}", analysis.net_area);
    if let Some(depth) = cli.depth {
        println!("volume: {:.3}", volume_estimate(analysis.net_area, depth));
    }
    Ok(())
}

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser};
use laneview::Config;
use laneview::app::App;
use laneview::draw::CairoCanvas;
use laneview::road::TrackLayout;
use laneview::scenario::Scenario;
use laneview::scene::Scene;
use laneview::util::generate_filename;
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "laneview")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("LANEVIEW_GIT_HASH"), ")"),
    about = "Road track and lane visualizer"
)]
struct Cli {
    /// Scenario file (JSON) describing tracks, lanes and cars
    #[arg(value_name = "SCENARIO")]
    scenario: PathBuf,

    /// PNG file every presented frame is written to
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Number of frames to render (0 = until interrupted)
    #[arg(long, short = 'n', value_name = "FRAMES", default_value_t = 1)]
    frames: u64,

    /// Configuration file (defaults to ~/.config/laneview/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Validate the scenario and lay out every track without drawing
    #[arg(long, action = ArgAction::SetTrue)]
    check: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())
        .inspect_err(|err| error!("Failed to load config: {err:#}"))?;

    let scenario = Scenario::load(&cli.scenario).inspect_err(|err| error!("{err}"))?;
    let simulation = scenario
        .build(config.simulation.tick_rate, config.simulation.car_length)
        .inspect_err(|err| error!("Invalid scenario: {err}"))?;
    let style = config.road_style();

    if cli.check {
        for (id, track) in simulation.road().tracks() {
            TrackLayout::lane_offsets(track, &style).map_err(|err| {
                error!("Track {}: {}", id.0, err);
                anyhow!("track {}: {}", id.0, err)
            })?;
        }
        println!(
            "Scenario OK: {} tracks, {} cars",
            simulation.road().len(),
            simulation.cars().len()
        );
        return Ok(());
    }

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(generate_filename(&config.display.filename_template, "png")));
    let canvas = CairoCanvas::new(config.display.width, config.display.height, Some(output.clone()))
        .context("Failed to create drawing surface")?;
    let scene = Scene::for_road(simulation.road(), config.background());

    let mut app = App::new(scene, simulation, style, canvas, config.display.fps);
    app.install_signal_handlers()?;

    info!("laneview {} ({})", env!("CARGO_PKG_VERSION"), env!("LANEVIEW_GIT_HASH"));
    let limit = (cli.frames > 0).then_some(cli.frames);
    let frames = app
        .run(limit)
        .inspect_err(|err| error!("Rendering aborted: {err}"))?;

    info!("Rendered {} frame(s) to {}", frames, output.display());
    Ok(())
}

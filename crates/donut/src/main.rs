use clap::Parser;
use donut::config;
use donut::gui::app::AppModel;
use donut::gui::chart::State;
use donut::gui::snapshot;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "donut", version, about = "Animated donut chart", long_about = None)]
struct Cli {
    /// Chart configuration file (TOML). Defaults to the user config directory
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Render the finished chart to a PNG file instead of opening a window
    #[arg(short = 's', long, value_name = "FILE")]
    snapshot: Option<PathBuf>,

    /// Write the default configuration file (if missing) and print its path
    #[arg(long)]
    init: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.init {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default(cli.config.as_deref())?;
    let chart = config.build_chart()?;

    if let Some(path) = cli.snapshot {
        snapshot::write_png(chart, &path)?;
        return Ok(());
    }

    let app = RelmApp::new("org.donut.chart");
    app.run::<AppModel>(State::new(chart));

    Ok(())
}

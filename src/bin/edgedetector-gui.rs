use clap::Parser;

use edgedetector::{gui, logging};

#[derive(Parser)]
#[command(name = "edgedetector-gui")]
#[command(about = "Interactive edge detection")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init(args.verbose);

    gui::run_app().map_err(|e| anyhow::anyhow!("GUI failed: {}", e))
}

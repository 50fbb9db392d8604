use anyhow::Context;
use env_logger::Env;
use log::info;

use orbit_pilot::{DemoConfig, DemoMode, PilotApp};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mode = DemoMode::resolve(std::env::args().nth(1).as_deref())
        .context("failed to select demo mode")?;
    info!("Starting orbit-pilot in {} mode", mode);

    let app = PilotApp::new(DemoConfig::for_mode(mode)).context("failed to set up the demo")?;
    app.run().context("demo terminated with an error")
}

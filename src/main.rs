use anyhow::{bail, Context, Result};
use log::info;
use portals::runtime::{headless_backend, windowed_backend, LogRenderer};
use portals::{PortalsApp, Settings};

const USAGE: &str = "usage: portals [headless [FRAMES] | windowed]";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::default();
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None | Some("headless") => {
            let frames = args
                .next()
                .map(|frames| frames.parse::<u64>())
                .transpose()
                .context(USAGE)?;
            let mut renderer = LogRenderer::default();
            headless_backend::<PortalsApp, _>(settings, &settings, &mut renderer, frames)?;
            info!(
                "{} portal views rendered, {} skipped",
                renderer.portal_views(),
                renderer.skipped_portal_views()
            );
            Ok(())
        }
        Some("windowed") => windowed_backend::<PortalsApp, _>(settings, settings, LogRenderer::default()),
        Some(other) => bail!("Unknown mode {:?}\n{}", other, USAGE),
    }
}

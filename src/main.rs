use std::error::Error;
use std::time::Instant;

use log::{error, info};

use glint::{config::RenderConfig, render::Renderer, scene};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RenderConfig::default();
    let world = scene::default_world()?;
    info!(
        "Scene: {} spheres, {} planes, {} point lights, ambient {}",
        world.spheres().len(),
        world.planes().len(),
        world.lights().len(),
        world.ambient().intensity
    );

    info!("Start drawing {}x{} ...", config.width, config.height);
    let now = Instant::now();

    let canvas = Renderer::new(&world, &config).render()?;

    info!("Finished, elapsed: {} ms", now.elapsed().as_millis());

    // A failed write is reported, not fatal.
    match canvas.save(&config.output) {
        Ok(()) => info!("Image written to '{}'", config.output.display()),
        Err(why) => error!("Failed to write out to image file: {}", why),
    }

    Ok(())
}

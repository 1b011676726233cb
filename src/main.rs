//! Demo: grow a small deterministic aggregate and export its sprite.
//!
//! Run with: `cargo run --release`
//!
//! Places particles on a golden-angle spiral (a stand-in for a real DLA
//! engine), drives the view one spawn+update per particle, records radius
//! samples and writes the resulting sprite texture to `aggregate_sprite.png`.

use aggvis::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = RunConfig::new()
        .with_particle_target(500)
        .with_stickiness(1.0);
    config.validate()?;

    let mut view = AggregateView::new();
    let mut chart = RadiusChart::new();
    chart.add_series(config.particle_target, config.stickiness);

    let golden_angle = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
    let mut radius_max = 0.0_f64;

    for i in 0..config.particle_target {
        let angle = i as f32 * golden_angle;
        let r = (i as f32).sqrt();
        let position = Vec3::new(r * angle.cos(), r * angle.sin(), 0.0);

        // Color ramps from blue at the seed to red at the rim.
        let t = i as f32 / config.particle_target as f32;
        let color = Vec4::new(t, 0.2, 1.0 - t, 1.0);

        view.add_particle(position, color, config.particle_size);
        view.update()?;

        radius_max = radius_max.max(position.length() as f64);
        chart.add_point(i + 1, radius_max)?;
    }

    let model = view.model();
    info!(
        particles = config.particle_target,
        vertices = model.mesh.positions().len(),
        indices = model.mesh.indices().len(),
        radius = radius_max,
        axis_step = axis_step(config.particle_target),
        "aggregate built"
    );

    model.sprite.to_image().save("aggregate_sprite.png")?;
    info!("sprite written to aggregate_sprite.png");

    let series = chart.active().expect("series opened above");
    info!(
        label = series.label(),
        samples = series.len(),
        "chart series recorded"
    );

    Ok(())
}

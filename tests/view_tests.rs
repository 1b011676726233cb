//! Integration tests driving the public facade the way a host would: spawn
//! and update per simulation event, chart samples per run, clear between
//! runs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use aggvis::prelude::*;

// ============================================================================
// Scene / geometry
// ============================================================================

#[test]
fn test_worked_example_unit_particle_at_origin() {
    let mut view = AggregateView::new();
    view.add_particle(Vec3::ZERO, Vec4::new(1.0, 0.0, 0.0, 1.0), 1.0);
    view.update().unwrap();

    let model = view.model();
    assert_eq!(
        model.mesh.positions(),
        &[
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ]
    );
    assert_eq!(model.mesh.indices(), &[0, 2, 1, 0, 3, 2]);
}

#[test]
fn test_buffer_shape_after_random_walk_sequence() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut view = AggregateView::new();
    let n = 200;

    // Random-walk-ish positions, like a DLA engine would report.
    let mut pos = Vec3::ZERO;
    for i in 0..n {
        pos += Vec3::new(
            rng.gen_range(-1.0..1.0_f32).signum(),
            rng.gen_range(-1.0..1.0_f32).signum(),
            0.0,
        );
        let color = Vec4::new(rng.gen(), rng.gen(), rng.gen(), 1.0);
        view.add_particle(pos, color, 1.0);
        view.update().unwrap();

        let mesh = view.model().mesh;
        assert_eq!(mesh.positions().len(), 4 * (i + 1));
        assert_eq!(mesh.tex_coords().len(), 4 * (i + 1));
        assert_eq!(mesh.indices().len(), 6 * (i + 1));
    }

    // Every index stays within the position sequence.
    let mesh = view.model().mesh;
    let vertex_count = mesh.positions().len() as u32;
    assert!(mesh.indices().iter().all(|&i| i < vertex_count));
}

#[test]
fn test_clear_then_fresh_cycles_match_pristine() {
    let grow = |view: &mut AggregateView, n: usize| {
        for i in 0..n {
            view.add_particle(Vec3::new(i as f32, 0.0, 0.0), Vec4::ONE, 0.5);
            view.update().unwrap();
        }
    };

    let mut pristine = AggregateView::new();
    grow(&mut pristine, 12);

    let mut recycled = AggregateView::new();
    grow(&mut recycled, 40);
    recycled.clear_aggregate();
    grow(&mut recycled, 12);

    assert_eq!(
        pristine.model().mesh.positions(),
        recycled.model().mesh.positions()
    );
    assert_eq!(
        pristine.model().mesh.indices(),
        recycled.model().mesh.indices()
    );
    assert_eq!(pristine.model().sprite.data, recycled.model().sprite.data);
}

#[test]
fn test_update_on_cleared_view_fails() {
    let mut view = AggregateView::new();
    view.add_particle(Vec3::ZERO, Vec4::ONE, 1.0);
    view.update().unwrap();
    view.clear_aggregate();
    assert_eq!(view.update(), Err(SceneError::EmptyStore));
}

// ============================================================================
// Chart
// ============================================================================

#[test]
fn test_chart_run_lifecycle() {
    let config = RunConfig::new()
        .with_particle_target(3000)
        .with_stickiness(0.6);
    config.validate().unwrap();

    let mut chart = RadiusChart::new();
    assert_eq!(chart.add_point(1, 0.0), Err(ChartError::NoActiveSeries));

    chart.add_series(config.particle_target, config.stickiness);
    for i in 1..=100u32 {
        chart.add_point(i, (i as f64).sqrt()).unwrap();
    }

    let series = chart.active().unwrap();
    assert_eq!(series.label(), "3000 particles, stickiness 0.6");
    assert_eq!(series.len(), 100);

    // Samples append monotonically in x.
    let points = series.points();
    assert!(points.windows(2).all(|w| w[0][0] < w[1][0]));

    assert_eq!(axis_step(config.particle_target), 200);
    assert_eq!(AxisLimits::for_target(config.particle_target).max, 3000);

    chart.clear_all();
    assert_eq!(chart.add_point(1, 0.0), Err(ChartError::NoActiveSeries));
}

#[test]
fn test_two_runs_keep_separate_series() {
    let mut chart = RadiusChart::new();
    chart.add_series(1000, 1.0);
    chart.add_point(1, 0.0).unwrap();

    chart.add_series(8000, 0.25);
    chart.add_point(1, 0.0).unwrap();
    chart.add_point(2, 1.0).unwrap();

    let all = chart.series();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].len(), 1);
    assert_eq!(all[1].len(), 2);
    assert_ne!(all[0].label(), all[1].label());
}

// ============================================================================
// Scene + chart together, the way the presentation loop runs them
// ============================================================================

#[test]
fn test_full_run_with_sprite_and_chart() {
    let config = RunConfig::new()
        .with_particle_target(64)
        .with_stickiness(1.0)
        .with_particle_size(1.0);
    config.validate().unwrap();

    let mut view = AggregateView::new();
    let mut chart = RadiusChart::new();
    chart.add_series(config.particle_target, config.stickiness);

    let mut radius_max = 0.0_f64;
    for i in 0..config.particle_target {
        let position = Vec3::new(i as f32, -(i as f32), 0.0);
        view.add_particle(position, Vec4::new(0.0, 0.0, 1.0, 1.0), config.particle_size);
        view.update().unwrap();

        radius_max = radius_max.max(position.length() as f64);
        chart.add_point(i + 1, radius_max).unwrap();
    }

    let model = view.model();
    assert_eq!(model.mesh.quad_count(), 64);
    assert_eq!(model.sprite.width, DEFAULT_SPRITE_SIZE);
    // All particles are blue, so the sprite center is blue.
    assert_eq!(model.sprite.pixel(16, 16), [0, 0, 255, 255]);

    assert_eq!(chart.active().unwrap().len(), 64);
}

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

use crate::config::TermConfig;
use crate::constants::{
    FALL_RATE, FLOAT_RISE_MAX, FLOAT_RISE_MIN, SHRINK_FACTOR, VERTICAL_BIAS,
};
use crate::marker::{Behavior, Category, Marker};

/// Generate one batch of markers for a single term occurrence.
///
/// Produces exactly `config.marker_count` records. The batch height is
/// deterministic (occurrence index and token count, via `height_base`);
/// only the lateral spread, the per-marker rotation, and the float ceiling
/// are sampled. Degenerate spread/scale values are clamped, not propagated.
pub fn generate_batch(
    height_base: f32,
    config: &TermConfig,
    category: Category,
    rng: &mut impl Rng,
) -> Vec<Marker> {
    let half = config.clamped_spread() / 2.0;
    let scale = config.clamped_scale();
    let y = height_base + VERTICAL_BIAS;

    (0..config.marker_count)
        .map(|_| {
            let position = Vec3::new(
                rng.random_range(-half..=half),
                y,
                rng.random_range(-half..=half),
            );

            let rotation = config.randomize_rotation.then(|| {
                Vec3::new(
                    rng.random::<f32>() * TAU,
                    rng.random::<f32>() * TAU,
                    rng.random::<f32>() * TAU,
                )
            });

            let behavior = match category {
                Category::Falling => Behavior::Falling {
                    shrink_factor: SHRINK_FACTOR,
                    fall_rate: FALL_RATE,
                },
                Category::Pulsing => Behavior::Pulsing {
                    original_scale: scale,
                },
                Category::Floating => Behavior::Floating {
                    ceiling: y + rng.random_range(FLOAT_RISE_MIN..FLOAT_RISE_MAX),
                },
            };

            Marker::new(position, rotation, scale, category, behavior)
        })
        .collect()
}

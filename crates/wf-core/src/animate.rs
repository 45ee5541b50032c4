use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{FLOAT_RATE, MIN_ALTITUDE, MIN_SCALE, PULSE_AMPLITUDE, PULSE_FREQUENCY};
use crate::marker::{Behavior, Categories, Category, Marker};

/// One per-marker mutation for a single display tick.
///
/// `index` addresses the marker within its category's record list; `id` lets
/// a rendering host find the visual object it created for this record.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MarkerMutation {
    pub id: Uuid,
    pub category: Category,
    pub index: usize,
    pub scale: Option<f32>,
    pub position: Option<Vec3>,
}

/// Compute this tick's mutations for every marker in every category.
///
/// Pure: reads current state, never writes. No category's rule reads another
/// category's records, so output order across categories carries no meaning.
pub fn step(elapsed: f32, categories: &Categories) -> Vec<MarkerMutation> {
    let mut mutations = Vec::with_capacity(categories.total());
    for category in Category::ALL {
        for (index, marker) in categories.records(category).iter().enumerate() {
            mutations.push(step_marker(elapsed, index, marker));
        }
    }
    mutations
}

fn step_marker(elapsed: f32, index: usize, marker: &Marker) -> MarkerMutation {
    let (scale, position) = match marker.behavior {
        Behavior::Falling {
            shrink_factor,
            fall_rate,
        } => {
            let scale = (marker.scale * shrink_factor).max(MIN_SCALE);
            let mut position = marker.position;
            position.y = (position.y - fall_rate).max(MIN_ALTITUDE);
            (Some(scale), Some(position))
        }
        Behavior::Pulsing { original_scale } => {
            let scale =
                original_scale * (1.0 + PULSE_AMPLITUDE * (elapsed * PULSE_FREQUENCY).sin());
            (Some(scale), None)
        }
        Behavior::Floating { ceiling } => {
            // Holds at the ceiling once reached.
            let mut position = marker.position;
            position.y = (position.y + FLOAT_RATE).min(ceiling);
            (None, Some(position))
        }
    };

    MarkerMutation {
        id: marker.id,
        category: marker.category,
        index,
        scale,
        position,
    }
}

/// Commit a tick's mutations back to the owned records.
///
/// Descriptors that no longer resolve (stale after a reset) are ignored.
pub fn apply(categories: &mut Categories, mutations: &[MarkerMutation]) {
    for mutation in mutations {
        if let Some(marker) = categories.records_mut(mutation.category).get_mut(mutation.index)
            && marker.id == mutation.id
        {
            if let Some(scale) = mutation.scale {
                marker.scale = scale;
            }
            if let Some(position) = mutation.position {
                marker.position = position;
            }
        }
    }
}

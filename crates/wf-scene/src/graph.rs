use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wf_core::{Category, Marker, MarkerMutation, Rgb};

use crate::host::RenderHost;

/// One tracked visual object inside a category group.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MarkerObject {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    pub color: Rgb,
}

/// In-memory rendering host: three named groups of tracked objects.
///
/// Stands in for a real renderer in tests and the CLI; a GPU-backed host
/// would implement [`RenderHost`] the same way against its own scene nodes.
#[derive(Debug, Default)]
pub struct SceneGraph {
    groups: HashMap<Category, HashMap<Uuid, MarkerObject>>,
    hidden: Vec<Category>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group_len(&self, category: Category) -> usize {
        self.groups.get(&category).map_or(0, HashMap::len)
    }

    pub fn total(&self) -> usize {
        self.groups.values().map(HashMap::len).sum()
    }

    pub fn is_visible(&self, category: Category) -> bool {
        !self.hidden.contains(&category)
    }

    pub fn object(&self, category: Category, id: Uuid) -> Option<&MarkerObject> {
        self.groups.get(&category)?.get(&id)
    }

    /// Snapshot the graph in stable (id-sorted) order for serialization.
    pub fn snapshot(&self) -> SceneSnapshot {
        let groups = Category::ALL
            .iter()
            .map(|&category| {
                let mut markers: Vec<MarkerSnapshot> = self
                    .groups
                    .get(&category)
                    .into_iter()
                    .flatten()
                    .map(|(&id, object)| MarkerSnapshot {
                        id,
                        position: object.position,
                        rotation: object.rotation,
                        scale: object.scale,
                        color: object.color,
                    })
                    .collect();
                markers.sort_by_key(|m| m.id);
                GroupSnapshot {
                    category,
                    visible: self.is_visible(category),
                    markers,
                }
            })
            .collect();
        SceneSnapshot { groups }
    }
}

impl RenderHost for SceneGraph {
    fn add_marker(&mut self, marker: &Marker, color: Rgb) {
        self.groups.entry(marker.category).or_default().insert(
            marker.id,
            MarkerObject {
                position: marker.position,
                rotation: marker.rotation.unwrap_or(Vec3::ZERO),
                scale: marker.scale,
                color,
            },
        );
    }

    fn apply(&mut self, mutation: &MarkerMutation) {
        let Some(object) = self
            .groups
            .get_mut(&mutation.category)
            .and_then(|group| group.get_mut(&mutation.id))
        else {
            return;
        };
        if let Some(scale) = mutation.scale {
            object.scale = scale;
        }
        if let Some(position) = mutation.position {
            object.position = position;
        }
    }

    fn clear_category(&mut self, category: Category) {
        if let Some(group) = self.groups.get_mut(&category) {
            group.clear();
        }
    }

    fn set_visible(&mut self, category: Category, visible: bool) {
        if visible {
            self.hidden.retain(|&c| c != category);
        } else if !self.hidden.contains(&category) {
            self.hidden.push(category);
        }
    }
}

/// Serializable view of the whole scene, one entry per category group.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub groups: Vec<GroupSnapshot>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupSnapshot {
    pub category: Category,
    pub visible: bool,
    pub markers: Vec<MarkerSnapshot>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MarkerSnapshot {
    pub id: Uuid,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    pub color: Rgb,
}

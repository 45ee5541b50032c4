use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Animation category. Each term slot routes its markers to exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Falling,
    Pulsing,
    Floating,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Falling, Category::Pulsing, Category::Floating];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Falling => "falling",
            Self::Pulsing => "pulsing",
            Self::Floating => "floating",
        }
    }

    /// Slot order is fixed: slot 0 falls, slot 1 pulses, slot 2 floats.
    pub fn from_slot(slot: usize) -> Self {
        match slot {
            0 => Self::Falling,
            1 => Self::Pulsing,
            _ => Self::Floating,
        }
    }
}

/// Behavior-specific state captured once at placement time.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Behavior {
    Falling { shrink_factor: f32, fall_rate: f32 },
    Pulsing { original_scale: f32 },
    Floating { ceiling: f32 },
}

/// One placed visual marker derived from a term occurrence.
///
/// The id is stable across mutations so a rendering host can track the
/// object it created for this record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Marker {
    pub id: Uuid,
    pub position: Vec3,
    /// Per-axis Euler rotation in radians; None means identity.
    pub rotation: Option<Vec3>,
    pub scale: f32,
    pub category: Category,
    pub behavior: Behavior,
}

impl Marker {
    pub fn new(
        position: Vec3,
        rotation: Option<Vec3>,
        scale: f32,
        category: Category,
        behavior: Behavior,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            rotation,
            scale,
            category,
            behavior,
        }
    }
}

/// The three per-category record collections owned by a session.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Categories {
    pub falling: Vec<Marker>,
    pub pulsing: Vec<Marker>,
    pub floating: Vec<Marker>,
}

impl Categories {
    pub fn records(&self, category: Category) -> &[Marker] {
        match category {
            Category::Falling => &self.falling,
            Category::Pulsing => &self.pulsing,
            Category::Floating => &self.floating,
        }
    }

    pub fn records_mut(&mut self, category: Category) -> &mut Vec<Marker> {
        match category {
            Category::Falling => &mut self.falling,
            Category::Pulsing => &mut self.pulsing,
            Category::Floating => &mut self.floating,
        }
    }

    /// Total marker count across all categories.
    pub fn total(&self) -> usize {
        self.falling.len() + self.pulsing.len() + self.floating.len()
    }

    /// Drop every record in every category. Resets are total, never partial.
    pub fn clear(&mut self) {
        self.falling.clear();
        self.pulsing.clear();
        self.floating.clear();
    }

    /// Iterate over all markers across all categories in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.falling
            .iter()
            .chain(self.pulsing.iter())
            .chain(self.floating.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_marker(category: Category) -> Marker {
        let behavior = match category {
            Category::Falling => Behavior::Falling {
                shrink_factor: 0.98,
                fall_rate: 0.05,
            },
            Category::Pulsing => Behavior::Pulsing {
                original_scale: 1.0,
            },
            Category::Floating => Behavior::Floating { ceiling: 5.0 },
        };
        Marker::new(Vec3::ZERO, None, 1.0, category, behavior)
    }

    #[test]
    fn test_slot_mapping() {
        assert_eq!(Category::from_slot(0), Category::Falling);
        assert_eq!(Category::from_slot(1), Category::Pulsing);
        assert_eq!(Category::from_slot(2), Category::Floating);
    }

    #[test]
    fn test_records_route_by_category() {
        let mut categories = Categories::default();
        for category in Category::ALL {
            categories.records_mut(category).push(make_marker(category));
        }
        for category in Category::ALL {
            assert_eq!(categories.records(category).len(), 1);
            assert_eq!(categories.records(category)[0].category, category);
        }
        assert_eq!(categories.total(), 3);
    }

    #[test]
    fn test_clear_is_total() {
        let mut categories = Categories::default();
        for category in Category::ALL {
            categories.records_mut(category).push(make_marker(category));
        }
        categories.clear();
        assert_eq!(categories.total(), 0);
        for category in Category::ALL {
            assert!(categories.records(category).is_empty());
        }
    }

    #[test]
    fn test_ids_unique() {
        let a = make_marker(Category::Falling);
        let b = make_marker(Category::Falling);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut categories = Categories::default();
        categories.falling.push(make_marker(Category::Falling));
        let json = serde_json::to_string(&categories).unwrap();
        let categories2: Categories = serde_json::from_str(&json).unwrap();
        assert_eq!(categories2.total(), 1);
        assert_eq!(categories2.falling[0].id, categories.falling[0].id);
    }
}

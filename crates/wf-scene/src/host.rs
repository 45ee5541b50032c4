use wf_core::{Category, Marker, MarkerMutation, Rgb};

/// Boundary to the rendering host.
///
/// The host accepts marker-derived visual objects into one of three named
/// groups and applies per-tick mutation descriptors to them. Host failures
/// (missing canvas, lost device) are the host's responsibility; this
/// interface is infallible.
pub trait RenderHost {
    /// Create a visual object for a freshly placed marker in its category
    /// group, tinted with the owning term's color.
    fn add_marker(&mut self, marker: &Marker, color: Rgb);

    /// Apply one mutation descriptor to the tracked object. Descriptors for
    /// unknown ids (stale after a reset) must be ignored.
    fn apply(&mut self, mutation: &MarkerMutation);

    /// Remove every object in a category group.
    fn clear_category(&mut self, category: Category);

    /// Toggle a category group's visibility. Visibility is a host concern;
    /// hidden groups still receive mutations.
    fn set_visible(&mut self, category: Category, visible: bool);
}

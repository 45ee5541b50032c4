use rand::SeedableRng;
use rand::rngs::SmallRng;

use wf_core::{Category, Result, Session, SessionPhase, TermConfig};

use crate::host::RenderHost;

/// Wires control-panel actions to session transitions and mirrors the
/// resulting state into a rendering host.
///
/// The panel exposes two trigger actions (submit text, submit terms) plus
/// per-category visibility toggles; the camera turntable toggle is consumed
/// by the host directly and never reaches this layer.
pub struct SceneDriver<H: RenderHost> {
    session: Session,
    host: H,
    rng: SmallRng,
}

impl<H: RenderHost> SceneDriver<H> {
    pub fn new(host: H) -> Self {
        Self::with_rng(host, SmallRng::from_os_rng())
    }

    /// Deterministic driver for tests and reproducible runs.
    pub fn seeded(host: H, seed: u64) -> Self {
        Self::with_rng(host, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(host: H, rng: SmallRng) -> Self {
        Self {
            session: Session::new(),
            host,
            rng,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// "Submit text" trigger. Discards all host objects along with the
    /// session's own records.
    pub fn submit_text(&mut self, text: &str) {
        self.session.submit_text(text);
        self.clear_host();
        tracing::debug!(tokens = self.session.tokens().len(), "text submitted");
    }

    /// "Submit terms" trigger. On success the host groups are rebuilt from
    /// the fresh generation; on validation failure host and session keep the
    /// prior generation.
    pub fn submit_terms(&mut self, configs: &[TermConfig; 3]) -> Result<[usize; 3]> {
        let placed = self.session.submit_terms(configs, &mut self.rng)?;

        self.clear_host();
        for (slot, config) in configs.iter().enumerate() {
            let category = Category::from_slot(slot);
            for marker in self.session.categories().records(category) {
                self.host.add_marker(marker, config.color);
            }
        }

        tracing::debug!(
            falling = placed[0],
            pulsing = placed[1],
            floating = placed[2],
            "terms submitted"
        );
        Ok(placed)
    }

    /// Per-frame callback: advance the session one tick and forward every
    /// mutation descriptor to the host. Returns the mutation count.
    pub fn tick(&mut self, elapsed: f32) -> usize {
        let mutations = self.session.tick(elapsed);
        for mutation in &mutations {
            self.host.apply(mutation);
        }
        mutations.len()
    }

    /// Visibility toggle passthrough for one category group.
    pub fn set_visible(&mut self, category: Category, visible: bool) {
        self.host.set_visible(category, visible);
    }

    /// Drop everything: session back to AwaitingText, host groups emptied.
    pub fn reset(&mut self) {
        self.session.reset();
        self.clear_host();
    }

    fn clear_host(&mut self) {
        for category in Category::ALL {
            self.host.clear_category(category);
        }
    }
}

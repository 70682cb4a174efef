use orrery_engine::{
    AssetManifest, NodeKind, SceneContext, SceneSetup, SceneSnapshot,
};

/// Generic scene runner that wires a setup to the browser bridge.
///
/// Each concrete scene (e.g., `solar-system`) creates a `thread_local!`
/// SceneRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct SceneRunner<S: SceneSetup> {
    setup: S,
    ctx: SceneContext,
    initialized: bool,
}

impl<S: SceneSetup> SceneRunner<S> {
    pub fn new(setup: S) -> Self {
        let ctx = SceneContext::with_config(setup.config());
        Self {
            setup,
            ctx,
            initialized: false,
        }
    }

    /// Build the scene. Calling it again rebuilds from scratch.
    pub fn init(&mut self) {
        self.ctx.reset();
        self.setup.init(&mut self.ctx);
        self.initialized = true;
        log::info!(
            "scene built: {} nodes, {} planets, {} warnings",
            self.ctx.scene.len(),
            self.ctx.scene.planets().count(),
            self.ctx.warnings().len()
        );
    }

    /// Install textures (and optionally planets) from a JSON manifest.
    /// An already built scene is rebuilt so it picks them up.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                self.ctx.load_manifest(&manifest);
                if self.initialized {
                    self.init();
                }
            }
            Err(e) => log::error!("{e}"),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn context(&self) -> &SceneContext {
        &self.ctx
    }

    /// JSON snapshot of the whole scene. Empty string if serialization fails.
    pub fn snapshot_json(&self) -> String {
        SceneSnapshot::capture(&self.ctx.scene)
            .to_json()
            .unwrap_or_else(|e| {
                log::error!("{e}");
                String::new()
            })
    }

    /// Set the animation phase of every planet group named `name`.
    /// Returns how many groups were updated.
    pub fn set_angle(&mut self, name: &str, angle: f32) -> u32 {
        let mut updated = 0;
        for node in self.ctx.scene.iter_mut().filter(|n| n.name == name) {
            if let Some(planet) = node.as_planet_mut() {
                planet.angle = angle;
                updated += 1;
            }
        }
        updated
    }

    pub fn angle(&self, name: &str) -> Option<f32> {
        self.ctx
            .scene
            .planets()
            .find(|(node, _)| node.name == name)
            .map(|(_, planet)| planet.angle)
    }

    pub fn planet_count(&self) -> u32 {
        self.ctx.scene.planets().count() as u32
    }

    pub fn node_count(&self) -> u32 {
        self.ctx.scene.len() as u32
    }

    pub fn warning_count(&self) -> u32 {
        self.ctx.warnings().len() as u32
    }

    /// Flat `[x, y, z, ...]` star positions of the first point cloud.
    pub fn star_positions(&self) -> &[f32] {
        self.ctx
            .scene
            .iter()
            .find_map(|n| match &n.kind {
                NodeKind::Points(mesh) => Some(mesh.geometry.positions_f32()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    // ---- Pointer accessors for zero-copy reads from wasm memory ----

    pub fn star_positions_ptr(&self) -> *const f32 {
        self.star_positions().as_ptr()
    }

    pub fn star_positions_len(&self) -> u32 {
        self.star_positions().len() as u32
    }
}

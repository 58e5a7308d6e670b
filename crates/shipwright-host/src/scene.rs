//! Scene documents and scene-wide baking.
//!
//! A scene is an ordered list of [`AuthoringObject`]s, read from YAML or
//! JSON. [`bake_scene`] and [`bake_scene_parallel`] return one
//! [`TargetBake`] per object in scene order; the parallel form produces
//! exactly the same result.

use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use shipwright_bake::{AuthoringObject, BakeOutput, bake_object};
use tracing::{debug, warn};

use crate::apply::{ApplyReport, apply_output};
use crate::error::HostError;
use crate::store::EntityStore;

/// An ordered set of authoring objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Objects in scene order.
    #[serde(default)]
    pub objects: Vec<AuthoringObject>,
}

impl Scene {
    /// Parse a scene from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Yaml`] if the text is not a valid scene.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, HostError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Parse a scene from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Json`] if the text is not a valid scene.
    pub fn from_json_str(json: &str) -> Result<Self, HostError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a scene file. Files ending in `.json` are parsed as JSON,
    /// anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Io`] if the file cannot be read, or a parse
    /// error for malformed content.
    pub fn from_file(path: &Path) -> Result<Self, HostError> {
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    /// Trim stored identifiers on every object.
    pub fn normalize_in_place(&mut self) {
        for object in &mut self.objects {
            object.normalize_in_place();
        }
    }
}

/// The bake of one scene object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetBake {
    /// Scene object name.
    pub name: String,
    /// Everything the object's facets produced.
    pub output: BakeOutput,
}

fn bake_target(object: &AuthoringObject) -> TargetBake {
    let output = bake_object(object);
    debug!(
        target_name = object.name,
        facets = object.facets.len(),
        records = output.records.len(),
        flags = output.flags.len(),
        warnings = output.warnings.len(),
        "object baked"
    );
    TargetBake {
        name: object.name.clone(),
        output,
    }
}

/// Bake every object on the calling thread.
pub fn bake_scene(scene: &Scene) -> Vec<TargetBake> {
    scene.objects.iter().map(bake_target).collect()
}

/// Bake every object on a rayon pool of `workers` threads.
///
/// Results come back in scene order, so the output matches [`bake_scene`]
/// exactly. A worker count of zero or one, or a pool that fails to build,
/// bakes on the calling thread.
pub fn bake_scene_parallel(scene: &Scene, workers: usize) -> Vec<TargetBake> {
    if workers <= 1 || scene.objects.len() <= 1 {
        return bake_scene(scene);
    }

    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(|| scene.objects.par_iter().map(bake_target).collect()),
        Err(error) => {
            warn!(%error, workers, "bake pool unavailable, baking inline");
            bake_scene(scene)
        }
    }
}

/// Totals over applying a whole scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SceneSummary {
    /// Objects applied.
    pub targets: usize,
    /// Records attached.
    pub records_attached: usize,
    /// Flags attached.
    pub flags_attached: usize,
    /// Attaches refused by the store.
    pub rejected: usize,
    /// Bake warnings.
    pub warnings: usize,
}

impl SceneSummary {
    fn add(&mut self, report: &ApplyReport) {
        self.targets = self.targets.saturating_add(1);
        self.records_attached = self.records_attached.saturating_add(report.records_attached);
        self.flags_attached = self.flags_attached.saturating_add(report.flags_attached);
        self.rejected = self.rejected.saturating_add(report.rejected);
        self.warnings = self.warnings.saturating_add(report.warnings);
    }
}

/// Apply every target bake to `store` in order.
pub fn apply_scene<S: EntityStore + ?Sized>(store: &mut S, bakes: &[TargetBake]) -> SceneSummary {
    let mut summary = SceneSummary::default();
    for bake in bakes {
        summary.add(&apply_output(store, &bake.name, &bake.output));
    }
    summary
}

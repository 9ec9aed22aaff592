use std::path::Path;

use crate::{
    compose::composer::compose,
    doodle::store::DoodleStore,
    emit::c::{EmitOpts, emit},
    foundation::error::Scene2cResult,
    scene::model::SceneDef,
};

/// Compile `scene` to C source, loading doodles through `store`.
///
/// Either the whole translation unit is returned or nothing is.
pub fn compile_scene(
    scene: &SceneDef,
    store: &mut DoodleStore,
    opts: &EmitOpts,
) -> Scene2cResult<String> {
    let composed = compose(scene, store)?;
    emit(&composed, opts)
}

/// Compile the scene file at `scene_path` against doodles in `doodles_dir`.
#[tracing::instrument(
    skip_all,
    fields(
        scene = %scene_path.as_ref().display(),
        doodles = %doodles_dir.as_ref().display(),
    )
)]
pub fn compile_scene_path(
    scene_path: impl AsRef<Path>,
    doodles_dir: impl AsRef<Path>,
    opts: &EmitOpts,
) -> Scene2cResult<String> {
    let scene = SceneDef::from_path(scene_path.as_ref())?;
    let mut store = DoodleStore::from_dir(doodles_dir.as_ref());
    compile_scene(&scene, &mut store, opts)
}

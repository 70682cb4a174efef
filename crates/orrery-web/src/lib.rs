pub mod runner;

pub use runner::SceneRunner;

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// Generates:
/// - `thread_local!` storage for the SceneRunner
/// - `with_runner()` helper function
/// - wasm-bindgen exports (init, manifest loading, snapshot and angle accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyScene;
///
/// orrery_web::export_scene!(MyScene, "my-scene");
/// ```
///
/// # Arguments
///
/// - `$setup_type`: The struct type that implements `orrery_engine::SceneSetup`
/// - `$scene_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_scene {
    ($setup_type:ty, $scene_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SceneRunner<$setup_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SceneRunner<$setup_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Scene not initialized. Call scene_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn scene_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let setup = <$setup_type>::new();
            let runner = $crate::SceneRunner::new(setup);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $scene_name);
        }

        #[wasm_bindgen]
        pub fn scene_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        #[wasm_bindgen]
        pub fn scene_snapshot() -> String {
            with_runner(|r| r.snapshot_json())
        }

        #[wasm_bindgen]
        pub fn scene_set_angle(name: &str, angle: f32) -> u32 {
            with_runner(|r| r.set_angle(name, angle))
        }

        #[wasm_bindgen]
        pub fn scene_planet_count() -> u32 {
            with_runner(|r| r.planet_count())
        }

        #[wasm_bindgen]
        pub fn scene_node_count() -> u32 {
            with_runner(|r| r.node_count())
        }

        #[wasm_bindgen]
        pub fn scene_warning_count() -> u32 {
            with_runner(|r| r.warning_count())
        }

        /// Warning messages, one string per recoverable failure.
        #[wasm_bindgen]
        pub fn scene_warnings() -> $crate::js_sys::Array {
            with_runner(|r| {
                r.context()
                    .warnings()
                    .iter()
                    .map(|w| wasm_bindgen::JsValue::from_str(&w.to_string()))
                    .collect()
            })
        }

        // ---- Star buffer accessors ----

        #[wasm_bindgen]
        pub fn scene_star_positions_ptr() -> *const f32 {
            with_runner(|r| r.star_positions_ptr())
        }

        #[wasm_bindgen]
        pub fn scene_star_positions_len() -> u32 {
            with_runner(|r| r.star_positions_len())
        }
    };
}

#[doc(hidden)]
pub use js_sys;

// WASM entrypoint for Trunk.
//
// Native builds of this binary are intentionally no-ops; the app lives in the
// library crate and is mounted by `wasm_start` when loaded in the browser.

fn main() {
    // No-op on native targets.
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    portfolio::start();
}

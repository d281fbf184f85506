#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    arctic_sky::native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build starts through the library's `start()` instead.
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use econoimpact::app::App;
    use econoimpact::choreo::dom;
    use leptos::logging;

    console_error_panic_hook::set_once();

    // Process-wide engine init, once, before anything mounts. A failure
    // leaves the page static instead of broken.
    if let Err(err) = dom::init() {
        logging::error!("animation engine unavailable: {err}");
    }

    leptos::mount::mount_to_body(App)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // The page is a WASM bundle; there is nothing to run natively.
}

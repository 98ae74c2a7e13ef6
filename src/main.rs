mod app;
mod components;
mod core;
mod features;
mod models;
mod pages;

use app::App;

fn main() {
    // Route panics to the browser console instead of a silent WASM abort
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

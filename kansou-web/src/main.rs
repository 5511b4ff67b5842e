mod storage;
mod ui;
mod util;

pub use storage::LocalBlobs;

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<ui::App>::new().render();
}

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;

fn main() {
    platform::run(Box::new(app::SpinboxApp::new()));
}

mod app;
mod commands;
mod effects;
mod render;

use anyhow::Result;

fn main() -> Result<()> {
    viewer_logging::initialize(viewer_logging::LogDestination::File);

    let mut args = std::env::args().skip(1);
    let base_url = args
        .next()
        .unwrap_or_else(|| "http://127.0.0.1:8888".to_string());
    // Optional starting route, e.g. "#feeds?user_name=alice".
    let fragment = args.next().unwrap_or_else(|| "feeds".to_string());

    app::run(base_url, fragment)
}

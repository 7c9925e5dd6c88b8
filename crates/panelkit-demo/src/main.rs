//! Native entry point: replays a scripted session and prints the result.
//!
//! Usage: `panelkit-demo [scrub-config.json]`

#[cfg(feature = "native")]
fn main() -> std::process::ExitCode {
    env_logger::init();
    log::info!("Starting PanelKit demo");

    let config = match std::env::args().nth(1) {
        Some(path) => match panelkit_demo::load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return std::process::ExitCode::FAILURE;
            }
        },
        None => panelkit_core::ScrubConfig::default(),
    };
    log::debug!("Scrub config: {:?}", config);

    match panelkit_demo::replay(config) {
        Ok(report) => {
            println!("{}", report.tree);
            println!(
                "position = {:?}, segments = {}, modal visible = {}",
                report.position, report.segments, report.modal_visible
            );
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Replay failed: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    eprintln!("Native feature not enabled. Use `cargo run --features native`");
}

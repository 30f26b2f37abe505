//! Jungle Jumper entry point
//!
//! Initializes logging and runs the game loop with the headless frontend.

fn main() {
    env_logger::init();
    log::info!("{} (native) starting...", jungle_jumper::WINDOW_TITLE);

    if let Err(e) = jungle_jumper::start() {
        log::error!("Game loop failed: {}", e);
        std::process::exit(1);
    }
}

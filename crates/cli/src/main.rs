use std::io;

fn main() {
    kiosk_observability::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Boundary handler: any propagated failure becomes a stderr diagnostic
    // and the process still exits 0.
    if let Err(err) = kiosk_cli::demo::run(&mut out) {
        tracing::debug!(error = %err, "demo ended with a recovered failure");
        eprintln!("Error: {err}");
    }
}

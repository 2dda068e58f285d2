use agup_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the
    // state dir is unavailable.
    if logging::init().is_err() {
        logging::init_stderr();
    }

    // Parse CLI and dispatch. Exit 1 on any fatal failure.
    if let Err(err) = cli::run_from_args() {
        eprintln!("agup error: {:#}", err);
        std::process::exit(1);
    }
}

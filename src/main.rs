use bolticon::logger::{self, log_error};
use bolticon::{DEFAULT_TARGETS, render_all};

fn main() {
    logger::init();

    if let Err(e) = render_all(&DEFAULT_TARGETS, ".") {
        log_error("icon generation failed", &e);
        std::process::exit(1);
    }
}

use std::io::Write;

use env_logger::Env;

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Install the process logger. `RUST_LOG` overrides the default `info` filter.
/// Safe to call more than once.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(buf, "[{}] {} {}", timestamp(), record.level(), record.args())
        })
        .try_init();
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    log::error!("{}: {}", prefix, e);
}

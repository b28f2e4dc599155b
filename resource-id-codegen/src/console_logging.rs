//! Installs a logger that writes to the console. The level is taken from
//! `RUST_LOG` and defaults to `info`.

use std::io::Write;

pub fn init() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {} - {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });
    // Already initialized is fine, e.g. when driven from tests.
    let _ = builder.try_init();
}

use std::io::Write;

use book_icon_renderer::{BatchConfig, BatchGenerator};

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn main() -> book_icon_renderer::Result<()> {
    init_logger();

    BatchGenerator::new(BatchConfig::default()).generate_all()?;
    Ok(())
}

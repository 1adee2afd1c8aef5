use anyhow::Context as _;
use log::debug;

use crate::source::TimeSeededSource;

mod draw;
mod output;
mod seed;
mod source;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    // Arguments are accepted and ignored.
    debug!("ignoring {} argument(s)", std::env::args().skip(1).count());

    let seed = seed::from_clock()?;
    let mut source = TimeSeededSource::new(seed);
    let value = draw::between(&mut source);

    let stdout = std::io::stdout();
    output::write_line(&mut stdout.lock(), value).context("when writing to stdout")?;

    Ok(())
}

mod app;
mod config;
mod logging;

use std::io;

use swipe_logging::swipe_error;

fn main() -> anyhow::Result<()> {
    let options = app::parse_args(std::env::args().skip(1))?;
    logging::initialize(options.log, options.verbose);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let result = app::run(&options, stdin.lock(), &mut stdout);
    if let Err(err) = &result {
        swipe_error!("{:#}", err);
    }
    result
}

use anyhow::Result;
use clap::Parser;

mod cli;
mod logging;
mod path_guard;
mod run;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.template {
        return run::create_template();
    }

    match cli.inputs.as_slice() {
        [input] => run::run_convert(&cli, input),
        _ => {
            run::prompt_for_template()?;
            std::process::exit(1);
        }
    }
}

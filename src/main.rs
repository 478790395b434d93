use clap::Parser;

use pgen::config::{Action, Opts};

fn main() -> anyhow::Result<()> {
    pgen::utils::tracing::init();
    let opts = Opts::parse();
    tracing::debug!("pgen {} with {:?}", pgen::VERSION, opts);

    match opts.resolve()? {
        Action::PrintSets => {
            println!("{}", pgen::sets::render_sets());
        }
        Action::Empty => {
            tracing::debug!("Zero-length string allowed, nothing to generate");
        }
        Action::Generate(request) => {
            let generated = pgen::generate::generate(&request)?;
            println!("{}", generated);
        }
    }

    Ok(())
}

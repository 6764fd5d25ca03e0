use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod font;
mod icon_gen;

#[derive(Debug, Parser)]
#[clap(
    name = "ext-icon-gen",
    about = "Generate placeholder gradient PNG icons for a browser extension"
)]
struct Args {
    /// Output directory for the generated icons.
    #[clap(short, long, value_name = "DIR", default_value = "extension/icons")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(&args.output)
}

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use lumascan_core::io::open_source;

#[derive(Args)]
pub struct InfoArgs {
    /// Input SER file or directory of image frames
    pub input: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let source = open_source(&args.input)?;
    let info = source.source_info();

    println!("Source:      {}", info.path.display());
    match info.total_frames {
        Some(n) => println!("Frames:      {}", n),
        None => println!("Frames:      unknown"),
    }
    println!("Dimensions:  {}x{}", info.width, info.height);
    println!("Color mode:  {:?}", info.color_mode);

    Ok(())
}

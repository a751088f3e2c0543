use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pixelframe")]
#[command(version)]
#[command(about = "Generate pixel-art border images and launch the game's dev server", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one border image (odd sizes are rounded up, minimum 48x48)
    Generate {
        /// Width in pixels
        width: u32,

        /// Height in pixels
        height: u32,

        /// Output file name (default: border_<width>x<height>.png)
        output: Option<String>,

        /// Style name or path to a style YAML file
        #[arg(short, long, default_value = "orange")]
        style: String,

        /// Directory to write into (default: current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Print the derived layout and transparent interior
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate every border listed in a YAML manifest
    Batch {
        /// Manifest file
        manifest: PathBuf,

        /// Override the manifest's style
        #[arg(short, long)]
        style: Option<String>,

        /// Override the manifest's output directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Render a swatch card of a style's palette with a border preview
    PaletteCard {
        /// Style name or path to a style YAML file
        #[arg(short, long, default_value = "orange")]
        style: String,

        /// Output PNG file
        #[arg(short, long, default_value = "palette_card.png")]
        output: PathBuf,
    },

    /// Start the dev server and open it in the browser
    Dev {
        /// Do not open a browser tab
        #[arg(long)]
        no_open: bool,

        /// URL to open if the server does not print a Local: line
        #[arg(long, default_value = "http://localhost:5173")]
        url: String,

        /// Directory to start the server in
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Command to run instead of `npm run dev`
        #[arg(last = true)]
        command: Vec<String>,
    },
}

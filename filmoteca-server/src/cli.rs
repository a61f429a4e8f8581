use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "filmoteca",
    about = "Filmoteca Server - Movie catalog HTTP API",
    version = env!("CARGO_PKG_VERSION"),
    author
)]
pub struct Cli {
    #[arg(short, long, env = "PORT", default_value = "1234")]
    pub port: u16,

    #[arg(short, long, env = "FILMOTECA_MOVIES", default_value = "data/movies.json")]
    pub movies_file: PathBuf,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

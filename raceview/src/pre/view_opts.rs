use clap::{AppSettings, Clap};
use std::path::PathBuf;

#[derive(Debug, Clap, Clone)]
#[clap(
    version = "0.1.0",
    author = "Adam Talsma <adam@talsma.ca>",
    name = "raceview",
    about = "A racing league statistics viewer written in Rust"
)]
#[clap(setting = AppSettings::ColoredHelp)]
pub struct ViewOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Print the lap chart datasets of a race view as JSON instead of the result table
    #[clap(short, long)]
    pub chart: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set the page background color used to pick contrasting chart line colors
    #[clap(short, long, default_value = "rgb(24, 26, 27)")]
    pub background: String,

    /// Set path to the directory containing the generated league data
    #[clap(parse(from_os_str), short, long)]
    pub data_path: PathBuf,

    /// Set the query string of the view to display, e.g. "?l=4&s=11&r=802"
    #[clap(short, long, default_value = "?")]
    pub query: String,
}

use clap::Clap;
use raceview::core::color::parse_css_color;
use raceview::core::nav::decode_state;
use raceview::interfaces::chart_interface::make_laps_chart;
use raceview::post::view_report;
use raceview::pre::read_view_data::{read_view_data, ViewData};
use raceview::pre::view_opts::ViewOpts;

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get view options from the command line arguments and resolve the requested view state
    let view_opts: ViewOpts = ViewOpts::parse();
    let state = decode_state(&view_opts.query);

    println!("INFO: Displaying view {:?}", state);

    // read the data file backing the requested view
    let view_data = read_view_data(view_opts.data_path.as_path(), &state)?;

    // EXECUTION -----------------------------------------------------------------------------------
    if view_opts.chart && !matches!(view_data, ViewData::Race(_)) {
        println!("WARNING: Only race views have a lap chart!");
    }

    match &view_data {
        ViewData::Leagues(leagues) => view_report::print_leagues(leagues),
        ViewData::Seasons(data) => view_report::print_seasons(data),
        ViewData::Season(data) => view_report::print_season(data),
        ViewData::Race(data) => {
            if view_opts.chart {
                // assign a contrasting line color per driver and emit the chart datasets
                let background = parse_css_color(&view_opts.background)?;
                let datasets = make_laps_chart(&data.results, &background);
                println!("{}", serde_json::to_string_pretty(&datasets)?);
            } else {
                view_report::print_race(data);
            }
        }
        ViewData::Driver(data) => view_report::print_driver(data),
    }

    Ok(())
}

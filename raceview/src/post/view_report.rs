use crate::core::laptime::position_suffix;
use crate::pre::read_view_data::{DriverData, League, RaceData, SeasonData, SeasonsData};
use std::fmt::Write;

/// track_label returns the track name, extended by the configuration if the track has
/// more than one.
fn track_label(track: &str, config: &str) -> String {
    let mut label = track.to_owned();

    if config != "N/A" {
        write!(&mut label, " ({})", config).unwrap();
    }

    label
}

/// print_leagues prints the tracked leagues to the console output.
pub fn print_leagues(leagues: &[League]) {
    println!("RESULT: Tracked leagues");

    for league in leagues.iter() {
        println!("{:6} {}", league.id, league.name);
    }
}

/// print_seasons prints the seasons of a league to the console output.
pub fn print_seasons(data: &SeasonsData) {
    println!("RESULT: Seasons of {}", data.league.name);

    for season in data.seasons.iter() {
        println!("{:6} {}", season.id, season.name);
    }
}

/// print_season prints the race list and the standings of a season, ordered by
/// championship points, to the console output.
pub fn print_season(data: &SeasonData) {
    println!("RESULT: Races of {} {}", data.league.name, data.season.name);

    for race in data.races.iter() {
        println!(
            "{:6} {:10} {:35} won by {} ({} drivers)",
            race.id,
            race.date,
            track_label(&race.track, &race.config),
            race.winner.name,
            race.drivers
        );
    }

    // sort standings by championship points, best first
    let mut standings = data.standings.to_owned();
    standings.sort_unstable_by(|a, b| b.points.partial_cmp(&a.points).unwrap());

    println!(
        "RESULT: Standings of {} {}",
        data.league.name, data.season.name
    );
    println!("pos, driver, points, raced, wins, podiums, top5, top10, avg start, avg finish, laps, inc, cpi");

    for row in standings.iter() {
        println!(
            "{:3}, {:24}, {:6}, {:5}, {:4}, {:7}, {:4}, {:5}, {:9.1}, {:10.1}, {:4}, {:3}, {:5.2}",
            row.position,
            row.driver,
            row.points,
            row.raced,
            row.wins,
            row.podiums,
            row.top5,
            row.top10,
            row.avg_start,
            row.avg_finish,
            row.laps,
            row.incidents,
            row.cpi
        );
    }
}

/// print_race prints the race details and the result table to the console output.
pub fn print_race(data: &RaceData) {
    println!(
        "RESULT: {} {} at {} on {} ({} laps)",
        data.league.name,
        data.season.name,
        track_label(&data.race.track, &data.race.config),
        data.race.date,
        data.race.laps
    );
    println!("fin, start, driver, interval, laps, fastest lap, average lap, inc, points, result");

    for row in data.results.iter() {
        println!(
            "{:3}, {:5}, {:24}, {:>9}, {:4}, {:>11}, {:>11}, {:3}, {:6}, {}",
            row.finish,
            row.start,
            row.driver.name,
            row.interval,
            row.num_laps,
            row.fastest_lap,
            row.average_lap,
            row.incidents,
            row.points,
            row.out
        );
    }
}

/// print_driver prints the career overview of a driver to the console output.
pub fn print_driver(data: &DriverData) {
    println!("RESULT: Seasons of {}", data.driver.name);

    for row in data.seasons.iter() {
        println!(
            "{} {}: finished {}{} with {} points ({} raced, {} wins, {} inc)",
            row.league.name,
            row.season.name,
            row.position,
            position_suffix(row.position),
            row.points,
            row.raced,
            row.wins,
            row.incidents
        );
    }

    println!("RESULT: Races of {}", data.driver.name);

    for row in data.races.iter() {
        println!(
            "{:10} {:35} started {:2}{}, finished {:2}{} ({} points, {} inc)",
            row.date,
            row.track,
            row.start,
            position_suffix(row.start),
            row.finish,
            position_suffix(row.finish),
            row.points,
            row.incidents
        );
    }
}

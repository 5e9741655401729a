use crate::core::nav::NavState;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct League {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Season {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Driver {
    pub id: u32,
    pub name: String,
}

/// SeasonsData is the content of a league view: the league itself and its seasons.
#[derive(Debug, Deserialize, Clone)]
pub struct SeasonsData {
    pub league: League,
    pub seasons: Vec<Season>,
}

/// * `driver` - Display name of the driver
/// * `driver_id` - Driver id, links into the driver view
/// * `position` - Position in the season standings
/// * `points` - Championship points
/// * `raced` - Number of races the driver took part in
/// * `avg_start` / `avg_finish` - Average grid and finish positions
/// * `incidents` - Total incident count over the season
/// * `cpi` - Corners per incident
#[derive(Debug, Deserialize, Clone)]
pub struct StandingRow {
    pub driver: String,
    pub driver_id: u32,
    pub position: u32,
    pub points: i64,
    pub raced: u32,
    pub wins: u32,
    pub podiums: u32,
    pub top5: u32,
    pub top10: u32,
    pub avg_start: f64,
    pub avg_finish: f64,
    pub laps: u32,
    pub incidents: u32,
    pub cpi: f64,
}

/// * `config` - Track configuration, "N/A" if the track has only one
#[derive(Debug, Deserialize, Clone)]
pub struct RaceSummary {
    pub id: u32,
    pub track: String,
    pub config: String,
    pub winner: Driver,
    pub drivers: u32,
    pub date: String,
}

/// SeasonData is the content of a season view: its races and the standings.
#[derive(Debug, Deserialize, Clone)]
pub struct SeasonData {
    pub league: League,
    pub season: Season,
    pub races: Vec<RaceSummary>,
    pub standings: Vec<StandingRow>,
}

/// * `config` - Track configuration, "N/A" if the track has only one
/// * `laps` - Scheduled number of laps
#[derive(Debug, Deserialize, Clone)]
pub struct RaceInfo {
    pub track: String,
    pub config: String,
    pub date: String,
    pub laps: u32,
}

/// * `lap` - Lap number, 0 for the grid lap
/// * `time` - Formatted lap time
/// * `time_int` - Raw lap time in 1/10000 s
/// * `flags` - Names of the incident flags raised during the lap, if any
#[derive(Debug, Deserialize, Clone)]
pub struct LapRow {
    pub lap: u32,
    pub time: String,
    pub time_int: i64,
    #[serde(default)]
    pub flags: Option<Vec<String>>,
}

/// * `interval` - Gap to the winner at the finish
/// * `out` - How the driver left the race, e.g. "Running" or "Disconnected"
/// * `fast_lap` - Lap number of the fastest lap, negative if there is none
#[derive(Debug, Deserialize, Clone)]
pub struct ResultRow {
    pub driver: Driver,
    pub interval: String,
    pub start: u32,
    pub finish: u32,
    pub out: String,
    pub num_laps: u32,
    pub fastest_lap: String,
    pub fast_lap: i32,
    pub average_lap: String,
    pub incidents: u32,
    pub points: i64,
    #[serde(default)]
    pub laps: Vec<LapRow>,
}

/// RaceData is the content of a race view: the race details and all results with
/// their laps.
#[derive(Debug, Deserialize, Clone)]
pub struct RaceData {
    pub league: League,
    pub season: Season,
    pub race: RaceInfo,
    pub results: Vec<ResultRow>,
}

/// DriverSeasonRow summarizes the standing of a driver in one season.
#[derive(Debug, Deserialize, Clone)]
pub struct DriverSeasonRow {
    pub league: League,
    pub season: Season,
    pub position: u32,
    pub points: i64,
    pub raced: u32,
    pub wins: u32,
    pub top5: u32,
    pub top10: u32,
    pub laps: u32,
    pub incidents: u32,
    pub cpi: f64,
}

/// DriverRaceRow summarizes the part of a driver in one race.
#[derive(Debug, Deserialize, Clone)]
pub struct DriverRaceRow {
    pub league: League,
    pub season: Season,
    pub race: u32,
    pub date: String,
    pub track: String,
    pub car: String,
    pub start: u32,
    pub finish: u32,
    pub incidents: u32,
    pub points: i64,
}

/// DriverData is the content of a driver view: the career overview over all tracked
/// leagues.
#[derive(Debug, Deserialize, Clone)]
pub struct DriverData {
    pub driver: Driver,
    pub seasons: Vec<DriverSeasonRow>,
    pub races: Vec<DriverRaceRow>,
}

/// ViewData holds the loaded content of one view.
#[derive(Debug, Clone)]
pub enum ViewData {
    Leagues(Vec<League>),
    Seasons(SeasonsData),
    Season(SeasonData),
    Race(RaceData),
    Driver(DriverData),
}

/// view_data_path returns the data file backing the inserted view state, relative to
/// the data directory.
pub fn view_data_path(data_path: &Path, state: &NavState) -> PathBuf {
    let mut path = data_path.to_path_buf();

    match state {
        NavState::Index => path.push("leagues"),
        NavState::League { league } => path.push(league.to_string()),
        NavState::Season { league, season } => {
            path.push(league.to_string());
            path.push(season.to_string());
        }
        NavState::Race {
            league,
            season,
            race,
        } => {
            path.push(league.to_string());
            path.push(season.to_string());
            path.push(race.to_string());
        }
        NavState::Driver { driver } => {
            path.push("drivers");
            path.push(driver.to_string());
        }
    }

    path.set_extension("json");
    path
}

/// parse_view_file reads and decodes a single JSON view data file.
fn parse_view_file<T: DeserializeOwned>(fh: &File, filepath: &Path) -> anyhow::Result<T> {
    serde_json::from_reader(fh).context(format!(
        "Failed to parse view data file {}!",
        filepath.to_str().unwrap()
    ))
}

/// read_view_data reads the JSON file backing the inserted view state and decodes it
/// into the matching view content.
pub fn read_view_data(data_path: &Path, state: &NavState) -> anyhow::Result<ViewData> {
    let filepath = view_data_path(data_path, state);

    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(&filepath)
        .context(format!(
            "Failed to open view data file {}!",
            filepath.to_str().unwrap()
        ))?;

    // read and parse the file content into the shape of the requested view
    let view_data = match state {
        NavState::Index => ViewData::Leagues(parse_view_file(&fh, &filepath)?),
        NavState::League { .. } => ViewData::Seasons(parse_view_file(&fh, &filepath)?),
        NavState::Season { .. } => ViewData::Season(parse_view_file(&fh, &filepath)?),
        NavState::Race { .. } => ViewData::Race(parse_view_file(&fh, &filepath)?),
        NavState::Driver { .. } => ViewData::Driver(parse_view_file(&fh, &filepath)?),
    };
    Ok(view_data)
}

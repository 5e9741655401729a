use crate::core::color::{contrasting_color, RgbColor};
use crate::core::laptime::as_seconds;
use crate::pre::read_view_data::ResultRow;
use serde::Serialize;

/// * `x` - Lap number
/// * `y` - Lap time in seconds
#[derive(Debug, Clone, Serialize)]
pub struct LapPoint {
    pub x: u32,
    pub y: f64,
}

/// LapChartDataset is one line of the lap times chart, serialized with the field names
/// the charting collaborator expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LapChartDataset {
    pub label: String,
    pub order: u32,
    pub hidden: bool,
    pub fill: bool,
    pub line_tension: f64,
    pub border_color: String,
    pub data: Vec<LapPoint>,
}

/// make_laps_chart builds one chart dataset per race result with at least one full
/// lap. The grid lap (lap 0) carries no lap time and is skipped. Every line gets a
/// random color that contrasts with the inserted page background such that
/// overlapping lines stay distinguishable.
pub fn make_laps_chart(results: &[ResultRow], background: &RgbColor) -> Vec<LapChartDataset> {
    let mut datasets = Vec::with_capacity(results.len());

    for result in results.iter() {
        if result.laps.len() <= 1 {
            continue;
        }

        let mut data = Vec::with_capacity(result.laps.len() - 1);

        for lap in result.laps.iter().skip(1) {
            data.push(LapPoint {
                x: lap.lap,
                y: as_seconds(lap.time_int),
            });
        }

        datasets.push(LapChartDataset {
            label: result.driver.name.to_owned(),
            order: result.finish,
            hidden: true,
            fill: false,
            line_tension: 0.1,
            border_color: contrasting_color(background).as_color_code(),
            data,
        });
    }

    datasets
}

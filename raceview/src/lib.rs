pub mod core;
pub mod interfaces;
pub mod post;
pub mod pre;

#[cfg(test)]
mod color_tests {
    use crate::core::color::{
        color_delta, contrasting_color, parse_css_color, random_color, RgbColor, MIN_COLOR_DELTA,
    };

    #[test]
    fn test_color_delta_1() {
        let c = RgbColor {
            r: 12,
            g: 200,
            b: 99,
        };
        assert_eq!(color_delta(&c, &c), 0);
    }
    #[test]
    fn test_color_delta_2() {
        let c1 = RgbColor {
            r: 0,
            g: 100,
            b: 255,
        };
        let c2 = RgbColor {
            r: 255,
            g: 90,
            b: 0,
        };
        assert_eq!(color_delta(&c1, &c2), 520);
        assert_eq!(color_delta(&c1, &c2), color_delta(&c2, &c1));
    }

    #[test]
    fn test_as_color_code_1() {
        let c = RgbColor {
            r: 10,
            g: 255,
            b: 115,
        };
        assert_eq!(c.as_color_code(), "#0AFF73");
    }
    #[test]
    fn test_as_color_code_2() {
        let c = RgbColor { r: 0, g: 0, b: 0 };
        assert_eq!(c.as_color_code(), "#000000");
    }

    #[test]
    fn test_random_color_1() {
        // smoke test, the hex code must always have the full seven characters
        for _ in 0..100 {
            let code = random_color().as_color_code();
            assert_eq!(code.len(), 7);
            assert!(code.starts_with('#'));
        }
    }

    #[test]
    fn test_contrasting_color_1() {
        let reference = RgbColor {
            r: 24,
            g: 26,
            b: 27,
        };

        for _ in 0..100 {
            let c = contrasting_color(&reference);
            assert!(color_delta(&reference, &c) > MIN_COLOR_DELTA);
        }
    }
    #[test]
    fn test_contrasting_color_2() {
        // extreme references must not deadlock the search
        let references = [
            RgbColor { r: 0, g: 0, b: 0 },
            RgbColor {
                r: 255,
                g: 255,
                b: 255,
            },
            RgbColor {
                r: 128,
                g: 128,
                b: 128,
            },
        ];

        for reference in references.iter() {
            let c = contrasting_color(reference);
            assert!(color_delta(reference, &c) > MIN_COLOR_DELTA);
        }
    }

    #[test]
    fn test_parse_css_color_1() {
        assert_eq!(
            parse_css_color("rgb(24, 26, 27)").unwrap(),
            RgbColor {
                r: 24,
                g: 26,
                b: 27,
            }
        );
    }
    #[test]
    fn test_parse_css_color_2() {
        assert_eq!(
            parse_css_color("#0AFF73").unwrap(),
            RgbColor {
                r: 10,
                g: 255,
                b: 115,
            }
        );
    }
    #[test]
    fn test_parse_css_color_3() {
        assert!(parse_css_color("not a color").is_err());
    }
}



#[cfg(test)]
mod chart_tests {
    use crate::core::color::{color_delta, parse_css_color, RgbColor, MIN_COLOR_DELTA};
    use crate::interfaces::chart_interface::make_laps_chart;
    use crate::pre::read_view_data::{Driver, LapRow, ResultRow};
    use approx::assert_ulps_eq;

    fn result_row(name: &str, finish: u32, no_laps: u32) -> ResultRow {
        let mut laps = Vec::with_capacity(no_laps as usize);

        for lap in 0..no_laps {
            laps.push(LapRow {
                lap,
                time: String::from("01:30.0000"),
                time_int: 900000 + lap as i64 * 10000,
                flags: None,
            });
        }

        ResultRow {
            driver: Driver {
                id: finish,
                name: String::from(name),
            },
            interval: String::from("--:--"),
            start: finish,
            finish,
            out: String::from("Running"),
            num_laps: no_laps.saturating_sub(1),
            fastest_lap: String::from("01:30.0000"),
            fast_lap: 1,
            average_lap: String::from("01:30.0000"),
            incidents: 0,
            points: 0,
            laps,
        }
    }

    #[test]
    fn test_make_laps_chart_1() {
        let background = RgbColor {
            r: 24,
            g: 26,
            b: 27,
        };
        let results = vec![result_row("A", 1, 4), result_row("B", 2, 4)];
        let datasets = make_laps_chart(&results, &background);

        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].label, "A");
        assert_eq!(datasets[0].order, 1);
        assert!(datasets[0].hidden);
        // the grid lap is skipped
        assert_eq!(datasets[0].data.len(), 3);
        assert_eq!(datasets[0].data[0].x, 1);
        assert_ulps_eq!(datasets[0].data[0].y, 91.0);
    }
    #[test]
    fn test_make_laps_chart_2() {
        // results without a full lap get no line
        let background = RgbColor {
            r: 24,
            g: 26,
            b: 27,
        };
        let results = vec![result_row("A", 1, 1), result_row("B", 2, 0)];
        assert!(make_laps_chart(&results, &background).is_empty());
    }
    #[test]
    fn test_make_laps_chart_3() {
        let background = RgbColor {
            r: 24,
            g: 26,
            b: 27,
        };
        let results = vec![result_row("A", 1, 3)];
        let datasets = make_laps_chart(&results, &background);

        let line_color = parse_css_color(&datasets[0].border_color).unwrap();
        assert!(color_delta(&background, &line_color) > MIN_COLOR_DELTA);
    }
}

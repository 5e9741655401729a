use anyhow::Context;
use css_color_parser;
use rand::Rng;

// minimum Manhattan distance between two colors to count as visually distinguishable
pub const MIN_COLOR_DELTA: u32 = 350;

/// * `r` - Red channel
/// * `g` - Green channel
/// * `b` - Blue channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// as_color_code returns the color as an uppercase hex color code, e.g. "#0AFF73".
    pub fn as_color_code(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// color_delta returns the Manhattan distance between the two inserted colors, i.e. the
/// sum of the absolute per-channel differences.
pub fn color_delta(color1: &RgbColor, color2: &RgbColor) -> u32 {
    ((color1.r as i32 - color2.r as i32).abs()
        + (color1.g as i32 - color2.g as i32).abs()
        + (color1.b as i32 - color2.b as i32).abs()) as u32
}

/// random_color returns a color with all three channels sampled uniformly and
/// independently from [0, 255].
pub fn random_color() -> RgbColor {
    let mut rng = rand::thread_rng();

    RgbColor {
        r: rng.gen(),
        g: rng.gen(),
        b: rng.gen(),
    }
}

/// contrasting_color returns a random color that is visually distinguishable from the
/// inserted reference color, e.g. to keep overlapping chart lines apart from the page
/// background. Candidates are drawn until one exceeds the required distance (a few
/// iterations on average, the loop terminates with probability 1 for every reference).
pub fn contrasting_color(reference: &RgbColor) -> RgbColor {
    loop {
        let candidate = random_color();

        if color_delta(reference, &candidate) > MIN_COLOR_DELTA {
            return candidate;
        }
    }
}

/// parse_css_color decodes a CSS color string, e.g. "rgb(24, 26, 27)" or "#181A1B",
/// into its channels.
pub fn parse_css_color(color: &str) -> anyhow::Result<RgbColor> {
    let parsed = color
        .parse::<css_color_parser::Color>()
        .context(format!("Could not parse color {}!", color))?;

    Ok(RgbColor {
        r: parsed.r,
        g: parsed.g,
        b: parsed.b,
    })
}

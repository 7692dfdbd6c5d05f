//! Point collection filters.
//!
//! Filters rewrite a collection's point sequence in place. None of them
//! recompute the bounding rectangle.
//!
//! - `by_color` - keep points whose RGB lies in a `ColorBounds` range
//! - `by_random` - drop a uniformly random share of the points
//!
//! `FilterStep` is the user-facing description of one filter, parsed from
//! the command line or a pipeline file.

mod color;
mod random;

use std::fmt;
use std::str::FromStr;

use nanorand::WyRand;

pub use color::by_color;
pub use random::by_random;

use random::by_random_count;

use crate::error::{Img2JsonError, Result};
use crate::points::PointCollection;
use crate::types::ColorBounds;

/// One filter in a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStep {
    /// Keep points inside the colour range.
    Color(ColorBounds),
    /// Remove this percentage (0..=100) of the points at random.
    Random { percent: u8 },
}

impl FilterStep {
    /// Run this filter against a collection.
    pub fn apply(&self, collection: &mut PointCollection, rng: &mut WyRand) -> Result<()> {
        match *self {
            FilterStep::Color(bounds) => {
                by_color(collection, bounds);
                Ok(())
            }
            FilterStep::Random { percent } => {
                // floor(len * percent / 100), kept in integers
                let removed = collection.len() * usize::from(percent) / 100;
                by_random_count(collection, removed, rng);
                Ok(())
            }
        }
    }
}

impl FromStr for FilterStep {
    type Err = Img2JsonError;

    /// Parse `color:R,G,B,R,G,B` or `rand:P`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (kind, args) = s.split_once(':').ok_or_else(|| Img2JsonError::Parse {
            message: format!("Invalid filter '{}': expected KIND:ARGS", s),
            help: Some(FILTER_HELP.to_string()),
        })?;

        match kind.trim().to_ascii_lowercase().as_str() {
            "color" | "colour" => parse_color(args).map(FilterStep::Color),
            "rand" | "random" => parse_percent(args).map(|percent| FilterStep::Random { percent }),
            other => Err(Img2JsonError::Parse {
                message: format!("Unknown filter '{}'", other),
                help: Some(FILTER_HELP.to_string()),
            }),
        }
    }
}

impl fmt::Display for FilterStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterStep::Color(b) => write!(
                f,
                "color:{},{},{},{},{},{}",
                b.r_min, b.g_min, b.b_min, b.r_max, b.g_max, b.b_max
            ),
            FilterStep::Random { percent } => write!(f, "rand:{}", percent),
        }
    }
}

const FILTER_HELP: &str =
    "Use color:RMIN,GMIN,BMIN,RMAX,GMAX,BMAX (each 0-255) or rand:PERCENT (0-100)";

/// Parse six comma-separated channel values: min RGB then max RGB.
fn parse_color(args: &str) -> Result<ColorBounds> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 6 {
        return Err(Img2JsonError::Parse {
            message: format!("Expected 6 colour values, got {}", parts.len()),
            help: Some(FILTER_HELP.to_string()),
        });
    }

    let mut values = [0u8; 6];
    for (i, part) in parts.iter().enumerate() {
        let n: i64 = part.parse().map_err(|_| Img2JsonError::Parse {
            message: format!("Colour value no. {} ('{}') is not an integer", i, part),
            help: Some(FILTER_HELP.to_string()),
        })?;
        values[i] = u8::try_from(n).map_err(|_| Img2JsonError::Parse {
            message: format!("Colour value no. {} ({}) is not in range 0..255", i, n),
            help: Some(FILTER_HELP.to_string()),
        })?;
    }

    Ok(ColorBounds::from(values))
}

fn parse_percent(args: &str) -> Result<u8> {
    let args = args.trim();
    let n: i64 = args.parse().map_err(|_| Img2JsonError::Parse {
        message: format!("Percentage '{}' is not an integer", args),
        help: Some(FILTER_HELP.to_string()),
    })?;

    if !(0..=100).contains(&n) {
        return Err(Img2JsonError::Parse {
            message: format!("Percentage {} is not in range 0..100", n),
            help: Some(FILTER_HELP.to_string()),
        });
    }

    Ok(n as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        let step: FilterStep = "color:0,0,0,10,20,30".parse().unwrap();
        assert_eq!(step, FilterStep::Color(ColorBounds::new([0, 0, 0], [10, 20, 30])));
    }

    #[test]
    fn test_parse_color_spaces_and_alias() {
        let step: FilterStep = "colour: 1, 2, 3, 4, 5, 6".parse().unwrap();
        assert_eq!(step, FilterStep::Color(ColorBounds::new([1, 2, 3], [4, 5, 6])));
    }

    #[test]
    fn test_parse_color_inverted_accepted() {
        let step: FilterStep = "color:255,255,255,0,0,0".parse().unwrap();
        assert_eq!(step, FilterStep::Color(ColorBounds::new([255, 255, 255], [0, 0, 0])));
    }

    #[test]
    fn test_parse_color_wrong_arity() {
        assert!("color:1,2,3".parse::<FilterStep>().is_err());
        assert!("color:1,2,3,4,5,6,7".parse::<FilterStep>().is_err());
    }

    #[test]
    fn test_parse_color_out_of_range() {
        assert!("color:0,0,0,256,0,0".parse::<FilterStep>().is_err());
        assert!("color:-1,0,0,0,0,0".parse::<FilterStep>().is_err());
    }

    #[test]
    fn test_parse_color_non_numeric() {
        assert!("color:a,0,0,0,0,0".parse::<FilterStep>().is_err());
    }

    #[test]
    fn test_parse_random() {
        assert_eq!("rand:50".parse::<FilterStep>().unwrap(), FilterStep::Random { percent: 50 });
        assert_eq!("random:0".parse::<FilterStep>().unwrap(), FilterStep::Random { percent: 0 });
        assert_eq!("RAND:100".parse::<FilterStep>().unwrap(), FilterStep::Random { percent: 100 });
    }

    #[test]
    fn test_parse_random_out_of_range() {
        assert!("rand:101".parse::<FilterStep>().is_err());
        assert!("rand:-5".parse::<FilterStep>().is_err());
        assert!("rand:12.5".parse::<FilterStep>().is_err());
    }

    #[test]
    fn test_parse_unknown() {
        assert!("blur:3".parse::<FilterStep>().is_err());
        assert!("rand".parse::<FilterStep>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for s in ["color:1,2,3,4,5,6", "rand:25"] {
            let step: FilterStep = s.parse().unwrap();
            assert_eq!(step.to_string(), s);
        }
    }

    #[test]
    fn test_apply_random_percent() {
        let mut collection = PointCollection::from_json_str(
            r#"[{"x":0,"y":0,"r":0,"g":0,"b":0,"a":0},
                {"x":1,"y":0,"r":0,"g":0,"b":0,"a":0},
                {"x":2,"y":0,"r":0,"g":0,"b":0,"a":0},
                {"x":3,"y":0,"r":0,"g":0,"b":0,"a":0}]"#,
        )
        .unwrap();

        FilterStep::Random { percent: 75 }
            .apply(&mut collection, &mut WyRand::new_seed(3))
            .unwrap();
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_apply_random_every_percent() {
        let records: Vec<String> = (0..100)
            .map(|i| format!(r#"{{"x":{},"y":0,"r":0,"g":0,"b":0,"a":0}}"#, i))
            .collect();
        let source = PointCollection::from_json_str(&format!("[{}]", records.join(","))).unwrap();
        let mut rng = WyRand::new_seed(17);

        for percent in 0..=100u8 {
            let mut collection = source.clone();
            FilterStep::Random { percent }
                .apply(&mut collection, &mut rng)
                .unwrap();
            assert_eq!(collection.len(), 100 - percent as usize, "rand:{}", percent);
        }
    }

    #[test]
    fn test_apply_color() {
        let mut collection = PointCollection::from_json_str(
            r#"[{"x":0,"y":0,"r":9,"g":0,"b":0,"a":0},
                {"x":1,"y":0,"r":0,"g":0,"b":0,"a":0}]"#,
        )
        .unwrap();

        FilterStep::Color(ColorBounds::new([0, 0, 0], [0, 0, 0]))
            .apply(&mut collection, &mut WyRand::new_seed(3))
            .unwrap();
        assert_eq!(collection.points()[0].x, 1);
        assert_eq!(collection.len(), 1);
    }
}

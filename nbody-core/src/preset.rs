//! Named starting configurations.

use crate::body::{Body, Color};
use crate::error::SimError;
use crate::vector::vec2;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// No bodies
    Empty,
    /// A unit-mass star with four massless planets
    SolarSystem,
    /// Two unit masses orbiting their common centre
    BinaryStars,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Empty, Preset::SolarSystem, Preset::BinaryStars];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Empty => "empty",
            Preset::SolarSystem => "solar-system",
            Preset::BinaryStars => "binary-stars",
        }
    }

    /// Label for buttons and listings
    pub fn title(self) -> &'static str {
        match self {
            Preset::Empty => "Empty Universe",
            Preset::SolarSystem => "Solar System",
            Preset::BinaryStars => "Binary Stars",
        }
    }

    /// Template bodies (no ids, empty trails)
    pub fn bodies(self) -> Vec<Body> {
        match self {
            Preset::Empty => Vec::new(),
            Preset::SolarSystem => {
                let planet = |y: f64, vx: f64, color: u32| {
                    Body::new(0.0, vec2(0.0, y), vec2(vx, 0.0), 0.02, Color(color))
                };
                vec![
                    Body::new(1.0, vec2(0.0, 0.0), vec2(0.0, 0.0), 0.05, Color(0xF0C400)),
                    planet(0.30, 0.35, 0x1D5CFE),
                    planet(0.50, 0.28, 0x479D2D),
                    planet(0.65, 0.25, 0xC32121),
                    planet(0.80, 0.25, 0x188A79),
                ]
            }
            Preset::BinaryStars => vec![
                Body::new(1.0, vec2(0.0, 0.3), vec2(0.20, 0.0), 0.05, Color(0xC32121)),
                Body::new(1.0, vec2(0.0, -0.3), vec2(-0.20, 0.0), 0.05, Color(0xF0C400)),
            ],
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        Preset::ALL
            .into_iter()
            .find(|p| p.name() == normalized)
            .ok_or_else(|| SimError::UnknownPreset(s.to_string()))
    }
}

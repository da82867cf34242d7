//! Shared types used across colorcloud.
//! Includes the `PlotKind` selector and the `Coords` crop center.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PlotKind {
    /// Lab point cloud with shadow projections
    #[default]
    Hist,
    /// Per-channel intensity surfaces
    Surface,
    /// Per-channel surfaces with flattened contour projections
    Contour,
}

impl PlotKind {
    /// Longer-side target used when `--maxsize` is not given.
    pub fn default_maxsize(self) -> u32 {
        match self {
            PlotKind::Hist => 50,
            PlotKind::Surface | PlotKind::Contour => 600,
        }
    }
}

impl std::fmt::Display for PlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotKind::Hist => write!(f, "Hist"),
            PlotKind::Surface => write!(f, "Surface"),
            PlotKind::Contour => write!(f, "Contour"),
        }
    }
}

/// Pixel coordinate given as `x,y` (column, row). May lie outside the image.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Coords {
    pub x: i64,
    pub y: i64,
}

impl Coords {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl std::str::FromStr for Coords {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidCoords(s.to_string()))?;

        match values.as_slice() {
            [x, y] => Ok(Coords::new(*x, *y)),
            _ => Err(Error::InvalidCoords(s.to_string())),
        }
    }
}

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Coords, PlotKind};

pub const DEFAULT_WINDOW_SIZE: u32 = 32;

/// Plot parameters suitable for JSON presets and the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotParams {
    pub plot: PlotKind,
    /// Target long side in pixels; None means the plot kind's default
    pub maxsize: Option<u32>,
    /// Side length of the window cropped around `at`
    pub wsize: u32,
    /// Crop center; when set the image is cropped instead of resized
    pub at: Option<Coords>,
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            plot: PlotKind::default(),
            maxsize: None,
            wsize: DEFAULT_WINDOW_SIZE,
            at: None,
        }
    }
}

impl PlotParams {
    /// Read a preset; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn effective_maxsize(&self) -> u32 {
        self.maxsize.unwrap_or_else(|| self.plot.default_maxsize())
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(0) = self.maxsize {
            return Err(Error::ZeroSize { size: 0 });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maxsize_falls_back_to_plot_default() {
        let mut params = PlotParams::default();
        assert_eq!(params.effective_maxsize(), 50);
        params.plot = PlotKind::Contour;
        assert_eq!(params.effective_maxsize(), 600);
        params.maxsize = Some(128);
        assert_eq!(params.effective_maxsize(), 128);
    }

    #[test]
    fn partial_json_preset_uses_defaults() {
        let params: PlotParams =
            serde_json::from_str(r#"{"plot":"surface","at":{"x":4,"y":9}}"#).unwrap();
        assert_eq!(params.plot, PlotKind::Surface);
        assert_eq!(params.at, Some(Coords::new(4, 9)));
        assert_eq!(params.wsize, DEFAULT_WINDOW_SIZE);
        assert_eq!(params.maxsize, None);
    }

    #[test]
    fn zero_maxsize_is_rejected() {
        let params = PlotParams {
            maxsize: Some(0),
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(Error::ZeroSize { size: 0 })));
        assert!(PlotParams::default().validate().is_ok());
    }
}

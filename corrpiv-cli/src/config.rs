//! JSON run configuration.
//!
//! Every section field is optional at the parsing layer so that all missing
//! required keys can be reported together before any frame is read.

use corrpiv::sequence::DEFAULT_EXTENSION;
use corrpiv::{FrameSequence, GridResolution, PivParams};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PathsSection {
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FramesSection {
    start: Option<u64>,
    end: Option<u64>,
    step: Option<u64>,
    extension: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GridSection {
    x: Option<usize>,
    y: Option<usize>,
    step_x: Option<usize>,
    step_y: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct WindowSection {
    t: Option<usize>,
    s: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ParamsSection {
    threshold: Option<i32>,
}

/// Raw configuration file contents.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    paths: PathsSection,
    frames: FramesSection,
    grid: GridSection,
    window: WindowSection,
    params: ParamsSection,
}

/// Required keys absent from the configuration file.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("missing required config keys: {}", .0.join(", "))]
pub struct MissingKeys(pub Vec<&'static str>);

/// Fully specified run.
#[derive(Debug)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub extension: String,
    pub sequence: FrameSequence,
    pub params: PivParams,
}

impl ConfigFile {
    /// Parses a JSON document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Checks required keys and builds the run description.
    pub fn resolve(self) -> Result<RunConfig, Box<dyn std::error::Error>> {
        let missing: Vec<&'static str> = [
            ("paths.input_dir", self.paths.input_dir.is_none()),
            ("paths.output_dir", self.paths.output_dir.is_none()),
            ("frames.start", self.frames.start.is_none()),
            ("frames.end", self.frames.end.is_none()),
            ("frames.step", self.frames.step.is_none()),
            ("grid.x", self.grid.x.is_none()),
            ("grid.y", self.grid.y.is_none()),
            ("window.t", self.window.t.is_none()),
            ("window.s", self.window.s.is_none()),
            ("params.threshold", self.params.threshold.is_none()),
        ]
        .into_iter()
        .filter_map(|(key, absent)| absent.then_some(key))
        .collect();

        let (
            Some(input_dir),
            Some(output_dir),
            Some(start),
            Some(end),
            Some(step),
            Some(cols),
            Some(rows),
            Some(t),
            Some(s),
            Some(threshold),
        ) = (
            self.paths.input_dir,
            self.paths.output_dir,
            self.frames.start,
            self.frames.end,
            self.frames.step,
            self.grid.x,
            self.grid.y,
            self.window.t,
            self.window.s,
            self.params.threshold,
        )
        else {
            return Err(MissingKeys(missing).into());
        };

        let mut grid = GridResolution::new(cols, rows);
        grid.step_x = self.grid.step_x;
        grid.step_y = self.grid.step_y;
        let params = PivParams::new(t, s, grid, threshold);
        params.validate()?;

        Ok(RunConfig {
            input_dir,
            output_dir,
            extension: self
                .frames
                .extension
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
            sequence: FrameSequence::new(start, end, step)?,
            params,
        })
    }
}

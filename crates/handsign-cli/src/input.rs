//! Landmark frames read from CLI input files

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use handsign_core::LandmarkFrame;
use serde_json::Value;

/// Read one frame, or an array of frames, from a JSON file
pub fn read_frames(path: &Path) -> Result<Vec<LandmarkFrame>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_frames(&contents).with_context(|| format!("parsing {}", path.display()))
}

/// A frame is an array of landmark objects; a batch is an array of frames.
pub fn parse_frames(json: &str) -> Result<Vec<LandmarkFrame>> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        bail!("expected a frame (array of landmarks) or an array of frames");
    };

    if items.iter().all(Value::is_array) && !items.is_empty() {
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                serde_json::from_value(item).with_context(|| format!("frame {i}"))
            })
            .collect()
    } else {
        let frame = serde_json::from_value(Value::Array(items))?;
        Ok(vec![frame])
    }
}

//! Sample store - labelled frames on disk
//!
//! Layout:
//! ```text
//! <data_dir>/
//!   I Love You/
//!     I Love You_2024-01-02T03-04-05.678Z.json
//!   I_I'm/
//!     I_I'm_2024-01-02T03-04-06.001Z.json
//! ```
//! Directory names are gesture names with `/` replaced by `_`. Colons and path
//! separators in the timestamp are replaced by `-` so the file name is portable.

use std::fs;
use std::path::{Path, PathBuf};

use handsign_core::{Gesture, LandmarkFrame};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{Dataset, Sample, SampleError, SampleResult, StoreConfig};

/// Directory name for a gesture's samples
pub fn gesture_dir_name(gesture: Gesture) -> String {
    gesture.name().replace('/', "_")
}

/// Gesture stored under a directory name, if any.
///
/// `None` is never stored, so a `None` directory maps to no gesture.
pub fn gesture_from_dir_name(name: &str) -> Option<Gesture> {
    name.replace('_', "/")
        .parse::<Gesture>()
        .ok()
        .filter(|g| g.is_some())
}

fn file_stem(dir_name: &str, timestamp: &str) -> String {
    let timestamp = timestamp.replace([':', '/', '\\'], "-");
    format!("{dir_name}_{timestamp}")
}

/// Only the frame is read back; the label comes from the directory.
#[derive(Deserialize)]
struct StoredFrame {
    landmarks: LandmarkFrame,
}

/// Labelled samples under one root directory
#[derive(Debug, Clone)]
pub struct SampleStore {
    config: StoreConfig,
}

impl SampleStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Create the root directory if needed
    pub fn open(config: StoreConfig) -> SampleResult<Self> {
        fs::create_dir_all(&config.data_dir)
            .map_err(|e| SampleError::io(&config.data_dir, e))?;
        Ok(Self::new(config))
    }

    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Write one sample, returning the file it was written to
    pub fn save(&self, sample: &Sample) -> SampleResult<PathBuf> {
        if sample.gesture == Gesture::None {
            return Err(SampleError::NotStorable(sample.gesture));
        }

        let dir_name = gesture_dir_name(sample.gesture);
        let dir = self.config.data_dir.join(&dir_name);
        fs::create_dir_all(&dir).map_err(|e| SampleError::io(&dir, e))?;

        let path = unique_path(&dir, &file_stem(&dir_name, &sample.timestamp));

        let json = if self.config.pretty {
            serde_json::to_string_pretty(sample)?
        } else {
            serde_json::to_string(sample)?
        };
        fs::write(&path, json).map_err(|e| SampleError::io(&path, e))?;

        debug!(gesture = %sample.gesture, path = %path.display(), "saved sample");
        Ok(path)
    }

    /// Load every readable sample.
    ///
    /// A missing root directory is an empty dataset. Unknown directories and
    /// unreadable or malformed files are skipped with a warning.
    pub fn load_all(&self) -> SampleResult<Dataset> {
        let mut dataset = Dataset::new();
        let root = &self.config.data_dir;
        if !root.exists() {
            return Ok(dataset);
        }

        for dir in sorted_entries(root)? {
            if !dir.is_dir() {
                continue;
            }
            let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(gesture) = gesture_from_dir_name(name) else {
                warn!(dir = %dir.display(), "skipping directory with unknown gesture");
                continue;
            };

            for frame in load_dir(&dir) {
                dataset.insert(gesture, frame);
            }
        }

        Ok(dataset)
    }

    /// Load the samples recorded for one gesture
    pub fn load_gesture(&self, gesture: Gesture) -> SampleResult<Vec<LandmarkFrame>> {
        let dir = self.config.data_dir.join(gesture_dir_name(gesture));
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        Ok(load_dir(&dir))
    }
}

/// Readable frames in one gesture directory; an unreadable directory is empty
fn load_dir(dir: &Path) -> Vec<LandmarkFrame> {
    let paths = match sorted_entries(dir) {
        Ok(paths) => paths,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "skipping unreadable directory");
            return Vec::new();
        }
    };

    let mut frames = Vec::new();
    for path in paths {
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        match read_frame(&path) {
            Ok(frame) => frames.push(frame),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable sample"),
        }
    }
    frames
}

fn read_frame(path: &Path) -> SampleResult<LandmarkFrame> {
    let contents = fs::read_to_string(path).map_err(|e| SampleError::io(path, e))?;
    let stored: StoredFrame = serde_json::from_str(&contents)?;
    Ok(stored.landmarks)
}

fn sorted_entries(dir: &Path) -> SampleResult<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)
        .map_err(|e| SampleError::io(dir, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect::<Vec<_>>();
    paths.sort();
    Ok(paths)
}

/// `<stem>.json`, or `<stem>-N.json` if that is taken
fn unique_path(dir: &Path, stem: &str) -> PathBuf {
    let path = dir.join(format!("{stem}.json"));
    if !path.exists() {
        return path;
    }
    (1u32..)
        .map(|n| dir.join(format!("{stem}-{n}.json")))
        .find(|p| !p.exists())
        .unwrap_or(path)
}

// ZoomView -- Zoom and layout engine for embeddable image viewports
//
// Copyright (c) 2024-2025 Martin van der Werff <github (at) newinnovations.nl>
//
// This file is part of ZoomView.
//
// ZoomView is free software: you can redistribute it and/or modify it under the terms of
// the GNU Affero General Public License as published by the Free Software Foundation, either
// version 3 of the License, or (at your option) any later version.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR
// IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND
// FITNESS FOR A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
// LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR
// BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
// STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Result, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

/// Lower bound for the computed maximum zoom scale
pub const DEFAULT_MAX_ZOOM_FLOOR: f64 = 4.0;
/// Zoom scale of an image at rest
pub const DEFAULT_MIN_ZOOM_LEVEL: f64 = 1.0;
/// Duration of animated zoom transitions
pub const DEFAULT_ANIMATION_DURATION: f64 = 0.25;

/// Per-viewer configuration.
///
/// The struct is immutable once handed to a controller. The `with_*` methods
/// consume the value and return a modified copy, so a configuration can be
/// built up in a chain without shared mutable state:
///
/// ```
/// use zoomview::ViewerConfig;
///
/// let config = ViewerConfig::default()
///     .with_double_tap_to_zoom(false)
///     .with_max_zoom_floor(6.0);
/// assert!(!config.double_tap_to_zoom_enabled);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    pub double_tap_to_zoom_enabled: bool,
    pub max_zoom_floor: f64,
    pub min_zoom_level: f64,
    pub animation_duration_seconds: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            double_tap_to_zoom_enabled: true,
            max_zoom_floor: DEFAULT_MAX_ZOOM_FLOOR,
            min_zoom_level: DEFAULT_MIN_ZOOM_LEVEL,
            animation_duration_seconds: DEFAULT_ANIMATION_DURATION,
        }
    }
}

impl ViewerConfig {
    pub fn with_double_tap_to_zoom(self, enabled: bool) -> Self {
        Self {
            double_tap_to_zoom_enabled: enabled,
            ..self
        }
    }

    pub fn with_max_zoom_floor(self, floor: f64) -> Self {
        Self {
            max_zoom_floor: floor,
            ..self
        }
    }

    pub fn with_min_zoom_level(self, level: f64) -> Self {
        Self {
            min_zoom_level: level,
            ..self
        }
    }

    pub fn with_animation_duration(self, seconds: f64) -> Self {
        Self {
            animation_duration_seconds: seconds,
            ..self
        }
    }

    /// Animation duration as a [`Duration`]. Negative or non-finite values
    /// collapse to zero.
    pub fn animation_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.animation_duration_seconds).unwrap_or_default()
    }

    fn config_dir() -> PathBuf {
        let mut dir = dirs::config_dir().unwrap_or_default();
        dir.push("zoomview");
        dir
    }

    /// Location of the per-user configuration file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("zoomview.json")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config: ViewerConfig = serde_json::from_reader(file)?;
        log::debug!("loaded {:?} from {}", config, path.as_ref().display());
        Ok(config)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            create_dir_all(parent)?;
        }
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Reads the per-user configuration file, falling back to defaults when it
    /// is missing or unreadable.
    pub fn load() -> Self {
        let file = Self::config_file();
        match Self::load_from(&file) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("using default viewer configuration, {}: {e}", file.display());
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(Self::config_file())
    }
}

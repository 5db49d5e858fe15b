use crate::constants::*;
use crate::pagination::ViewMode;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable editor behaviour
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorOptions {
    // Gestures
    pub drag_threshold_px: f64,
    pub snap_threshold: f64,
    pub double_tap_ms: u64,

    // Resizing
    pub min_photo_size: f64,
    pub min_sticker_size: f64,

    // Viewing
    pub mobile_breakpoint_px: u32,
    pub default_view_mode: ViewMode,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            drag_threshold_px: DRAG_THRESHOLD_PX,
            snap_threshold: SNAP_THRESHOLD,
            double_tap_ms: DOUBLE_TAP_MS,
            min_photo_size: MIN_PHOTO_SIZE,
            min_sticker_size: MIN_STICKER_SIZE,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            default_view_mode: ViewMode::Spreads,
        }
    }
}

impl EditorOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse editor options: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            LayoutError::Config(format!("Failed to serialize editor options: {}", e))
        })?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// View mode for a viewport of the given width
    pub fn view_mode_for_width(&self, width_px: u32) -> ViewMode {
        ViewMode::for_viewport_width(width_px, self.mobile_breakpoint_px)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.drag_threshold_px.is_nan() || self.drag_threshold_px < 0.0 {
            return Err(LayoutError::Config(
                "Drag threshold must not be negative".to_string(),
            ));
        }

        if !(0.0..=MAX_PERCENT).contains(&self.snap_threshold) {
            return Err(LayoutError::Config(format!(
                "Snap threshold must be between 0 and {}",
                MAX_PERCENT
            )));
        }

        for (name, size) in [
            ("photo", self.min_photo_size),
            ("sticker", self.min_sticker_size),
        ] {
            if size.is_nan() || size <= 0.0 || size > MAX_PERCENT {
                return Err(LayoutError::Config(format!(
                    "Minimum {} size must be in (0, {}], got {}",
                    name, MAX_PERCENT, size
                )));
            }
        }

        if self.double_tap_ms == 0 {
            return Err(LayoutError::Config(
                "Double-tap window must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

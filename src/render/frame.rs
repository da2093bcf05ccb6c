use serde::{Deserialize, Serialize};

use crate::core::types::Canvas;
use crate::error::{ShotChartError, ShotChartResult};
use crate::render::{PathPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass: the zone overlay and hex
/// cell paths plus zone labels, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub canvas: Canvas,
    pub paths: Vec<PathPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            paths: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ShotChartResult<()> {
        if !self.canvas.is_valid() {
            return Err(ShotChartError::InvalidCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }

        for path in &self.paths {
            path.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.texts.is_empty()
    }
}

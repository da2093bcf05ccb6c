//! Tooltip interaction state for one visualization instance.
//!
//! The machine is `Hidden -> Shown(content)` on entering a shape, and back to
//! `Hidden` on leaving it or on an outside interaction. The outside-dismiss
//! transition only arms after a short delay from showing, so the interaction
//! that opened the tooltip cannot immediately close it. Time is injected by
//! the caller as monotonic seconds, which keeps the machine deterministic.

use serde::{Deserialize, Serialize};

use crate::core::{HexBin, ZoneSummary};

/// Payload attached to a visible tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TooltipContent {
    Bin(HexBin),
    Zone(ZoneSummary),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    /// Seconds after showing before outside interactions may dismiss.
    pub outside_dismiss_delay: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            outside_dismiss_delay: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct ShownTooltip {
    content: TooltipContent,
    shown_at: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    config: TooltipConfig,
    shown: Option<ShownTooltip>,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self::new(TooltipConfig::default())
    }
}

impl TooltipState {
    #[must_use]
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            shown: None,
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.shown.is_some()
    }

    #[must_use]
    pub fn content(self) -> Option<TooltipContent> {
        self.shown.map(|shown| shown.content)
    }

    /// Pointer entered a bin or zone shape. Re-entering while visible swaps
    /// the content and restarts the outside-dismiss arming delay.
    pub fn on_shape_enter(&mut self, content: TooltipContent, now_seconds: f64) {
        self.shown = Some(ShownTooltip {
            content,
            shown_at: now_seconds,
        });
    }

    /// Pointer or touch left the shape.
    pub fn on_shape_leave(&mut self) {
        self.shown = None;
    }

    /// An interaction happened outside the tooltip and its shape. Dismisses
    /// only once the arming delay has elapsed; returns whether it dismissed.
    pub fn on_outside_interaction(&mut self, now_seconds: f64) -> bool {
        let Some(shown) = self.shown else {
            return false;
        };
        if now_seconds - shown.shown_at < self.config.outside_dismiss_delay {
            return false;
        }
        self.shown = None;
        true
    }
}

use serde::{Deserialize, Serialize};

/// Direction of the tooltip relative to its layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipDirection {
    Top,
    Bottom,
    Left,
    Right,
    Center,
    Auto,
}

/// Offset of the tooltip from its default position, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipOffset {
    pub x: i32,
    pub y: i32,
}

/// Tooltip bound to a layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub content: String,
    #[serde(default)]
    pub offset: Option<TooltipOffset>,
    #[serde(default)]
    pub direction: Option<TooltipDirection>,
    /// Always shown instead of only on hover
    #[serde(default)]
    pub permanent: bool,
    /// Follows the pointer
    #[serde(default)]
    pub sticky: bool,
    #[serde(default)]
    pub interactive: bool,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub class_name: Option<String>,
}

impl Tooltip {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            offset: None,
            direction: None,
            permanent: false,
            sticky: false,
            interactive: false,
            opacity: None,
            class_name: None,
        }
    }
}

//! Tool selection and keyboard shortcuts
//!
//! `ToolState` is owned by the editor and handed to the input handlers by
//! reference; there is no process-wide tool variable.

use super::color::{Rgb, DEFAULT_BACKGROUND};
use super::palette::PaletteColor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Swatch(PaletteColor),
    Eraser,
    Fill,
    /// Export the drawing as PNG.
    Save,
}

impl Tool {
    /// Text of the small hotkey badge rendered on the tool element.
    pub fn hotkey_label(self) -> String {
        match self {
            Tool::Swatch(c) => (c.slot() + 1).to_string(),
            Tool::Eraser => "E".to_string(),
            Tool::Fill => "F".to_string(),
            Tool::Save => "Ctrl+S".to_string(),
        }
    }

    /// Name used by the host page for the tool element.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Swatch(c) => c.name(),
            Tool::Eraser => "eraser",
            Tool::Fill => "fill-tool",
            Tool::Save => "save-tool",
        }
    }

    pub fn from_name(name: &str) -> Option<Tool> {
        Tool::all().into_iter().find(|t| t.name() == name)
    }

    pub fn all() -> Vec<Tool> {
        let mut tools: Vec<Tool> = crate::domain::palette::PALETTE
            .iter()
            .map(|&c| Tool::Swatch(c))
            .collect();
        tools.extend([Tool::Eraser, Tool::Fill, Tool::Save]);
        tools
    }
}

/// Map a `keydown` event to a tool. `ctrl` covers both Ctrl and Cmd (meta).
///
/// Accepts the Cyrillic letters sitting on the same physical keys as `f` and `e`
/// on a ЙЦУКЕН layout.
pub fn shortcut_for_key(key: &str, ctrl: bool) -> Option<Tool> {
    if ctrl {
        return match key {
            "s" | "S" | "ы" => Some(Tool::Save),
            _ => None,
        };
    }

    match key {
        "f" | "F" | "а" | "А" => Some(Tool::Fill),
        "e" | "E" | "у" | "У" => Some(Tool::Eraser),
        "1" | "2" | "3" | "4" | "5" => key
            .parse::<usize>()
            .ok()
            .and_then(|n| PaletteColor::from_slot(n - 1))
            .map(Tool::Swatch),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToolState {
    pub current_color: Rgb,
    pub fill_mode: bool,
    pub pointer_down: bool,
    pub selected: Tool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            current_color: DEFAULT_BACKGROUND,
            fill_mode: false,
            pointer_down: false,
            selected: Tool::Eraser,
        }
    }
}

impl ToolState {
    /// Apply a tool selection. Returns `true` when the tool asks for an export.
    pub fn select(&mut self, tool: Tool) -> bool {
        self.selected = tool;
        match tool {
            Tool::Swatch(c) => {
                self.current_color = c.rgb();
                self.fill_mode = false;
                false
            }
            Tool::Eraser => {
                self.current_color = DEFAULT_BACKGROUND;
                self.fill_mode = false;
                false
            }
            Tool::Fill => {
                self.fill_mode = true;
                false
            }
            Tool::Save => {
                self.fill_mode = false;
                true
            }
        }
    }

    /// Plain painting (click or drag) is active.
    #[inline]
    pub fn paints(&self) -> bool {
        !self.fill_mode
    }
}

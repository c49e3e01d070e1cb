use crate::domain::tools::{shortcut_for_key, Tool};

use super::EditorCore;

pub(super) fn key_down(
    core: &mut EditorCore,
    key: &str,
    ctrl_or_meta: bool,
    epoch_ms: i64,
) -> Option<Tool> {
    let tool = shortcut_for_key(key, ctrl_or_meta)?;
    match tool {
        // Ctrl+S exports without changing the selected tool.
        Tool::Save => {
            core.export_image(epoch_ms);
        }
        _ => core.select_tool(tool, epoch_ms),
    }
    Some(tool)
}

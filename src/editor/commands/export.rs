use crate::export::export_png;

use super::{EditorCore, Notification};

/// Encode the board as PNG and park it for the host to download.
/// Either way the user gets a toast; the grid is never touched.
pub(super) fn export_image(core: &mut EditorCore, epoch_ms: i64) -> bool {
    match export_png(&core.grid, core.config.cell_size_px, epoch_ms) {
        Ok(image) => {
            core.last_export = Some(image);
            core.notifications.push_back(Notification::ImageSaved);
            true
        }
        Err(e) => {
            console_error!("Error saving image: {}", e);
            core.notifications.push_back(Notification::SaveFailed);
            false
        }
    }
}

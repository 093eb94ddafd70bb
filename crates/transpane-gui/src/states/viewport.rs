/// GPU-side display state. Geometry lives in the core viewer.
#[derive(Default)]
pub struct ViewportState {
    /// Shared by both panes.
    pub texture: Option<egui::TextureHandle>,
    /// Revision the last painted frame was built from.
    pub painted_revision: Option<u64>,
}

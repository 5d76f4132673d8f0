/// Subpass hint flags and surface transform for a render-target layout

use bitflags::bitflags;

bitflags! {
    /// Optional subpasses a layout requests in addition to the main subpass
    ///
    /// `DEPTH_READ` and `DEFERRED_SHADING` are mutually exclusive; layout
    /// validation rejects the combination.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SubpassHint: u8 {
        /// Second subpass that reads the depth attachment as an input attachment
        const DEPTH_READ = 1 << 0;
        /// Two extra subpasses: G-buffer write, then shading from input attachments
        const DEFERRED_SHADING = 1 << 1;
        /// Final tonemapping subpass that fetches scene color as an input attachment
        const MOBILE_TONEMAP = 1 << 2;
    }
}

impl Default for SubpassHint {
    fn default() -> Self {
        SubpassHint::empty()
    }
}

/// Pre-rotation applied to the whole render pass (Qualcomm transform optimization)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceTransform {
    /// No rotation
    #[default]
    Identity,
    /// 90 degree clockwise rotation
    Rotate90,
    /// 180 degree rotation
    Rotate180,
    /// 270 degree clockwise rotation
    Rotate270,
}

/// RenderTargetLayout - complete description of a render pass's attachment set

use crate::error::{Error, Result};
use crate::layout::{AttachmentDesc, AttachmentRef, SubpassHint, SurfaceTransform};

/// Maximum number of simultaneous color attachments in one subpass
pub const MAX_COLOR_ATTACHMENTS: usize = 8;

/// Complete description of the attachment set a render pass renders into
///
/// Populated upstream (render-target/pipeline setup code) and consumed
/// read-only by a backend render-pass builder. Attachment order is
/// semantically meaningful: color index 0 is always the primary scene-color
/// attachment, and every [`AttachmentRef`] indexes
/// `attachment_descriptions` in declared order.
#[derive(Debug, Clone, Default)]
pub struct RenderTargetLayout {
    /// Ordered color attachment references (index 0 = scene color)
    pub color_attachments: Vec<AttachmentRef>,
    /// Multisample resolve targets; empty, or one per color attachment
    pub resolve_attachments: Vec<AttachmentRef>,
    /// Depth/stencil attachment, if the pass uses one
    pub depth_stencil_attachment: Option<AttachmentRef>,
    /// Single-sample target the depth/stencil attachment resolves into
    pub depth_stencil_resolve_attachment: Option<AttachmentRef>,
    /// Fragment density / shading-rate attachment
    pub fragment_density_attachment: Option<AttachmentRef>,
    /// Descriptions of every attachment, in reference-index order
    pub attachment_descriptions: Vec<AttachmentDesc>,
    /// Optional subpasses requested in addition to the main subpass
    pub subpass_hints: SubpassHint,
    /// Number of views rendered in one pass (0 or 1 = no multiview)
    pub multiview_count: u32,
    /// Pre-rotation of the whole pass (identity when unused)
    pub surface_transform: SurfaceTransform,
}

impl RenderTargetLayout {
    /// Number of declared color attachments
    pub fn color_attachment_count(&self) -> usize {
        self.color_attachments.len()
    }

    /// Whether the layout carries multisample resolve targets
    pub fn has_resolve_attachments(&self) -> bool {
        !self.resolve_attachments.is_empty()
    }

    /// Whether the layout renders to more than one view
    pub fn is_multiview(&self) -> bool {
        self.multiview_count > 1
    }

    /// View mask with one bit per declared view (0b11 for 2 views, 0b1111 for 4, ...)
    pub fn multiview_mask(&self) -> u32 {
        (1u32 << self.multiview_count) - 1
    }

    /// Check the invariants a render-pass builder depends on
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] when a reference is out of bounds,
    /// the resolve count does not match the color count, a hinted subpass
    /// is missing its required attachment, or the hint combination is
    /// unsupported.
    pub fn validate(&self) -> Result<()> {
        if self.color_attachments.len() > MAX_COLOR_ATTACHMENTS {
            return Err(Error::InvalidLayout(format!(
                "{} color attachments exceed the supported maximum of {}",
                self.color_attachments.len(),
                MAX_COLOR_ATTACHMENTS
            )));
        }

        if !self.resolve_attachments.is_empty()
            && self.resolve_attachments.len() != self.color_attachments.len()
        {
            return Err(Error::InvalidLayout(format!(
                "{} resolve attachments for {} color attachments (must be 0 or equal)",
                self.resolve_attachments.len(),
                self.color_attachments.len()
            )));
        }

        let descriptions = self.attachment_descriptions.len();
        let all_refs = self
            .color_attachments
            .iter()
            .chain(self.resolve_attachments.iter())
            .chain(self.depth_stencil_attachment.iter())
            .chain(self.depth_stencil_resolve_attachment.iter())
            .chain(self.fragment_density_attachment.iter());
        for reference in all_refs {
            if !reference.is_unused() && reference.attachment as usize >= descriptions {
                return Err(Error::InvalidLayout(format!(
                    "attachment reference {} exceeds {} attachment descriptions",
                    reference.attachment, descriptions
                )));
            }
        }

        let depth_read = self.subpass_hints.contains(SubpassHint::DEPTH_READ);
        let deferred = self.subpass_hints.contains(SubpassHint::DEFERRED_SHADING);
        let tonemap = self.subpass_hints.contains(SubpassHint::MOBILE_TONEMAP);

        if depth_read && deferred {
            return Err(Error::InvalidLayout(
                "depth-read and deferred-shading subpasses cannot be combined".to_string(),
            ));
        }

        if (depth_read || deferred) && self.depth_stencil_attachment.is_none() {
            return Err(Error::InvalidLayout(
                "depth-read and deferred-shading subpasses require a depth-stencil attachment"
                    .to_string(),
            ));
        }

        if deferred && self.color_attachments.is_empty() {
            return Err(Error::InvalidLayout(
                "deferred-shading subpasses require a scene-color attachment".to_string(),
            ));
        }

        if tonemap {
            // Without resolve targets the tonemap subpass writes the second
            // color attachment in place, so one must exist.
            let required = if self.has_resolve_attachments() { 1 } else { 2 };
            if self.color_attachments.len() < required {
                return Err(Error::InvalidLayout(format!(
                    "mobile-tonemap subpass requires at least {} color attachments, layout has {}",
                    required,
                    self.color_attachments.len()
                )));
            }
        }

        if self.depth_stencil_resolve_attachment.is_some()
            && self.depth_stencil_attachment.is_none()
        {
            return Err(Error::InvalidLayout(
                "depth-stencil resolve target without a depth-stencil attachment".to_string(),
            ));
        }

        if self.multiview_count >= 32 {
            return Err(Error::InvalidLayout(format!(
                "multiview count {} exceeds the 32-view mask width",
                self.multiview_count
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "render_target_layout_tests.rs"]
mod tests;

//! Render-target layout module
//!
//! Describes the attachment set a render pass renders into: attachment
//! descriptions, color/resolve/depth references, subpass hints, multiview
//! count, and surface transform. Populated upstream, consumed read-only by
//! a backend render-pass builder.

mod attachment;
mod subpass_hint;
mod render_target_layout;

pub use attachment::{
    AttachmentDesc, AttachmentRef, ImageLayout, LoadOp, StoreOp, TextureFormat,
};
pub use subpass_hint::{SubpassHint, SurfaceTransform};
pub use render_target_layout::{RenderTargetLayout, MAX_COLOR_ATTACHMENTS};

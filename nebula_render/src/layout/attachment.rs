/// Attachment description types shared by all backends

/// Pixel format of a render-pass attachment
///
/// Only formats meaningful as render targets are listed: color formats,
/// depth/stencil formats, and the two-channel format used by fragment
/// density maps.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    R8G8B8A8_UNORM,
    B8G8R8A8_UNORM,
    B8G8R8A8_SRGB,
    R16G16B16A16_SFLOAT,
    B10G11R11_UFLOAT,
    A2B10G10R10_UNORM,
    R8G8_UNORM,
    D32_SFLOAT,
    D24_UNORM_S8_UINT,
    D32_SFLOAT_S8_UINT,
}

impl TextureFormat {
    /// Whether this format carries a depth aspect
    pub fn is_depth(&self) -> bool {
        matches!(
            self,
            TextureFormat::D32_SFLOAT
                | TextureFormat::D24_UNORM_S8_UINT
                | TextureFormat::D32_SFLOAT_S8_UINT
        )
    }

    /// Whether this format carries a stencil aspect
    pub fn has_stencil(&self) -> bool {
        matches!(
            self,
            TextureFormat::D24_UNORM_S8_UINT | TextureFormat::D32_SFLOAT_S8_UINT
        )
    }
}

/// Load operation for an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOp {
    /// Load existing content
    Load,
    /// Clear the content
    Clear,
    /// Don't care about existing content
    DontCare,
}

/// Store operation for an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    /// Store the rendered content
    Store,
    /// Don't care about storing the content
    DontCare,
}

/// Image layout an attachment is in at a given point of the pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLayout {
    /// Undefined layout (initial state)
    Undefined,
    /// General layout (required for in-place read+write, e.g. subpass fetch)
    General,
    /// Layout for color attachment output
    ColorAttachment,
    /// Layout for depth/stencil attachment output
    DepthStencilAttachment,
    /// Layout for read-only depth/stencil access (input attachment or test-only)
    DepthStencilReadOnly,
    /// Layout for shader read-only access
    ShaderReadOnly,
    /// Layout for transfer source
    TransferSrc,
    /// Layout for transfer destination
    TransferDst,
    /// Layout for presenting to swapchain
    PresentSrc,
    /// Layout for fragment density map reads
    FragmentDensityMap,
}

/// Descriptor for a single attachment in a render pass
///
/// Immutable once derived from the layout; indices in [`AttachmentRef`]
/// point into the layout's array of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentDesc {
    /// Pixel format
    pub format: TextureFormat,
    /// Number of samples (1 = no MSAA)
    pub samples: u32,
    /// Load operation for the color/depth aspect
    pub load_op: LoadOp,
    /// Store operation for the color/depth aspect
    pub store_op: StoreOp,
    /// Load operation for the stencil aspect
    pub stencil_load_op: LoadOp,
    /// Store operation for the stencil aspect
    pub stencil_store_op: StoreOp,
    /// Initial layout (how the attachment starts)
    pub initial_layout: ImageLayout,
    /// Final layout (how the attachment ends)
    pub final_layout: ImageLayout,
}

impl AttachmentDesc {
    /// Single-sample color attachment cleared on load, stored on finish
    pub fn color(format: TextureFormat, final_layout: ImageLayout) -> Self {
        Self {
            format,
            samples: 1,
            load_op: LoadOp::Clear,
            store_op: StoreOp::Store,
            stencil_load_op: LoadOp::DontCare,
            stencil_store_op: StoreOp::DontCare,
            initial_layout: ImageLayout::Undefined,
            final_layout,
        }
    }

    /// Single-sample depth/stencil attachment cleared on load
    pub fn depth_stencil(format: TextureFormat) -> Self {
        Self {
            format,
            samples: 1,
            load_op: LoadOp::Clear,
            store_op: StoreOp::Store,
            stencil_load_op: LoadOp::Clear,
            stencil_store_op: StoreOp::DontCare,
            initial_layout: ImageLayout::Undefined,
            final_layout: ImageLayout::DepthStencilAttachment,
        }
    }
}

/// Reference to an attachment slot, with the layout it must be in
///
/// `attachment` indexes the layout's attachment-description array, or is
/// [`AttachmentRef::UNUSED`] for a deliberately empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentRef {
    /// Index into the attachment-description array
    pub attachment: u32,
    /// Layout the attachment is transitioned to for this use
    pub layout: ImageLayout,
}

impl AttachmentRef {
    /// Sentinel for an unused attachment slot
    pub const UNUSED: AttachmentRef = AttachmentRef {
        attachment: u32::MAX,
        layout: ImageLayout::Undefined,
    };

    /// Reference to `attachment` in the given layout
    pub fn new(attachment: u32, layout: ImageLayout) -> Self {
        Self { attachment, layout }
    }

    /// Whether this reference is the unused sentinel
    pub fn is_unused(&self) -> bool {
        self.attachment == u32::MAX
    }
}

/// RenderPass - owning wrapper around a Vulkan render pass handle

use ash::vk;

/// Vulkan render pass
///
/// Owns the underlying handle and destroys it on drop. The caller must keep
/// the pass alive for as long as pipelines and framebuffers reference it.
pub struct RenderPass {
    /// Vulkan render pass handle
    render_pass: vk::RenderPass,
    /// Vulkan device (for cleanup)
    device: ash::Device,
}

impl RenderPass {
    pub(crate) fn new(render_pass: vk::RenderPass, device: ash::Device) -> Self {
        Self {
            render_pass,
            device,
        }
    }

    /// Raw Vulkan handle, for framebuffer and pipeline creation
    pub fn handle(&self) -> vk::RenderPass {
        self.render_pass
    }
}

impl Drop for RenderPass {
    fn drop(&mut self) {
        unsafe {
            self.device.destroy_render_pass(self.render_pass, None);
        }
    }
}

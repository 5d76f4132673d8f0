/*!
# Nebula Render - Vulkan Backend

Vulkan render-pass construction for the Nebula render library.

This crate derives extension-aware Vulkan render passes from the
backend-agnostic [`RenderTargetLayout`](nebula_render::nebula::layout::RenderTargetLayout)
using the Ash bindings. The wire shape (VkRenderPassCreateInfo vs
VkRenderPassCreateInfo2) is selected once per device from a probed
capability snapshot; everything the legacy shape cannot express degrades to
a safe no-op.

## Usage

```no_run
use nebula_render::nebula::layout::RenderTargetLayout;
use nebula_render_vulkan::{create_render_pass, GpuContext};

# fn demo(instance: &ash::Instance, physical_device: ash::vk::PhysicalDevice,
#         device: ash::Device, layout: &RenderTargetLayout) -> nebula_render::nebula::Result<()> {
let context = GpuContext::new(instance, physical_device, device)?;
let render_pass = create_render_pass(&context, layout)?;
let raw = render_pass.handle();
# Ok(())
# }
```
*/

// Vulkan implementation modules
mod vulkan_capabilities;
mod vulkan_context;
mod vulkan_convert;
mod vulkan_render_pass;
mod vulkan_render_pass_builder;
mod vulkan_render_pass_variant;

pub use vulkan_capabilities::{DeviceCapabilities, VrsImageDataType};
pub use vulkan_context::GpuContext;
pub use vulkan_convert::{
    attachment_desc_to_vk, attachment_ref_to_vk, format_to_vk, image_layout_to_vk, load_op_to_vk,
    sample_count_to_vk, store_op_to_vk, surface_transform_to_vk,
};
pub use vulkan_render_pass::RenderPass;
pub use vulkan_render_pass_builder::{
    create_render_pass, DepthStencilResolve, MultiviewInfo, RenderPassBuilder,
    RenderPassDescriptor, ShadingRateAttachment, SubpassAttachmentRef, SubpassDependency,
    SubpassDescription, MAX_SUBPASSES,
};
pub use vulkan_render_pass_variant::RenderPassShape;

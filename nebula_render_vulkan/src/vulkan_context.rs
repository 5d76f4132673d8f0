/// GpuContext - shared device handles for render-pass creation
///
/// Bundles the logical device with the capability snapshot and the
/// extension loader for the extended creation entry point, so creation
/// code never has to thread three handles around.

use ash::vk;
use nebula_render::nebula::Result;

use crate::vulkan_capabilities::DeviceCapabilities;

/// Shared GPU context for render-pass construction
///
/// Does not own the device; the embedder remains responsible for device
/// destruction, after all render passes created through this context have
/// been dropped.
pub struct GpuContext {
    /// Vulkan logical device
    pub device: ash::Device,

    /// Capability snapshot the builder adapts to
    pub capabilities: DeviceCapabilities,

    /// Loader for vkCreateRenderPass2KHR (present iff the extension is)
    pub(crate) create_renderpass2: Option<ash::khr::create_renderpass2::Device>,
}

impl GpuContext {
    /// Probe the physical device and build a context around `device`
    ///
    /// # Arguments
    ///
    /// * `instance` - Vulkan instance the device was created from
    /// * `physical_device` - Physical device to probe capabilities on
    /// * `device` - Logical device handle (cloned, not owned)
    pub fn new(
        instance: &ash::Instance,
        physical_device: vk::PhysicalDevice,
        device: ash::Device,
    ) -> Result<Self> {
        let capabilities = DeviceCapabilities::probe(instance, physical_device)?;
        Ok(Self::with_capabilities(instance, device, capabilities))
    }

    /// Build a context from an existing capability snapshot
    ///
    /// Used by embedders that already manage extension state themselves.
    pub fn with_capabilities(
        instance: &ash::Instance,
        device: ash::Device,
        capabilities: DeviceCapabilities,
    ) -> Self {
        let create_renderpass2 = capabilities
            .has_renderpass2
            .then(|| ash::khr::create_renderpass2::Device::new(instance, &device));
        Self {
            device,
            capabilities,
            create_renderpass2,
        }
    }
}

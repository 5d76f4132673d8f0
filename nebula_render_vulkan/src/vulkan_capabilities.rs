/// DeviceCapabilities - snapshot of the optional Vulkan features the
/// render-pass builder adapts to

use ash::vk;
use nebula_render::nebula::{Error, Result};
use nebula_render::{nebula_debug, nebula_error};
use std::ffi::CStr;

/// Data type of the variable-rate-shading image the device consumes
///
/// Attachment-based shading rate is only applied when the device consumes
/// fractional density maps; palette-style images go through a different
/// (per-draw) path that this builder does not touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VrsImageDataType {
    /// Device exposes no VRS image support
    #[default]
    None,
    /// Shading-rate palette image (per-draw rates)
    Palette,
    /// Fractional fragment-density image
    Fractional,
}

/// Read-only snapshot of the device capabilities relevant to render-pass
/// construction
///
/// Probed once per device with [`DeviceCapabilities::probe`], or built
/// directly for tests and embedders that manage extensions themselves.
/// All fields are plain data; the snapshot can be shared freely across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct DeviceCapabilities {
    /// VK_KHR_create_renderpass2 (extended descriptor shapes)
    pub has_renderpass2: bool,
    /// VK_KHR_multiview
    pub has_multiview: bool,
    /// VK_KHR_depth_stencil_resolve
    pub has_depth_stencil_resolve: bool,
    /// VK_KHR_fragment_shading_rate
    pub has_fragment_shading_rate: bool,
    /// VK_EXT_fragment_density_map
    pub has_fragment_density_map: bool,
    /// VK_QCOM_render_pass_shader_resolve
    pub has_qcom_shader_resolve: bool,
    /// VK_QCOM_render_pass_transform
    pub has_qcom_render_pass_transform: bool,

    /// Device feature: attachment-based fragment shading rate
    pub attachment_rate_shading: bool,
    /// Global toggle: variable-rate shading in use
    pub variable_rate_shading_enabled: bool,
    /// Data type of the VRS image the device consumes
    pub vrs_image_data_type: VrsImageDataType,
    /// Smallest supported shading-rate attachment texel size (width, height)
    pub vrs_tile_size: (u32, u32),

    /// Workaround toggle: add SHADER_READ access to the G-buffer read
    /// dependency (some devices flicker without it)
    pub input_attachment_shader_read: bool,
}

impl DeviceCapabilities {
    /// Query the physical device for every capability this builder consumes
    ///
    /// # Arguments
    ///
    /// * `instance` - Vulkan instance (API version 1.1+ for feature queries)
    /// * `physical_device` - Physical device the logical device was created from
    ///
    /// # Errors
    ///
    /// Returns [`Error::InitializationFailed`] if extension enumeration fails.
    pub fn probe(instance: &ash::Instance, physical_device: vk::PhysicalDevice) -> Result<Self> {
        let extensions = unsafe {
            instance
                .enumerate_device_extension_properties(physical_device)
                .map_err(|e| {
                    nebula_error!(
                        "nebula::vulkan",
                        "Failed to enumerate device extensions: {:?}",
                        e
                    );
                    Error::InitializationFailed(format!(
                        "Failed to enumerate device extensions: {:?}",
                        e
                    ))
                })?
        };

        let has = |name: &CStr| {
            extensions.iter().any(|ext| {
                ext.extension_name_as_c_str()
                    .map(|ext_name| ext_name == name)
                    .unwrap_or(false)
            })
        };

        let mut capabilities = Self {
            has_renderpass2: has(ash::khr::create_renderpass2::NAME),
            has_multiview: has(ash::khr::multiview::NAME),
            has_depth_stencil_resolve: has(ash::khr::depth_stencil_resolve::NAME),
            has_fragment_shading_rate: has(ash::khr::fragment_shading_rate::NAME),
            has_fragment_density_map: has(ash::ext::fragment_density_map::NAME),
            has_qcom_shader_resolve: has(ash::qcom::render_pass_shader_resolve::NAME),
            has_qcom_render_pass_transform: has(ash::qcom::render_pass_transform::NAME),
            vrs_tile_size: (8, 8),
            ..Self::default()
        };

        if capabilities.has_fragment_shading_rate {
            let mut rate_features = vk::PhysicalDeviceFragmentShadingRateFeaturesKHR::default();
            let mut features = vk::PhysicalDeviceFeatures2::default().push_next(&mut rate_features);
            unsafe { instance.get_physical_device_features2(physical_device, &mut features) };
            capabilities.attachment_rate_shading =
                rate_features.attachment_fragment_shading_rate == vk::TRUE;

            let mut rate_properties =
                vk::PhysicalDeviceFragmentShadingRatePropertiesKHR::default();
            let mut properties =
                vk::PhysicalDeviceProperties2::default().push_next(&mut rate_properties);
            unsafe { instance.get_physical_device_properties2(physical_device, &mut properties) };
            let tile = rate_properties.min_fragment_shading_rate_attachment_texel_size;
            if tile.width > 0 && tile.height > 0 {
                capabilities.vrs_tile_size = (tile.width, tile.height);
            }
        }

        if capabilities.attachment_rate_shading {
            capabilities.variable_rate_shading_enabled = true;
            capabilities.vrs_image_data_type = VrsImageDataType::Fractional;
        }

        nebula_debug!(
            "nebula::vulkan",
            "Probed device capabilities: renderpass2={} multiview={} depth_stencil_resolve={} \
             fragment_shading_rate={} fragment_density_map={} qcom_shader_resolve={} qcom_transform={}",
            capabilities.has_renderpass2,
            capabilities.has_multiview,
            capabilities.has_depth_stencil_resolve,
            capabilities.has_fragment_shading_rate,
            capabilities.has_fragment_density_map,
            capabilities.has_qcom_shader_resolve,
            capabilities.has_qcom_render_pass_transform
        );

        Ok(capabilities)
    }

    /// Whether a shading-rate attachment may be chained onto subpasses
    ///
    /// True only when the extension, the device feature, the global toggle,
    /// and the fractional image data type all line up.
    pub fn allows_attachment_shading_rate(&self) -> bool {
        self.has_fragment_shading_rate
            && self.attachment_rate_shading
            && self.variable_rate_shading_enabled
            && self.vrs_image_data_type == VrsImageDataType::Fractional
    }
}

#[cfg(test)]
#[path = "vulkan_capabilities_tests.rs"]
mod tests;

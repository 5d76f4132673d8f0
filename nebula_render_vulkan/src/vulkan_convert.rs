/// Conversions from the backend-agnostic layout types to Vulkan enums

use ash::vk;
use nebula_render::nebula::layout::{
    AttachmentDesc, AttachmentRef, ImageLayout, LoadOp, StoreOp, SurfaceTransform, TextureFormat,
};

/// Convert a texture format to the Vulkan format
pub fn format_to_vk(format: TextureFormat) -> vk::Format {
    match format {
        TextureFormat::R8G8B8A8_UNORM => vk::Format::R8G8B8A8_UNORM,
        TextureFormat::B8G8R8A8_UNORM => vk::Format::B8G8R8A8_UNORM,
        TextureFormat::B8G8R8A8_SRGB => vk::Format::B8G8R8A8_SRGB,
        TextureFormat::R16G16B16A16_SFLOAT => vk::Format::R16G16B16A16_SFLOAT,
        TextureFormat::B10G11R11_UFLOAT => vk::Format::B10G11R11_UFLOAT_PACK32,
        TextureFormat::A2B10G10R10_UNORM => vk::Format::A2B10G10R10_UNORM_PACK32,
        TextureFormat::R8G8_UNORM => vk::Format::R8G8_UNORM,
        TextureFormat::D32_SFLOAT => vk::Format::D32_SFLOAT,
        TextureFormat::D24_UNORM_S8_UINT => vk::Format::D24_UNORM_S8_UINT,
        TextureFormat::D32_SFLOAT_S8_UINT => vk::Format::D32_SFLOAT_S8_UINT,
    }
}

/// Convert a sample count to the Vulkan sample-count flag (1 on unsupported counts)
pub fn sample_count_to_vk(samples: u32) -> vk::SampleCountFlags {
    match samples {
        1 => vk::SampleCountFlags::TYPE_1,
        2 => vk::SampleCountFlags::TYPE_2,
        4 => vk::SampleCountFlags::TYPE_4,
        8 => vk::SampleCountFlags::TYPE_8,
        _ => vk::SampleCountFlags::TYPE_1,
    }
}

/// Convert a load operation to the Vulkan load op
pub fn load_op_to_vk(load_op: LoadOp) -> vk::AttachmentLoadOp {
    match load_op {
        LoadOp::Load => vk::AttachmentLoadOp::LOAD,
        LoadOp::Clear => vk::AttachmentLoadOp::CLEAR,
        LoadOp::DontCare => vk::AttachmentLoadOp::DONT_CARE,
    }
}

/// Convert a store operation to the Vulkan store op
pub fn store_op_to_vk(store_op: StoreOp) -> vk::AttachmentStoreOp {
    match store_op {
        StoreOp::Store => vk::AttachmentStoreOp::STORE,
        StoreOp::DontCare => vk::AttachmentStoreOp::DONT_CARE,
    }
}

/// Convert an image layout to the Vulkan image layout
pub fn image_layout_to_vk(layout: ImageLayout) -> vk::ImageLayout {
    match layout {
        ImageLayout::Undefined => vk::ImageLayout::UNDEFINED,
        ImageLayout::General => vk::ImageLayout::GENERAL,
        ImageLayout::ColorAttachment => vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
        ImageLayout::DepthStencilAttachment => vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL,
        ImageLayout::DepthStencilReadOnly => vk::ImageLayout::DEPTH_STENCIL_READ_ONLY_OPTIMAL,
        ImageLayout::ShaderReadOnly => vk::ImageLayout::SHADER_READ_ONLY_OPTIMAL,
        ImageLayout::TransferSrc => vk::ImageLayout::TRANSFER_SRC_OPTIMAL,
        ImageLayout::TransferDst => vk::ImageLayout::TRANSFER_DST_OPTIMAL,
        ImageLayout::PresentSrc => vk::ImageLayout::PRESENT_SRC_KHR,
        ImageLayout::FragmentDensityMap => vk::ImageLayout::FRAGMENT_DENSITY_MAP_OPTIMAL_EXT,
    }
}

/// Convert a surface transform to the Vulkan transform flag
pub fn surface_transform_to_vk(transform: SurfaceTransform) -> vk::SurfaceTransformFlagsKHR {
    match transform {
        SurfaceTransform::Identity => vk::SurfaceTransformFlagsKHR::IDENTITY,
        SurfaceTransform::Rotate90 => vk::SurfaceTransformFlagsKHR::ROTATE_90,
        SurfaceTransform::Rotate180 => vk::SurfaceTransformFlagsKHR::ROTATE_180,
        SurfaceTransform::Rotate270 => vk::SurfaceTransformFlagsKHR::ROTATE_270,
    }
}

/// Convert an attachment description to the Vulkan wire shape
pub fn attachment_desc_to_vk(desc: &AttachmentDesc) -> vk::AttachmentDescription {
    vk::AttachmentDescription::default()
        .format(format_to_vk(desc.format))
        .samples(sample_count_to_vk(desc.samples))
        .load_op(load_op_to_vk(desc.load_op))
        .store_op(store_op_to_vk(desc.store_op))
        .stencil_load_op(load_op_to_vk(desc.stencil_load_op))
        .stencil_store_op(store_op_to_vk(desc.stencil_store_op))
        .initial_layout(image_layout_to_vk(desc.initial_layout))
        .final_layout(image_layout_to_vk(desc.final_layout))
}

/// Convert an attachment reference to the Vulkan wire shape
///
/// The unused sentinel maps to `VK_ATTACHMENT_UNUSED`.
pub fn attachment_ref_to_vk(reference: &AttachmentRef) -> vk::AttachmentReference {
    vk::AttachmentReference {
        attachment: if reference.is_unused() {
            vk::ATTACHMENT_UNUSED
        } else {
            reference.attachment
        },
        layout: image_layout_to_vk(reference.layout),
    }
}

#[cfg(test)]
#[path = "vulkan_convert_tests.rs"]
mod tests;

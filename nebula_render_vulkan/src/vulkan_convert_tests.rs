//! Unit tests for Vulkan conversion functions
//!
//! Tests pure conversion functions without requiring a GPU. Validates
//! correct mapping between layout types and Vulkan enums.

use super::*;
use nebula_render::nebula::layout::AttachmentRef;

// ============================================================================
// FORMAT CONVERSION TESTS
// ============================================================================

#[test]
fn test_format_to_vk_color_formats() {
    assert_eq!(
        format_to_vk(TextureFormat::R8G8B8A8_UNORM),
        vk::Format::R8G8B8A8_UNORM
    );
    assert_eq!(
        format_to_vk(TextureFormat::B8G8R8A8_UNORM),
        vk::Format::B8G8R8A8_UNORM
    );
    assert_eq!(
        format_to_vk(TextureFormat::B8G8R8A8_SRGB),
        vk::Format::B8G8R8A8_SRGB
    );
    assert_eq!(
        format_to_vk(TextureFormat::R16G16B16A16_SFLOAT),
        vk::Format::R16G16B16A16_SFLOAT
    );
    assert_eq!(
        format_to_vk(TextureFormat::B10G11R11_UFLOAT),
        vk::Format::B10G11R11_UFLOAT_PACK32
    );
    assert_eq!(
        format_to_vk(TextureFormat::A2B10G10R10_UNORM),
        vk::Format::A2B10G10R10_UNORM_PACK32
    );
    assert_eq!(
        format_to_vk(TextureFormat::R8G8_UNORM),
        vk::Format::R8G8_UNORM
    );
}

#[test]
fn test_format_to_vk_depth_formats() {
    assert_eq!(format_to_vk(TextureFormat::D32_SFLOAT), vk::Format::D32_SFLOAT);
    assert_eq!(
        format_to_vk(TextureFormat::D24_UNORM_S8_UINT),
        vk::Format::D24_UNORM_S8_UINT
    );
    assert_eq!(
        format_to_vk(TextureFormat::D32_SFLOAT_S8_UINT),
        vk::Format::D32_SFLOAT_S8_UINT
    );
}

// ============================================================================
// SAMPLE COUNT CONVERSION TESTS
// ============================================================================

#[test]
fn test_sample_count_to_vk() {
    assert_eq!(sample_count_to_vk(1), vk::SampleCountFlags::TYPE_1);
    assert_eq!(sample_count_to_vk(2), vk::SampleCountFlags::TYPE_2);
    assert_eq!(sample_count_to_vk(4), vk::SampleCountFlags::TYPE_4);
    assert_eq!(sample_count_to_vk(8), vk::SampleCountFlags::TYPE_8);
}

#[test]
fn test_sample_count_to_vk_unsupported_falls_back_to_one() {
    assert_eq!(sample_count_to_vk(0), vk::SampleCountFlags::TYPE_1);
    assert_eq!(sample_count_to_vk(3), vk::SampleCountFlags::TYPE_1);
    assert_eq!(sample_count_to_vk(16), vk::SampleCountFlags::TYPE_1);
}

// ============================================================================
// LOAD/STORE OP CONVERSION TESTS
// ============================================================================

#[test]
fn test_load_op_to_vk() {
    assert_eq!(load_op_to_vk(LoadOp::Load), vk::AttachmentLoadOp::LOAD);
    assert_eq!(load_op_to_vk(LoadOp::Clear), vk::AttachmentLoadOp::CLEAR);
    assert_eq!(load_op_to_vk(LoadOp::DontCare), vk::AttachmentLoadOp::DONT_CARE);
}

#[test]
fn test_store_op_to_vk() {
    assert_eq!(store_op_to_vk(StoreOp::Store), vk::AttachmentStoreOp::STORE);
    assert_eq!(store_op_to_vk(StoreOp::DontCare), vk::AttachmentStoreOp::DONT_CARE);
}

// ============================================================================
// IMAGE LAYOUT CONVERSION TESTS
// ============================================================================

#[test]
fn test_image_layout_to_vk() {
    assert_eq!(
        image_layout_to_vk(ImageLayout::Undefined),
        vk::ImageLayout::UNDEFINED
    );
    assert_eq!(image_layout_to_vk(ImageLayout::General), vk::ImageLayout::GENERAL);
    assert_eq!(
        image_layout_to_vk(ImageLayout::ColorAttachment),
        vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL
    );
    assert_eq!(
        image_layout_to_vk(ImageLayout::DepthStencilAttachment),
        vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL
    );
    assert_eq!(
        image_layout_to_vk(ImageLayout::DepthStencilReadOnly),
        vk::ImageLayout::DEPTH_STENCIL_READ_ONLY_OPTIMAL
    );
    assert_eq!(
        image_layout_to_vk(ImageLayout::ShaderReadOnly),
        vk::ImageLayout::SHADER_READ_ONLY_OPTIMAL
    );
    assert_eq!(
        image_layout_to_vk(ImageLayout::PresentSrc),
        vk::ImageLayout::PRESENT_SRC_KHR
    );
    assert_eq!(
        image_layout_to_vk(ImageLayout::FragmentDensityMap),
        vk::ImageLayout::FRAGMENT_DENSITY_MAP_OPTIMAL_EXT
    );
}

// ============================================================================
// SURFACE TRANSFORM CONVERSION TESTS
// ============================================================================

#[test]
fn test_surface_transform_to_vk() {
    assert_eq!(
        surface_transform_to_vk(SurfaceTransform::Identity),
        vk::SurfaceTransformFlagsKHR::IDENTITY
    );
    assert_eq!(
        surface_transform_to_vk(SurfaceTransform::Rotate90),
        vk::SurfaceTransformFlagsKHR::ROTATE_90
    );
    assert_eq!(
        surface_transform_to_vk(SurfaceTransform::Rotate180),
        vk::SurfaceTransformFlagsKHR::ROTATE_180
    );
    assert_eq!(
        surface_transform_to_vk(SurfaceTransform::Rotate270),
        vk::SurfaceTransformFlagsKHR::ROTATE_270
    );
}

// ============================================================================
// ATTACHMENT DESCRIPTION / REFERENCE CONVERSION TESTS
// ============================================================================

#[test]
fn test_attachment_desc_to_vk_maps_every_field() {
    let desc = AttachmentDesc {
        format: TextureFormat::R16G16B16A16_SFLOAT,
        samples: 4,
        load_op: LoadOp::Clear,
        store_op: StoreOp::DontCare,
        stencil_load_op: LoadOp::Load,
        stencil_store_op: StoreOp::Store,
        initial_layout: ImageLayout::Undefined,
        final_layout: ImageLayout::ShaderReadOnly,
    };
    let vk_desc = attachment_desc_to_vk(&desc);

    assert_eq!(vk_desc.format, vk::Format::R16G16B16A16_SFLOAT);
    assert_eq!(vk_desc.samples, vk::SampleCountFlags::TYPE_4);
    assert_eq!(vk_desc.load_op, vk::AttachmentLoadOp::CLEAR);
    assert_eq!(vk_desc.store_op, vk::AttachmentStoreOp::DONT_CARE);
    assert_eq!(vk_desc.stencil_load_op, vk::AttachmentLoadOp::LOAD);
    assert_eq!(vk_desc.stencil_store_op, vk::AttachmentStoreOp::STORE);
    assert_eq!(vk_desc.initial_layout, vk::ImageLayout::UNDEFINED);
    assert_eq!(vk_desc.final_layout, vk::ImageLayout::SHADER_READ_ONLY_OPTIMAL);
}

#[test]
fn test_attachment_ref_to_vk() {
    let reference = AttachmentRef::new(3, ImageLayout::ColorAttachment);
    let vk_ref = attachment_ref_to_vk(&reference);
    assert_eq!(vk_ref.attachment, 3);
    assert_eq!(vk_ref.layout, vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL);
}

#[test]
fn test_attachment_ref_to_vk_unused_sentinel() {
    let vk_ref = attachment_ref_to_vk(&AttachmentRef::UNUSED);
    assert_eq!(vk_ref.attachment, vk::ATTACHMENT_UNUSED);
}

//! Integration tests for the Vulkan render-pass builder
//!
//! Descriptor assembly is exercised through the public API without a GPU.
//! The actual creation tests require a Vulkan driver and are marked with
//! #[ignore].
//!
//! Run the GPU tests with: cargo test --test render_pass_builder_tests -- --ignored

use ash::vk;
use nebula_render::nebula::layout::{
    AttachmentDesc, AttachmentRef, ImageLayout, RenderTargetLayout, SubpassHint, TextureFormat,
};
use nebula_render_vulkan::{
    create_render_pass, DeviceCapabilities, GpuContext, RenderPassBuilder, RenderPassShape,
};

/// Layout with `color_count` single-sample color attachments
fn color_layout(color_count: u32) -> RenderTargetLayout {
    let mut layout = RenderTargetLayout::default();
    for i in 0..color_count {
        layout
            .color_attachments
            .push(AttachmentRef::new(i, ImageLayout::ColorAttachment));
        layout.attachment_descriptions.push(AttachmentDesc::color(
            TextureFormat::B8G8R8A8_UNORM,
            ImageLayout::ColorAttachment,
        ));
    }
    layout
}

fn add_depth(layout: &mut RenderTargetLayout) {
    let index = layout.attachment_descriptions.len() as u32;
    layout
        .attachment_descriptions
        .push(AttachmentDesc::depth_stencil(TextureFormat::D32_SFLOAT_S8_UINT));
    layout.depth_stencil_attachment =
        Some(AttachmentRef::new(index, ImageLayout::DepthStencilAttachment));
}

// ============================================================================
// DESCRIPTOR ASSEMBLY (no GPU)
// ============================================================================

#[test]
fn test_forward_layout_produces_single_subpass() {
    let layout = color_layout(1);
    let capabilities = DeviceCapabilities::default();
    let builder = RenderPassBuilder::new(&capabilities);
    let descriptor = builder.build(&layout).unwrap();

    assert_eq!(descriptor.shape(), RenderPassShape::Legacy);
    assert_eq!(descriptor.subpasses().len(), 1);
    assert_eq!(descriptor.dependencies().len(), 0);
    assert_eq!(descriptor.subpasses()[0].color_attachments().len(), 1);
    assert_eq!(descriptor.subpasses()[0].view_mask(), 0);
}

#[test]
fn test_gbuffer_layout_produces_deferred_chain() {
    let mut layout = color_layout(5);
    add_depth(&mut layout);
    layout.subpass_hints = SubpassHint::DEFERRED_SHADING;

    let caps = DeviceCapabilities {
        has_renderpass2: true,
        ..DeviceCapabilities::default()
    };
    let descriptor = RenderPassBuilder::new(&caps).build(&layout).unwrap();

    assert_eq!(descriptor.shape(), RenderPassShape::Extended);
    assert_eq!(descriptor.subpasses().len(), 3);
    assert_eq!(descriptor.dependencies().len(), 2);

    // Shading subpass: scene color out, depth + placeholder + 4 G-buffer
    // channels in
    let shading = &descriptor.subpasses()[2];
    assert_eq!(shading.color_attachments().len(), 1);
    assert_eq!(shading.input_attachments().len(), 6);

    for dependency in descriptor.dependencies() {
        assert!(dependency.src_subpass < dependency.dst_subpass);
    }
}

#[test]
fn test_mobile_tonemap_chain_without_msaa() {
    let mut layout = color_layout(2);
    add_depth(&mut layout);
    layout.subpass_hints = SubpassHint::DEPTH_READ | SubpassHint::MOBILE_TONEMAP;

    let descriptor = RenderPassBuilder::new(&DeviceCapabilities::default())
        .build(&layout)
        .unwrap();

    assert_eq!(descriptor.subpasses().len(), 3);
    assert_eq!(descriptor.dependencies().len(), 2);
    // In-place tonemap into the reserved second color attachment
    assert_eq!(descriptor.subpasses()[2].color_attachments()[0].attachment, 1);
}

#[test]
fn test_conflicting_hints_are_rejected() {
    let mut layout = color_layout(5);
    add_depth(&mut layout);
    layout.subpass_hints = SubpassHint::DEPTH_READ | SubpassHint::DEFERRED_SHADING;

    let result = RenderPassBuilder::new(&DeviceCapabilities::default()).build(&layout);
    assert!(result.is_err());
}

// ============================================================================
// RENDER PASS CREATION (requires GPU)
// ============================================================================

/// Create a headless instance + device on the first graphics-capable queue
///
/// # Safety
///
/// Caller destroys the returned device and instance.
unsafe fn create_test_device() -> (ash::Entry, ash::Instance, vk::PhysicalDevice, ash::Device) {
    let entry = ash::Entry::load().expect("Vulkan loader not available");
    let app_info = vk::ApplicationInfo::default().api_version(vk::API_VERSION_1_1);
    let instance_info = vk::InstanceCreateInfo::default().application_info(&app_info);
    let instance = entry
        .create_instance(&instance_info, None)
        .expect("instance creation failed");

    let physical_device = instance
        .enumerate_physical_devices()
        .expect("no physical devices")[0];
    let queue_family = instance
        .get_physical_device_queue_family_properties(physical_device)
        .iter()
        .position(|family| family.queue_flags.contains(vk::QueueFlags::GRAPHICS))
        .expect("no graphics queue family") as u32;

    let priorities = [1.0f32];
    let queue_infos = [vk::DeviceQueueCreateInfo::default()
        .queue_family_index(queue_family)
        .queue_priorities(&priorities)];
    let device_info = vk::DeviceCreateInfo::default().queue_create_infos(&queue_infos);
    let device = instance
        .create_device(physical_device, &device_info, None)
        .expect("device creation failed");

    (entry, instance, physical_device, device)
}

#[test]
#[ignore] // Requires GPU
fn test_vulkan_create_legacy_render_pass() {
    unsafe {
        let (_entry, instance, _physical_device, device) = create_test_device();

        // No extensions were enabled on the device, so force the legacy
        // shape regardless of what the probe would report.
        let context = GpuContext::with_capabilities(
            &instance,
            device.clone(),
            DeviceCapabilities::default(),
        );

        let mut layout = color_layout(1);
        add_depth(&mut layout);
        let render_pass = create_render_pass(&context, &layout).unwrap();
        assert_ne!(render_pass.handle(), vk::RenderPass::null());

        drop(render_pass);
        drop(context);
        device.destroy_device(None);
        instance.destroy_instance(None);
    }
}

#[test]
#[ignore] // Requires GPU
fn test_vulkan_create_depth_read_render_pass() {
    unsafe {
        let (_entry, instance, _physical_device, device) = create_test_device();
        let context = GpuContext::with_capabilities(
            &instance,
            device.clone(),
            DeviceCapabilities::default(),
        );

        let mut layout = color_layout(2);
        add_depth(&mut layout);
        layout.subpass_hints = SubpassHint::DEPTH_READ;
        let render_pass = create_render_pass(&context, &layout).unwrap();
        assert_ne!(render_pass.handle(), vk::RenderPass::null());

        drop(render_pass);
        drop(context);
        device.destroy_device(None);
        instance.destroy_instance(None);
    }
}

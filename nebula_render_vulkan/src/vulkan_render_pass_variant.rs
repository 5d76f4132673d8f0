/// Descriptor shape variants - legacy (VkRenderPassCreateInfo) and extended
/// (VkRenderPassCreateInfo2) serialization of an assembled descriptor
///
/// The owned descriptor model is shape-agnostic; this module turns it into
/// the native wire shape at the last moment and issues the matching
/// creation call. Extension blocks recorded during assembly become pNext
/// chains here and nowhere else.

use ash::vk;
use nebula_render::nebula::{Error, Result};
use nebula_render::{nebula_bail, nebula_err, nebula_error};

use crate::vulkan_capabilities::DeviceCapabilities;
use crate::vulkan_context::GpuContext;
use crate::vulkan_render_pass_builder::{RenderPassDescriptor, SubpassAttachmentRef};

/// Wire shape a render pass is created through
///
/// Selected once per device from the capability snapshot; every descriptor
/// built for that device uses the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPassShape {
    /// VkRenderPassCreateInfo / vkCreateRenderPass
    Legacy,
    /// VkRenderPassCreateInfo2 / vkCreateRenderPass2KHR
    Extended,
}

impl RenderPassShape {
    /// Pick the richest shape the device supports
    pub fn select(capabilities: &DeviceCapabilities) -> Self {
        if capabilities.has_renderpass2 {
            RenderPassShape::Extended
        } else {
            RenderPassShape::Legacy
        }
    }
}

// ===== WIRE-SHAPE CONVERSIONS =====

/// Widen a legacy attachment reference into the extended shape
///
/// Lossless for the legacy fields; the aspect mask is new in the extended
/// shape and supplied by the caller (empty when nothing more specific is
/// known).
pub(crate) fn extend_attachment_reference(
    reference: &vk::AttachmentReference,
    aspect_mask: vk::ImageAspectFlags,
) -> vk::AttachmentReference2<'static> {
    vk::AttachmentReference2::default()
        .attachment(reference.attachment)
        .layout(reference.layout)
        .aspect_mask(aspect_mask)
}

/// Narrow an extended attachment reference back to the legacy shape
pub(crate) fn flatten_attachment_reference(
    reference: &vk::AttachmentReference2<'_>,
) -> vk::AttachmentReference {
    vk::AttachmentReference {
        attachment: reference.attachment,
        layout: reference.layout,
    }
}

/// Widen a legacy attachment description into the extended shape
pub(crate) fn extend_attachment_description(
    desc: &vk::AttachmentDescription,
) -> vk::AttachmentDescription2<'static> {
    vk::AttachmentDescription2::default()
        .flags(desc.flags)
        .format(desc.format)
        .samples(desc.samples)
        .load_op(desc.load_op)
        .store_op(desc.store_op)
        .stencil_load_op(desc.stencil_load_op)
        .stencil_store_op(desc.stencil_store_op)
        .initial_layout(desc.initial_layout)
        .final_layout(desc.final_layout)
}

/// Narrow an extended attachment description back to the legacy shape
pub(crate) fn flatten_attachment_description(
    desc: &vk::AttachmentDescription2<'_>,
) -> vk::AttachmentDescription {
    vk::AttachmentDescription {
        flags: desc.flags,
        format: desc.format,
        samples: desc.samples,
        load_op: desc.load_op,
        store_op: desc.store_op,
        stencil_load_op: desc.stencil_load_op,
        stencil_store_op: desc.stencil_store_op,
        initial_layout: desc.initial_layout,
        final_layout: desc.final_layout,
    }
}

fn reference_to_legacy(reference: &SubpassAttachmentRef) -> vk::AttachmentReference {
    // The aspect mask has no legacy slot and is dropped.
    vk::AttachmentReference {
        attachment: reference.attachment,
        layout: reference.layout,
    }
}

fn reference_to_extended(reference: &SubpassAttachmentRef) -> vk::AttachmentReference2<'static> {
    vk::AttachmentReference2::default()
        .attachment(reference.attachment)
        .layout(reference.layout)
        .aspect_mask(reference.aspect_mask)
}

fn map_creation_error(result: vk::Result) -> Error {
    match result {
        vk::Result::ERROR_OUT_OF_HOST_MEMORY | vk::Result::ERROR_OUT_OF_DEVICE_MEMORY => {
            nebula_error!("nebula::vulkan", "Render pass creation failed: {:?}", result);
            Error::OutOfMemory
        }
        other => nebula_err!("nebula::vulkan", "Render pass creation failed: {:?}", other),
    }
}

// ===== CREATION =====

/// Serialize through VkRenderPassCreateInfo and call vkCreateRenderPass
///
/// Extension data the legacy shape cannot express (per-subpass view masks
/// aside, which travel in VkRenderPassMultiviewCreateInfo) was already
/// dropped by the owned model's no-op setters.
pub(crate) fn create_legacy(
    context: &GpuContext,
    descriptor: &RenderPassDescriptor,
) -> Result<vk::RenderPass> {
    let subpass_count = descriptor.subpasses().len();

    // Reference storage, complete before the create info borrows into it.
    let mut color_refs: Vec<Vec<vk::AttachmentReference>> = Vec::with_capacity(subpass_count);
    let mut resolve_refs: Vec<Vec<vk::AttachmentReference>> = Vec::with_capacity(subpass_count);
    let mut input_refs: Vec<Vec<vk::AttachmentReference>> = Vec::with_capacity(subpass_count);
    let mut depth_refs: Vec<Option<vk::AttachmentReference>> = Vec::with_capacity(subpass_count);
    for subpass in descriptor.subpasses() {
        color_refs.push(subpass.color_attachments().iter().map(reference_to_legacy).collect());
        resolve_refs.push(subpass.resolve_attachments().iter().map(reference_to_legacy).collect());
        input_refs.push(subpass.input_attachments().iter().map(reference_to_legacy).collect());
        depth_refs.push(subpass.depth_stencil_attachment().map(reference_to_legacy));
    }

    let mut subpasses: Vec<vk::SubpassDescription> = Vec::with_capacity(subpass_count);
    for (i, subpass) in descriptor.subpasses().iter().enumerate() {
        let mut desc = vk::SubpassDescription::default()
            .flags(subpass.flags())
            .pipeline_bind_point(vk::PipelineBindPoint::GRAPHICS)
            .color_attachments(&color_refs[i]);
        if !resolve_refs[i].is_empty() {
            desc = desc.resolve_attachments(&resolve_refs[i]);
        }
        if !input_refs[i].is_empty() {
            desc = desc.input_attachments(&input_refs[i]);
        }
        if let Some(depth) = &depth_refs[i] {
            desc = desc.depth_stencil_attachment(depth);
        }
        subpasses.push(desc);
    }

    let dependencies: Vec<vk::SubpassDependency> = descriptor
        .dependencies()
        .iter()
        .map(|d| vk::SubpassDependency {
            src_subpass: d.src_subpass,
            dst_subpass: d.dst_subpass,
            src_stage_mask: d.src_stage_mask,
            dst_stage_mask: d.dst_stage_mask,
            src_access_mask: d.src_access_mask,
            dst_access_mask: d.dst_access_mask,
            dependency_flags: d.dependency_flags,
        })
        .collect();

    let mut create_info = vk::RenderPassCreateInfo::default()
        .attachments(descriptor.attachments())
        .subpasses(&subpasses)
        .dependencies(&dependencies);
    if descriptor.has_transform() {
        create_info = create_info.flags(vk::RenderPassCreateFlags::TRANSFORM_QCOM);
    }

    // Without renderpass2 the view masks travel in a chained multiview
    // create info, one mask per subpass.
    let view_masks: Vec<u32>;
    let correlation_masks: [u32; 1];
    let mut multiview_info;
    if let Some(multiview) = descriptor.multiview() {
        view_masks = vec![multiview.view_mask; subpass_count];
        correlation_masks = [multiview.correlation_mask];
        multiview_info = vk::RenderPassMultiviewCreateInfo::default()
            .view_masks(&view_masks)
            .correlation_masks(&correlation_masks);
        create_info = create_info.push_next(&mut multiview_info);
    }

    let mut density_info;
    if let Some(reference) = descriptor.fragment_density_attachment() {
        density_info = vk::RenderPassFragmentDensityMapCreateInfoEXT::default()
            .fragment_density_map_attachment(reference_to_legacy(reference));
        create_info = create_info.push_next(&mut density_info);
    }

    unsafe { context.device.create_render_pass(&create_info, None) }.map_err(map_creation_error)
}

/// Serialize through VkRenderPassCreateInfo2 and call vkCreateRenderPass2KHR
pub(crate) fn create_extended(
    context: &GpuContext,
    descriptor: &RenderPassDescriptor,
) -> Result<vk::RenderPass> {
    let loader = match context.create_renderpass2.as_ref() {
        Some(loader) => loader,
        None => nebula_bail!(
            "nebula::vulkan",
            "Extended render pass requested but VK_KHR_create_renderpass2 is not loaded"
        ),
    };

    let subpass_count = descriptor.subpasses().len();

    let attachments: Vec<vk::AttachmentDescription2> = descriptor
        .attachments()
        .iter()
        .map(extend_attachment_description)
        .collect();

    // Reference storage, complete before the extension blocks point into it.
    let mut color_refs: Vec<Vec<vk::AttachmentReference2>> = Vec::with_capacity(subpass_count);
    let mut resolve_refs: Vec<Vec<vk::AttachmentReference2>> = Vec::with_capacity(subpass_count);
    let mut input_refs: Vec<Vec<vk::AttachmentReference2>> = Vec::with_capacity(subpass_count);
    let mut depth_refs: Vec<Option<vk::AttachmentReference2>> = Vec::with_capacity(subpass_count);
    let mut rate_refs: Vec<Option<vk::AttachmentReference2>> = Vec::with_capacity(subpass_count);
    let mut resolve_target_refs: Vec<Option<vk::AttachmentReference2>> =
        Vec::with_capacity(subpass_count);
    for subpass in descriptor.subpasses() {
        color_refs.push(subpass.color_attachments().iter().map(reference_to_extended).collect());
        resolve_refs.push(subpass.resolve_attachments().iter().map(reference_to_extended).collect());
        input_refs.push(subpass.input_attachments().iter().map(reference_to_extended).collect());
        depth_refs.push(subpass.depth_stencil_attachment().map(reference_to_extended));
        rate_refs.push(
            subpass
                .shading_rate_attachment()
                .map(|rate| reference_to_extended(&rate.attachment)),
        );
        resolve_target_refs.push(
            subpass
                .depth_stencil_resolve()
                .map(|resolve| reference_to_extended(&resolve.attachment)),
        );
    }

    // Per-subpass extension blocks, chained onto the descriptions below.
    let mut rate_infos: Vec<Option<vk::FragmentShadingRateAttachmentInfoKHR>> = descriptor
        .subpasses()
        .iter()
        .zip(rate_refs.iter())
        .map(|(subpass, reference)| match (subpass.shading_rate_attachment(), reference) {
            (Some(rate), Some(reference)) => Some(
                vk::FragmentShadingRateAttachmentInfoKHR::default()
                    .fragment_shading_rate_attachment(reference)
                    .shading_rate_attachment_texel_size(vk::Extent2D {
                        width: rate.texel_size.0,
                        height: rate.texel_size.1,
                    }),
            ),
            _ => None,
        })
        .collect();
    let mut resolve_infos: Vec<Option<vk::SubpassDescriptionDepthStencilResolve>> = descriptor
        .subpasses()
        .iter()
        .zip(resolve_target_refs.iter())
        .map(|(subpass, reference)| match (subpass.depth_stencil_resolve(), reference) {
            (Some(resolve), Some(reference)) => Some(
                vk::SubpassDescriptionDepthStencilResolve::default()
                    .depth_resolve_mode(resolve.depth_mode)
                    .stencil_resolve_mode(resolve.stencil_mode)
                    .depth_stencil_resolve_attachment(reference),
            ),
            _ => None,
        })
        .collect();

    let mut subpasses: Vec<vk::SubpassDescription2> = Vec::with_capacity(subpass_count);
    for (i, ((subpass, rate_info), resolve_info)) in descriptor
        .subpasses()
        .iter()
        .zip(rate_infos.iter_mut())
        .zip(resolve_infos.iter_mut())
        .enumerate()
    {
        let mut desc = vk::SubpassDescription2::default()
            .flags(subpass.flags())
            .pipeline_bind_point(vk::PipelineBindPoint::GRAPHICS)
            .view_mask(subpass.view_mask())
            .color_attachments(&color_refs[i]);
        if !resolve_refs[i].is_empty() {
            desc = desc.resolve_attachments(&resolve_refs[i]);
        }
        if !input_refs[i].is_empty() {
            desc = desc.input_attachments(&input_refs[i]);
        }
        if let Some(depth) = &depth_refs[i] {
            desc = desc.depth_stencil_attachment(depth);
        }
        if let Some(info) = resolve_info.as_mut() {
            desc = desc.push_next(info);
        }
        if let Some(info) = rate_info.as_mut() {
            desc = desc.push_next(info);
        }
        subpasses.push(desc);
    }

    let dependencies: Vec<vk::SubpassDependency2> = descriptor
        .dependencies()
        .iter()
        .map(|d| {
            vk::SubpassDependency2::default()
                .src_subpass(d.src_subpass)
                .dst_subpass(d.dst_subpass)
                .src_stage_mask(d.src_stage_mask)
                .dst_stage_mask(d.dst_stage_mask)
                .src_access_mask(d.src_access_mask)
                .dst_access_mask(d.dst_access_mask)
                .dependency_flags(d.dependency_flags)
        })
        .collect();

    let mut create_info = vk::RenderPassCreateInfo2::default()
        .attachments(&attachments)
        .subpasses(&subpasses)
        .dependencies(&dependencies);
    if descriptor.has_transform() {
        create_info = create_info.flags(vk::RenderPassCreateFlags::TRANSFORM_QCOM);
    }

    let correlation_masks: [u32; 1];
    if let Some(multiview) = descriptor.multiview() {
        correlation_masks = [multiview.correlation_mask];
        create_info = create_info.correlated_view_masks(&correlation_masks);
    }

    let mut density_info;
    if let Some(reference) = descriptor.fragment_density_attachment() {
        density_info = vk::RenderPassFragmentDensityMapCreateInfoEXT::default()
            .fragment_density_map_attachment(reference_to_legacy(reference));
        create_info = create_info.push_next(&mut density_info);
    }

    unsafe { loader.create_render_pass2(&create_info, None) }.map_err(map_creation_error)
}

#[cfg(test)]
#[path = "vulkan_render_pass_variant_tests.rs"]
mod tests;

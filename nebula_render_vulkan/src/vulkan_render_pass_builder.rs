/// Render-pass builder - derives a complete render-pass descriptor from a
/// render-target layout and a device-capability snapshot
///
/// The build step is a pure transformation; the resulting
/// [`RenderPassDescriptor`] is serialized into the native create-info shape
/// (legacy or extended) and consumed exactly once by
/// [`RenderPassDescriptor::create`].

use ash::vk;
use smallvec::SmallVec;
use nebula_render::nebula::{Error, Result};
use nebula_render::nebula::layout::{
    AttachmentRef, RenderTargetLayout, SubpassHint, SurfaceTransform, MAX_COLOR_ATTACHMENTS,
};
use nebula_render::{nebula_debug, nebula_error};

use crate::vulkan_capabilities::DeviceCapabilities;
use crate::vulkan_context::GpuContext;
use crate::vulkan_convert::{attachment_desc_to_vk, image_layout_to_vk};
use crate::vulkan_render_pass::RenderPass;
use crate::vulkan_render_pass_variant::{self, RenderPassShape};

/// Upper bound on subpasses and dependencies in one pass
///
/// The chain is bounded by the fixed hint set: main, depth-read, two
/// deferred-shading subpasses, tonemap. Scratch storage never grows past
/// this.
pub const MAX_SUBPASSES: usize = 8;

/// Attachment reference in the extended wire shape
///
/// Superset of the legacy `VkAttachmentReference`: legacy serialization
/// drops the aspect mask, extended serialization carries it through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubpassAttachmentRef {
    /// Index into the render pass's attachment descriptions
    pub attachment: u32,
    /// Layout the attachment is in during the subpass
    pub layout: vk::ImageLayout,
    /// Aspects accessed through this reference (extended shape only)
    pub aspect_mask: vk::ImageAspectFlags,
}

impl SubpassAttachmentRef {
    /// Sentinel for a deliberately empty slot
    pub const UNUSED: SubpassAttachmentRef = SubpassAttachmentRef {
        attachment: vk::ATTACHMENT_UNUSED,
        layout: vk::ImageLayout::UNDEFINED,
        aspect_mask: vk::ImageAspectFlags::empty(),
    };

    /// Whether this reference is the unused sentinel
    pub fn is_unused(&self) -> bool {
        self.attachment == vk::ATTACHMENT_UNUSED
    }

    fn from_layout_ref(reference: &AttachmentRef, aspect_mask: vk::ImageAspectFlags) -> Self {
        if reference.is_unused() {
            return Self::UNUSED;
        }
        Self {
            attachment: reference.attachment,
            layout: image_layout_to_vk(reference.layout),
            aspect_mask,
        }
    }
}

/// Shading-rate attachment block chained onto a subpass (extended shape only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadingRateAttachment {
    /// Reference to the density/rate attachment
    pub attachment: SubpassAttachmentRef,
    /// Texel footprint of one rate value (width, height)
    pub texel_size: (u32, u32),
}

/// Depth-stencil resolve block chained onto a subpass (extended shape only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthStencilResolve {
    /// Single-sample target the depth/stencil attachment resolves into
    pub attachment: SubpassAttachmentRef,
    /// Resolve mode for the depth aspect
    pub depth_mode: vk::ResolveModeFlags,
    /// Resolve mode for the stencil aspect
    pub stencil_mode: vk::ResolveModeFlags,
}

/// One subpass of the assembled render pass, in the owned (shape-agnostic)
/// model
///
/// Setters mirror the native descriptor fields; the three extended-only
/// setters (`set_multiview_mask`, `set_shading_rate_attachment`,
/// `set_depth_stencil_resolve_attachment`) are safe no-ops when the pass is
/// built in the legacy shape, so assembly code is written once for both.
#[derive(Debug, Clone)]
pub struct SubpassDescription {
    shape: RenderPassShape,
    color_attachments: SmallVec<[SubpassAttachmentRef; MAX_COLOR_ATTACHMENTS]>,
    resolve_attachments: SmallVec<[SubpassAttachmentRef; MAX_COLOR_ATTACHMENTS]>,
    input_attachments: SmallVec<[SubpassAttachmentRef; MAX_COLOR_ATTACHMENTS + 1]>,
    depth_stencil_attachment: Option<SubpassAttachmentRef>,
    view_mask: u32,
    shading_rate_attachment: Option<ShadingRateAttachment>,
    depth_stencil_resolve: Option<DepthStencilResolve>,
    flags: vk::SubpassDescriptionFlags,
}

impl SubpassDescription {
    pub(crate) fn new(shape: RenderPassShape) -> Self {
        Self {
            shape,
            color_attachments: SmallVec::new(),
            resolve_attachments: SmallVec::new(),
            input_attachments: SmallVec::new(),
            depth_stencil_attachment: None,
            view_mask: 0,
            shading_rate_attachment: None,
            depth_stencil_resolve: None,
            flags: vk::SubpassDescriptionFlags::empty(),
        }
    }

    /// Bind the first `count` of `references` as color outputs
    pub fn set_color_attachments(&mut self, references: &[SubpassAttachmentRef], count: usize) {
        assert!(count <= references.len());
        self.color_attachments.clear();
        self.color_attachments.extend_from_slice(&references[..count]);
    }

    /// Bind resolve targets; count must match the bound color attachments
    pub fn set_resolve_attachments(&mut self, references: &[SubpassAttachmentRef]) {
        if !references.is_empty() {
            assert_eq!(self.color_attachments.len(), references.len());
            self.resolve_attachments.clear();
            self.resolve_attachments.extend_from_slice(references);
        }
    }

    /// Bind the depth-stencil attachment
    pub fn set_depth_stencil_attachment(&mut self, reference: SubpassAttachmentRef) {
        self.depth_stencil_attachment = Some(reference);
    }

    /// Bind the ordered input attachments
    pub fn set_input_attachments(&mut self, references: &[SubpassAttachmentRef]) {
        self.input_attachments.clear();
        self.input_attachments.extend_from_slice(references);
    }

    /// Set the multiview mask (no-op in the legacy shape)
    pub fn set_multiview_mask(&mut self, mask: u32) {
        if self.shape == RenderPassShape::Extended {
            self.view_mask = mask;
        }
    }

    /// Chain a shading-rate attachment (no-op in the legacy shape)
    pub fn set_shading_rate_attachment(&mut self, attachment: ShadingRateAttachment) {
        if self.shape == RenderPassShape::Extended {
            self.shading_rate_attachment = Some(attachment);
        }
    }

    /// Chain a depth-stencil resolve target (no-op in the legacy shape)
    pub fn set_depth_stencil_resolve_attachment(&mut self, resolve: DepthStencilResolve) {
        if self.shape == RenderPassShape::Extended {
            self.depth_stencil_resolve = Some(resolve);
        }
    }

    pub(crate) fn insert_flags(&mut self, flags: vk::SubpassDescriptionFlags) {
        self.flags |= flags;
    }

    /// Bound color attachment references
    pub fn color_attachments(&self) -> &[SubpassAttachmentRef] {
        &self.color_attachments
    }

    /// Bound resolve attachment references (empty or one per color attachment)
    pub fn resolve_attachments(&self) -> &[SubpassAttachmentRef] {
        &self.resolve_attachments
    }

    /// Bound input attachment references
    pub fn input_attachments(&self) -> &[SubpassAttachmentRef] {
        &self.input_attachments
    }

    /// Bound depth-stencil attachment reference
    pub fn depth_stencil_attachment(&self) -> Option<&SubpassAttachmentRef> {
        self.depth_stencil_attachment.as_ref()
    }

    /// Multiview mask (0 in the legacy shape)
    pub fn view_mask(&self) -> u32 {
        self.view_mask
    }

    /// Chained shading-rate attachment, if any
    pub fn shading_rate_attachment(&self) -> Option<&ShadingRateAttachment> {
        self.shading_rate_attachment.as_ref()
    }

    /// Chained depth-stencil resolve block, if any
    pub fn depth_stencil_resolve(&self) -> Option<&DepthStencilResolve> {
        self.depth_stencil_resolve.as_ref()
    }

    /// Subpass description flags
    pub fn flags(&self) -> vk::SubpassDescriptionFlags {
        self.flags
    }
}

/// Execution/memory dependency between two subpasses of the same pass
///
/// Every dependency this builder emits is render-area-local
/// (`BY_REGION`): only attachment reuse within the same pixel region is
/// modeled, never whole-framebuffer hand-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubpassDependency {
    pub src_subpass: u32,
    pub dst_subpass: u32,
    pub src_stage_mask: vk::PipelineStageFlags,
    pub dst_stage_mask: vk::PipelineStageFlags,
    pub src_access_mask: vk::AccessFlags,
    pub dst_access_mask: vk::AccessFlags,
    pub dependency_flags: vk::DependencyFlags,
}

/// Multiview configuration of the whole pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiviewInfo {
    /// Views each subpass broadcasts to (contiguous bit pattern)
    pub view_mask: u32,
    /// Views the implementation may render concurrently
    pub correlation_mask: u32,
}

/// Complete, assembled description of one render pass
///
/// Built once by [`RenderPassBuilder::build`], consumed exactly once by
/// [`RenderPassDescriptor::create`]; not mutated after assembly.
#[derive(Debug, Clone)]
pub struct RenderPassDescriptor {
    shape: RenderPassShape,
    attachments: Vec<vk::AttachmentDescription>,
    subpasses: SmallVec<[SubpassDescription; MAX_SUBPASSES]>,
    dependencies: SmallVec<[SubpassDependency; MAX_SUBPASSES]>,
    multiview: Option<MultiviewInfo>,
    fragment_density_attachment: Option<SubpassAttachmentRef>,
    transform_qcom: bool,
}

impl RenderPassDescriptor {
    /// Wire shape this descriptor serializes into
    pub fn shape(&self) -> RenderPassShape {
        self.shape
    }

    /// Attachment descriptions, in layout-declared order
    pub fn attachments(&self) -> &[vk::AttachmentDescription] {
        &self.attachments
    }

    /// Ordered subpass descriptions
    pub fn subpasses(&self) -> &[SubpassDescription] {
        &self.subpasses
    }

    /// Dependencies chaining the subpasses
    pub fn dependencies(&self) -> &[SubpassDependency] {
        &self.dependencies
    }

    /// Multiview configuration, if the layout declared views
    pub fn multiview(&self) -> Option<&MultiviewInfo> {
        self.multiview.as_ref()
    }

    /// Fragment-density attachment chained onto the pass, if any
    pub fn fragment_density_attachment(&self) -> Option<&SubpassAttachmentRef> {
        self.fragment_density_attachment.as_ref()
    }

    /// Whether the pass carries the Qualcomm render-pass transform flag
    pub fn has_transform(&self) -> bool {
        self.transform_qcom
    }

    /// Create the Vulkan render pass through the entry point matching the
    /// selected shape
    ///
    /// # Errors
    ///
    /// Creation failure is non-recoverable for this descriptor: the same
    /// descriptor fails identically on retry. Out-of-memory results map to
    /// [`Error::OutOfMemory`], everything else to [`Error::BackendError`].
    pub fn create(&self, context: &GpuContext) -> Result<RenderPass> {
        let handle = match self.shape {
            RenderPassShape::Legacy => vulkan_render_pass_variant::create_legacy(context, self),
            RenderPassShape::Extended => vulkan_render_pass_variant::create_extended(context, self),
        }?;

        nebula_debug!(
            "nebula::vulkan",
            "Created {:?} render pass: {} attachments, {} subpasses, {} dependencies",
            self.shape,
            self.attachments.len(),
            self.subpasses.len(),
            self.dependencies.len()
        );

        Ok(RenderPass::new(handle, context.device.clone()))
    }
}

/// Assembles render-pass descriptors for one device-capability snapshot
///
/// Stateless between calls; every invocation owns its scratch storage, so
/// distinct builders may run concurrently on different layouts.
pub struct RenderPassBuilder<'a> {
    capabilities: &'a DeviceCapabilities,
    shape: RenderPassShape,
}

impl<'a> RenderPassBuilder<'a> {
    /// Builder for the given capability snapshot
    ///
    /// The descriptor shape is selected here, once, from the snapshot.
    pub fn new(capabilities: &'a DeviceCapabilities) -> Self {
        Self {
            capabilities,
            shape: RenderPassShape::select(capabilities),
        }
    }

    /// Wire shape every descriptor from this builder uses
    pub fn shape(&self) -> RenderPassShape {
        self.shape
    }

    /// Assemble the subpass chain and dependency graph for `layout`
    ///
    /// Emits the main subpass, then any hinted subpasses (depth-read, the
    /// two deferred-shading subpasses, mobile tonemap) chained with
    /// render-area-local dependencies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] when layout validation fails or the
    /// layout requires a capability the device lacks (multiview without
    /// VK_KHR_multiview or renderpass2).
    pub fn build(&self, layout: &RenderTargetLayout) -> Result<RenderPassDescriptor> {
        layout.validate()?;

        if layout.is_multiview()
            && !self.capabilities.has_renderpass2
            && !self.capabilities.has_multiview
        {
            nebula_error!(
                "nebula::vulkan",
                "Layout declares {} views but the device supports neither multiview nor renderpass2",
                layout.multiview_count
            );
            return Err(Error::InvalidLayout(
                "multiview layout on a device without multiview support".to_string(),
            ));
        }

        let caps = self.capabilities;
        let depth_read = layout.subpass_hints.contains(SubpassHint::DEPTH_READ);
        let deferred = layout.subpass_hints.contains(SubpassHint::DEFERRED_SHADING);
        let tonemap = layout.subpass_hints.contains(SubpassHint::MOBILE_TONEMAP);

        // 0b11 for 2 views, 0b1111 for 4, and so on
        let multiview_mask = layout.multiview_mask();

        let apply_shading_rate =
            caps.allows_attachment_shading_rate() && layout.fragment_density_attachment.is_some();
        let resolve_depth = caps.has_depth_stencil_resolve
            && layout.depth_stencil_resolve_attachment.is_some();

        let shading_rate = match &layout.fragment_density_attachment {
            Some(reference) if apply_shading_rate => Some(ShadingRateAttachment {
                attachment: SubpassAttachmentRef::from_layout_ref(
                    reference,
                    vk::ImageAspectFlags::COLOR,
                ),
                texel_size: caps.vrs_tile_size,
            }),
            _ => None,
        };

        // SAMPLE_ZERO is the only resolve mode every conforming
        // implementation supports.
        let depth_stencil_resolve = match &layout.depth_stencil_resolve_attachment {
            Some(reference) if resolve_depth => Some(DepthStencilResolve {
                attachment: SubpassAttachmentRef::from_layout_ref(
                    reference,
                    vk::ImageAspectFlags::empty(),
                ),
                depth_mode: vk::ResolveModeFlags::SAMPLE_ZERO,
                stencil_mode: vk::ResolveModeFlags::SAMPLE_ZERO,
            }),
            _ => None,
        };

        // Grab and convert attachment references, in declared order.
        let color_refs: SmallVec<[SubpassAttachmentRef; MAX_COLOR_ATTACHMENTS]> = layout
            .color_attachments
            .iter()
            .map(|r| SubpassAttachmentRef::from_layout_ref(r, vk::ImageAspectFlags::empty()))
            .collect();
        let resolve_refs: SmallVec<[SubpassAttachmentRef; MAX_COLOR_ATTACHMENTS]> = layout
            .resolve_attachments
            .iter()
            .map(|r| SubpassAttachmentRef::from_layout_ref(r, vk::ImageAspectFlags::empty()))
            .collect();

        // The tonemap subpass reserves the last color attachment for its
        // output; earlier subpasses must not bind it.
        let mut visible_color_count = color_refs.len();
        if tonemap && visible_color_count > 1 {
            visible_color_count -= 1;
        }

        let depth_ref = layout
            .depth_stencil_attachment
            .as_ref()
            .map(|r| SubpassAttachmentRef::from_layout_ref(r, vk::ImageAspectFlags::empty()));
        let depth_input = depth_ref.map(|d| SubpassAttachmentRef {
            attachment: d.attachment,
            layout: vk::ImageLayout::DEPTH_STENCIL_READ_ONLY_OPTIMAL,
            aspect_mask: vk::ImageAspectFlags::DEPTH,
        });

        let mut subpasses: SmallVec<[SubpassDescription; MAX_SUBPASSES]> = SmallVec::new();
        let mut dependencies: SmallVec<[SubpassDependency; MAX_SUBPASSES]> = SmallVec::new();
        let mut src_subpass: u32 = 0;
        let mut dst_subpass: u32 = 1;

        // Main subpass
        {
            let mut subpass = SubpassDescription::new(self.shape);
            subpass.set_color_attachments(&color_refs, visible_color_count);
            if !depth_read && !tonemap {
                // Resolve only on the last subpass of the chain
                subpass.set_resolve_attachments(&resolve_refs);
            }
            if let Some(depth) = depth_ref {
                subpass.set_depth_stencil_attachment(depth);
            }
            if !depth_read {
                if let Some(resolve) = depth_stencil_resolve {
                    subpass.set_depth_stencil_resolve_attachment(resolve);
                }
            }
            if let Some(rate) = shading_rate {
                subpass.set_shading_rate_attachment(rate);
            }
            subpass.set_multiview_mask(multiview_mask);
            subpasses.push(subpass);
        }

        // Color write and depth read subpass
        if depth_read {
            if let Some(depth_input) = depth_input {
                let mut subpass = SubpassDescription::new(self.shape);
                subpass.set_color_attachments(&color_refs, visible_color_count);
                if !tonemap {
                    subpass.set_resolve_attachments(&resolve_refs);
                }

                // Depth as input 0, and bound again as the subpass's
                // depth-stencil attachment (self-referential read)
                subpass.set_input_attachments(&[depth_input]);
                subpass.set_depth_stencil_attachment(depth_input);

                if let Some(resolve) = depth_stencil_resolve {
                    subpass.set_depth_stencil_resolve_attachment(resolve);
                }
                if let Some(rate) = shading_rate {
                    subpass.set_shading_rate_attachment(rate);
                }
                subpass.set_multiview_mask(multiview_mask);
                subpasses.push(subpass);

                dependencies.push(SubpassDependency {
                    src_subpass,
                    dst_subpass,
                    src_stage_mask: vk::PipelineStageFlags::EARLY_FRAGMENT_TESTS
                        | vk::PipelineStageFlags::LATE_FRAGMENT_TESTS,
                    dst_stage_mask: vk::PipelineStageFlags::FRAGMENT_SHADER,
                    src_access_mask: vk::AccessFlags::DEPTH_STENCIL_ATTACHMENT_WRITE,
                    dst_access_mask: vk::AccessFlags::INPUT_ATTACHMENT_READ,
                    dependency_flags: vk::DependencyFlags::BY_REGION,
                });
                src_subpass += 1;
                dst_subpass += 1;
            }
        }

        // Two subpasses for deferred shading
        if deferred {
            if let Some(depth_input) = depth_input {
                // 1. Write scene color and G-buffer, depth as input
                {
                    let mut subpass = SubpassDescription::new(self.shape);
                    subpass.set_color_attachments(&color_refs, color_refs.len());
                    subpass.set_depth_stencil_attachment(depth_input);
                    subpass.set_input_attachments(&[depth_input]);
                    if let Some(rate) = shading_rate {
                        subpass.set_shading_rate_attachment(rate);
                    }
                    subpass.set_multiview_mask(multiview_mask);
                    subpasses.push(subpass);

                    dependencies.push(SubpassDependency {
                        src_subpass,
                        dst_subpass,
                        src_stage_mask: vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT
                            | vk::PipelineStageFlags::EARLY_FRAGMENT_TESTS
                            | vk::PipelineStageFlags::LATE_FRAGMENT_TESTS,
                        dst_stage_mask: vk::PipelineStageFlags::FRAGMENT_SHADER,
                        src_access_mask: vk::AccessFlags::COLOR_ATTACHMENT_WRITE
                            | vk::AccessFlags::DEPTH_STENCIL_ATTACHMENT_WRITE,
                        dst_access_mask: vk::AccessFlags::INPUT_ATTACHMENT_READ,
                        dependency_flags: vk::DependencyFlags::BY_REGION,
                    });
                    src_subpass += 1;
                    dst_subpass += 1;
                }

                // 2. Write scene color only, G-buffer and depth as inputs
                {
                    let mut subpass = SubpassDescription::new(self.shape);
                    subpass.set_color_attachments(&color_refs, 1);
                    subpass.set_depth_stencil_attachment(depth_input);

                    // Input 0 is depth, input 1 mirrors the scene-color
                    // output slot and stays unused, G-buffer channels
                    // follow from input 2.
                    let mut inputs: SmallVec<[SubpassAttachmentRef; MAX_COLOR_ATTACHMENTS + 1]> =
                        SmallVec::new();
                    inputs.push(depth_input);
                    inputs.push(SubpassAttachmentRef::UNUSED);
                    for reference in &color_refs[1..] {
                        inputs.push(SubpassAttachmentRef {
                            attachment: reference.attachment,
                            layout: vk::ImageLayout::SHADER_READ_ONLY_OPTIMAL,
                            aspect_mask: vk::ImageAspectFlags::COLOR,
                        });
                    }
                    subpass.set_input_attachments(&inputs);

                    if let Some(rate) = shading_rate {
                        subpass.set_shading_rate_attachment(rate);
                    }
                    subpass.set_multiview_mask(multiview_mask);
                    subpasses.push(subpass);

                    let mut dst_access_mask = vk::AccessFlags::INPUT_ATTACHMENT_READ;
                    if caps.input_attachment_shader_read {
                        // Not strictly required, but some devices flicker
                        // without it
                        dst_access_mask |= vk::AccessFlags::SHADER_READ;
                    }
                    dependencies.push(SubpassDependency {
                        src_subpass,
                        dst_subpass,
                        src_stage_mask: vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT,
                        dst_stage_mask: vk::PipelineStageFlags::FRAGMENT_SHADER,
                        src_access_mask: vk::AccessFlags::COLOR_ATTACHMENT_WRITE,
                        dst_access_mask,
                        dependency_flags: vk::DependencyFlags::BY_REGION,
                    });
                    src_subpass += 1;
                    dst_subpass += 1;
                }
            }
        }

        // Tonemapping subpass
        if tonemap {
            let mut subpass = SubpassDescription::new(self.shape);

            // The subpass fetch convention expects depth in input 0
            let inputs = [
                SubpassAttachmentRef::UNUSED,
                SubpassAttachmentRef {
                    attachment: color_refs[0].attachment,
                    layout: vk::ImageLayout::GENERAL,
                    aspect_mask: vk::ImageAspectFlags::COLOR,
                },
            ];
            subpass.set_input_attachments(&inputs);

            let output_attachment = if layout.has_resolve_attachments() {
                // MSAA: tonemap straight into the resolve target
                resolve_refs[0].attachment
            } else {
                // non-MSAA: the reserved last color attachment
                color_refs[1].attachment
            };
            let output = [SubpassAttachmentRef {
                attachment: output_attachment,
                layout: vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
                aspect_mask: vk::ImageAspectFlags::COLOR,
            }];
            subpass.set_color_attachments(&output, 1);

            // Combine the final render and store operations when the
            // device can resolve from the shader
            if caps.has_qcom_shader_resolve && layout.has_resolve_attachments() {
                subpass.insert_flags(vk::SubpassDescriptionFlags::SHADER_RESOLVE_QCOM);
            }
            if let Some(rate) = shading_rate {
                subpass.set_shading_rate_attachment(rate);
            }
            subpass.set_multiview_mask(multiview_mask);
            subpasses.push(subpass);

            dependencies.push(SubpassDependency {
                src_subpass,
                dst_subpass,
                src_stage_mask: vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT,
                dst_stage_mask: vk::PipelineStageFlags::FRAGMENT_SHADER,
                src_access_mask: vk::AccessFlags::COLOR_ATTACHMENT_WRITE,
                dst_access_mask: vk::AccessFlags::INPUT_ATTACHMENT_READ,
                dependency_flags: vk::DependencyFlags::BY_REGION,
            });
            src_subpass += 1;
            dst_subpass += 1;
        }

        assert_eq!(
            dst_subpass as usize,
            subpasses.len(),
            "subpass chain counter out of sync with emitted subpasses"
        );
        assert_eq!(src_subpass as usize, dependencies.len());

        // Convert attachment descriptions verbatim, preserving index order.
        let attachments: Vec<vk::AttachmentDescription> = layout
            .attachment_descriptions
            .iter()
            .map(attachment_desc_to_vk)
            .collect();

        let multiview = layout.is_multiview().then(|| MultiviewInfo {
            view_mask: multiview_mask,
            correlation_mask: multiview_mask,
        });

        let fragment_density_attachment = match &layout.fragment_density_attachment {
            Some(reference) if caps.has_fragment_density_map => Some(
                SubpassAttachmentRef::from_layout_ref(reference, vk::ImageAspectFlags::COLOR),
            ),
            _ => None,
        };

        let transform_qcom = layout.surface_transform != SurfaceTransform::Identity
            && caps.has_qcom_render_pass_transform;

        nebula_debug!(
            "nebula::vulkan",
            "Assembled render pass descriptor: {} attachments, {} subpasses, {} dependencies, hints {:?}",
            attachments.len(),
            subpasses.len(),
            dependencies.len(),
            layout.subpass_hints
        );

        Ok(RenderPassDescriptor {
            shape: self.shape,
            attachments,
            subpasses,
            dependencies,
            multiview,
            fragment_density_attachment,
            transform_qcom,
        })
    }
}

/// Build and create a render pass for `layout` in one call
///
/// # Errors
///
/// Propagates validation errors from [`RenderPassBuilder::build`] and
/// creation failures from [`RenderPassDescriptor::create`].
pub fn create_render_pass(context: &GpuContext, layout: &RenderTargetLayout) -> Result<RenderPass> {
    RenderPassBuilder::new(&context.capabilities)
        .build(layout)?
        .create(context)
}

#[cfg(test)]
#[path = "vulkan_render_pass_builder_tests.rs"]
mod tests;

/// Tests for DeviceCapabilities
///
/// The probe itself needs a physical device; these tests cover the snapshot
/// defaults and the attachment-shading-rate gating logic.

use super::*;

// ============================================================================
// Tests: defaults
// ============================================================================

#[test]
fn test_default_capabilities_are_legacy_baseline() {
    let caps = DeviceCapabilities::default();
    assert!(!caps.has_renderpass2);
    assert!(!caps.has_multiview);
    assert!(!caps.has_depth_stencil_resolve);
    assert!(!caps.has_fragment_shading_rate);
    assert!(!caps.has_fragment_density_map);
    assert!(!caps.has_qcom_shader_resolve);
    assert!(!caps.has_qcom_render_pass_transform);
    assert_eq!(caps.vrs_image_data_type, VrsImageDataType::None);
}

// ============================================================================
// Tests: attachment shading rate gating
// ============================================================================

#[test]
fn test_attachment_shading_rate_requires_all_conditions() {
    let enabled = DeviceCapabilities {
        has_fragment_shading_rate: true,
        attachment_rate_shading: true,
        variable_rate_shading_enabled: true,
        vrs_image_data_type: VrsImageDataType::Fractional,
        ..DeviceCapabilities::default()
    };
    assert!(enabled.allows_attachment_shading_rate());

    // Knock out each condition in turn
    let mut caps = enabled.clone();
    caps.has_fragment_shading_rate = false;
    assert!(!caps.allows_attachment_shading_rate());

    let mut caps = enabled.clone();
    caps.attachment_rate_shading = false;
    assert!(!caps.allows_attachment_shading_rate());

    let mut caps = enabled.clone();
    caps.variable_rate_shading_enabled = false;
    assert!(!caps.allows_attachment_shading_rate());

    let mut caps = enabled;
    caps.vrs_image_data_type = VrsImageDataType::Palette;
    assert!(!caps.allows_attachment_shading_rate());
}

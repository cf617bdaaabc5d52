// SPDX-License-Identifier: MPL-2.0
//! Spacing and sizing scales shared by the shell's widgets.

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the app bar.
    pub const APP_BAR_HEIGHT: f32 = 56.0;

    pub const TITLE_TEXT: f32 = 20.0;
}

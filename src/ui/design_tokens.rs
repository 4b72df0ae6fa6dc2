// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens used by the native toast renderer, mirroring the CSS custom
properties of the theme folder.

## Organization

- **Palette**: Base and accent colors
- **Opacity**: Standardized opacity levels, including the phase fades
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use nuke_design::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let faded = Color {
    a: opacity::HIDDEN,
    ..palette::ACCENT_500
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Accent scale
    pub const ACCENT_100: Color = Color::from_rgb(0.88, 0.93, 1.0);
    pub const ACCENT_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const ACCENT_700: Color = Color::from_rgb(0.15, 0.4, 0.7);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Toast before its first frame, and after its exit animation.
    pub const HIDDEN: f32 = TRANSPARENT;

    /// Toast while its exit animation runs.
    pub const LEAVING: f32 = 0.4;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 1 unit
    pub const XS: f32 = 8.0; // 2 units
    pub const SM: f32 = 12.0; // 3 units
    pub const MD: f32 = 16.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Hit area of the close control (WCAG 2.5.8 minimum target).
    pub const CLOSE_TARGET: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Toast message text
    pub const BODY: f32 = 14.0;

    /// Close glyph
    pub const CLOSE_GLYPH: f32 = 16.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - zen outline
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - emphasis
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::HIDDEN < opacity::LEAVING);
    assert!(opacity::LEAVING < opacity::OPAQUE);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(typography::CLOSE_GLYPH >= typography::BODY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }

    #[test]
    fn close_target_fits_in_toast() {
        assert!(sizing::CLOSE_TARGET * 4.0 < sizing::TOAST_WIDTH);
    }
}

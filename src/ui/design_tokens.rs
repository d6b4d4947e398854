// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, size and spacing value used by the views lives here.

## Organization

- **Palette**: Base colors (warm neutrals and the gold brand scale)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_HOVER,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```

Page geometry (section and card heights) is not a design token: it lives
with the page layout so scroll targets and the rendered page agree.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Warm neutrals
    pub const CREAM_50: Color = Color::from_rgb(0.992, 0.980, 0.965);
    pub const CREAM_100: Color = Color::from_rgb(0.941, 0.902, 0.878); // #f0e6e0
    pub const CREAM_200: Color = Color::from_rgb(0.910, 0.867, 0.839); // #e8ddd6
    pub const TAUPE_500: Color = Color::from_rgb(0.545, 0.451, 0.333); // #8b7355
    pub const ESPRESSO_700: Color = Color::from_rgb(0.243, 0.200, 0.169);
    pub const ESPRESSO_800: Color = Color::from_rgb(0.169, 0.141, 0.122);
    pub const ESPRESSO_900: Color = Color::from_rgb(0.110, 0.094, 0.082);

    // Brand colors (gold scale)
    pub const GOLD_300: Color = Color::from_rgb(0.933, 0.784, 0.412);
    pub const GOLD_500: Color = Color::from_rgb(0.855, 0.647, 0.125); // #DAA520
    pub const GOLD_700: Color = Color::from_rgb(0.722, 0.525, 0.043); // #B8860B

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.1;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.9;

    /// Navbar background once the page is scrolled.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_XL: f32 = 48.0;

    pub const BUTTON_HEIGHT: f32 = 40.0;

    /// Height of the scroll progress bar.
    pub const PROGRESS_BAR: f32 = 3.0;

    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
    pub const FORM_MAX_WIDTH: f32 = 560.0;
    pub const TOAST_WIDTH: f32 = 340.0;
    pub const PORTRAIT_WIDTH: f32 = 380.0;

    /// Largest share of the window taken by the lightbox image.
    pub const LIGHTBOX_IMAGE_RATIO: f32 = 0.85;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: hero headline
    //! - Titles: section headings
    //! - Body: primary content text
    //! - Caption: secondary, supporting text

    pub const DISPLAY: f32 = 56.0;

    /// Section titles (About, Portfolio, Contact)
    pub const TITLE_LG: f32 = 36.0;

    /// Brand name in the navbar
    pub const TITLE_MD: f32 = 22.0;

    /// Hero tagline, card titles
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const BODY_SM: f32 = 13.0;

    /// Badges, counters
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SOFT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.12,
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SOFT,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 6.0,
    };

    pub const MD: Shadow = Shadow {
        color: SOFT,
        offset: Vector { x: 0.0, y: 6.0 },
        blur_radius: 18.0,
    };

    pub const LG: Shadow = Shadow {
        color: SOFT,
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 32.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::ICON_XL > spacing::XL);
    assert!(sizing::LIGHTBOX_IMAGE_RATIO > 0.0 && sizing::LIGHTBOX_IMAGE_RATIO <= 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};

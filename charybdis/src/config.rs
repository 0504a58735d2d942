//! Runtime configuration of the Charybdis hooks.
use crate::layer::NUM_LAYER;

/// Configurations of the Charybdis hooks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharybdisConfig {
    pub indicator: LayerIndicatorConfig,
    pub pointing: PointingConfig,
}

/// Hue and saturation of a layer color, on the 0..=255 scale of the RGB matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerColor {
    pub hue: u8,
    pub sat: u8,
}

impl LayerColor {
    pub const WHITE: Self = Self::new(0, 0);
    pub const RED: Self = Self::new(0, 255);
    pub const ORANGE: Self = Self::new(28, 255);
    pub const YELLOW: Self = Self::new(43, 255);
    pub const GREEN: Self = Self::new(85, 255);
    pub const CYAN: Self = Self::new(128, 255);
    pub const BLUE: Self = Self::new(170, 255);
    pub const MAGENTA: Self = Self::new(213, 255);

    pub const fn new(hue: u8, sat: u8) -> Self {
        Self { hue, sat }
    }
}

/// Config for the layer indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerIndicatorConfig {
    /// Value of every layer color, about 10% of the full output
    pub brightness: u8,
    /// Color of each layer, indexed by layer. The base layer entry is never shown, the indicator is off on the base layer.
    pub colors: [LayerColor; NUM_LAYER],
    /// Color of layers outside `colors`
    pub fallback: LayerColor,
}

impl Default for LayerIndicatorConfig {
    fn default() -> Self {
        Self {
            brightness: 26,
            colors: [
                LayerColor::WHITE,
                LayerColor::BLUE,
                LayerColor::MAGENTA,
                LayerColor::GREEN,
                LayerColor::RED,
                LayerColor::YELLOW,
                LayerColor::CYAN,
                LayerColor::ORANGE,
            ],
            fallback: LayerColor::WHITE,
        }
    }
}

/// Config for the pointing device hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointingConfig {
    /// Vertical motion is divided by this value, rounding up, when turned into wheel motion
    pub drag_scroll_divisor: u8,
}

impl Default for PointingConfig {
    fn default() -> Self {
        Self { drag_scroll_divisor: 4 }
    }
}

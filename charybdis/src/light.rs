//! RGB matrix layer indicator.
//!
//! The matrix is dark on the base layer. On any other layer the whole matrix shows one dim,
//! static color that identifies the highest active layer.
use crate::config::{LayerColor, LayerIndicatorConfig};
use crate::layer::LayerState;

/// A color in HSV space, each component on the 0..=255 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub hue: u8,
    pub sat: u8,
    pub val: u8,
}

/// Effect mode of the RGB matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbMatrixMode {
    /// No animation, the matrix keeps the color it is given
    None,
    /// Solid color effect
    SolidColor,
}

/// Primitives of the RGB matrix driver.
///
/// All of them change the running state only, nothing is written to persistent storage.
pub trait RgbMatrixDriver {
    fn enable_noeeprom(&mut self);

    fn disable_noeeprom(&mut self);

    fn mode_noeeprom(&mut self, mode: RgbMatrixMode);

    fn sethsv_noeeprom(&mut self, hsv: Hsv);
}

impl<T: RgbMatrixDriver + ?Sized> RgbMatrixDriver for &mut T {
    fn enable_noeeprom(&mut self) {
        (**self).enable_noeeprom()
    }

    fn disable_noeeprom(&mut self) {
        (**self).disable_noeeprom()
    }

    fn mode_noeeprom(&mut self, mode: RgbMatrixMode) {
        (**self).mode_noeeprom(mode)
    }

    fn sethsv_noeeprom(&mut self, hsv: Hsv) {
        (**self).sethsv_noeeprom(hsv)
    }
}

pub struct LayerIndicator<D: RgbMatrixDriver> {
    driver: D,
    config: LayerIndicatorConfig,
}

impl<D: RgbMatrixDriver> LayerIndicator<D> {
    pub fn new(driver: D, config: LayerIndicatorConfig) -> Self {
        Self { driver, config }
    }

    /// Lighting starts off, the keyboard boots on the base layer.
    pub fn on_init(&mut self) {
        debug!("Layer indicator: disabled at startup");
        self.driver.disable_noeeprom();
    }

    /// Update the indicator for the new layer state. The state is returned unchanged.
    pub fn layer_state_set(&mut self, state: LayerState) -> LayerState {
        let layer = state.highest_layer();

        if layer == 0 {
            debug!("Layer indicator: base layer, lighting off");
            self.driver.disable_noeeprom();
            return state;
        }

        let color = self.layer_color(layer);
        debug!(
            "Layer indicator: layer {}, hue {}, sat {}",
            layer, color.hue, color.sat
        );
        self.driver.enable_noeeprom();
        self.driver.mode_noeeprom(RgbMatrixMode::None);
        self.driver.sethsv_noeeprom(Hsv {
            hue: color.hue,
            sat: color.sat,
            val: self.config.brightness,
        });

        state
    }

    /// Color of a layer. Layers without a configured color get the fallback color.
    pub fn layer_color(&self, layer: u8) -> LayerColor {
        self.config
            .colors
            .get(layer as usize)
            .copied()
            .unwrap_or(self.config.fallback)
    }

    pub fn config(&self) -> &LayerIndicatorConfig {
        &self.config
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }
}

//! Callbacks invoked by the keyboard host.
use core::marker::PhantomData;

use crate::action::KeyAction;
use crate::config::CharybdisConfig;
use crate::layer::LayerState;
use crate::light::RgbMatrixDriver;
#[cfg(feature = "rgb_matrix")]
use crate::light::LayerIndicator;
#[cfg(feature = "pointing")]
use crate::pointing::DragScroll;
use crate::pointing::PointerReport;

/// User hooks of the keyboard host.
///
/// Every hook runs to completion on the host's event loop. The default implementations pass
/// their input through untouched.
pub trait KeyboardHooks {
    /// Called once, after the keyboard is initialized
    fn keyboard_post_init(&mut self) {}

    /// Called on every change of the active layers. Returns the state that the host applies.
    fn layer_state_set(&mut self, state: LayerState) -> LayerState {
        state
    }

    /// Called on every key transition before the action is processed.
    /// Returns `false` to stop the host from processing the action.
    fn process_record(&mut self, _action: KeyAction, _pressed: bool) -> bool {
        true
    }

    /// Called on every pointing device poll, right before the report is sent
    fn pointing_device_task(&mut self, report: PointerReport) -> PointerReport {
        report
    }
}

/// Hooks of the Charybdis: layer indicator on the RGB matrix, drag-scroll on the trackball.
///
/// Each part is compiled in with its feature, `rgb_matrix` and `pointing` respectively.
pub struct CharybdisHooks<D: RgbMatrixDriver> {
    #[cfg(feature = "rgb_matrix")]
    indicator: LayerIndicator<D>,
    #[cfg(feature = "pointing")]
    drag_scroll: DragScroll,
    _driver: PhantomData<D>,
}

impl<D: RgbMatrixDriver> CharybdisHooks<D> {
    pub fn new(driver: D, config: &CharybdisConfig) -> Self {
        #[cfg(not(feature = "rgb_matrix"))]
        let _ = driver;
        #[cfg(not(any(feature = "rgb_matrix", feature = "pointing")))]
        let _ = config;
        Self {
            #[cfg(feature = "rgb_matrix")]
            indicator: LayerIndicator::new(driver, config.indicator),
            #[cfg(feature = "pointing")]
            drag_scroll: DragScroll::new(&config.pointing),
            _driver: PhantomData,
        }
    }

    #[cfg(feature = "rgb_matrix")]
    pub fn indicator(&self) -> &LayerIndicator<D> {
        &self.indicator
    }

    #[cfg(feature = "pointing")]
    pub fn drag_scroll(&self) -> &DragScroll {
        &self.drag_scroll
    }
}

impl<D: RgbMatrixDriver> KeyboardHooks for CharybdisHooks<D> {
    #[cfg(feature = "rgb_matrix")]
    fn keyboard_post_init(&mut self) {
        self.indicator.on_init();
    }

    #[cfg(feature = "rgb_matrix")]
    fn layer_state_set(&mut self, state: LayerState) -> LayerState {
        self.indicator.layer_state_set(state)
    }

    #[cfg(feature = "pointing")]
    fn process_record(&mut self, action: KeyAction, pressed: bool) -> bool {
        self.drag_scroll.process_record(action, pressed)
    }

    #[cfg(feature = "pointing")]
    fn pointing_device_task(&mut self, report: PointerReport) -> PointerReport {
        self.drag_scroll.pointing_device_task(report)
    }
}

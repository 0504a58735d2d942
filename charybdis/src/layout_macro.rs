/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::A))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::$k))
    };
}

/// Create a normal key with modifier action
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::KeyWithModifier(
            $crate::keycode::KeyCode::$x,
            $m,
        ))
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::action::KeyAction::$a
    };
}

/// Create a layer activate action. `mo!(1)` and `mo!(Lower)` both activate layer 1 while held.
#[macro_export]
macro_rules! mo {
    ($x: literal) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerOn($x))
    };
    ($x: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerOn($crate::layer::Layer::$x as u8))
    };
}

/// Create a layer activate action or tap key(tap/hold)
#[macro_export]
macro_rules! lt {
    ($x: literal, $k: ident) => {
        $crate::action::KeyAction::TapHold(
            $crate::action::Action::Key($crate::keycode::KeyCode::$k),
            $crate::action::Action::LayerOn($x),
        )
    };
    ($x: ident, $k: ident) => {
        $crate::action::KeyAction::TapHold(
            $crate::action::Action::Key($crate::keycode::KeyCode::$k),
            $crate::action::Action::LayerOn($crate::layer::Layer::$x as u8),
        )
    };
}

/// Create a layer toggle action
#[macro_export]
macro_rules! tg {
    ($x: literal) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerToggle($x))
    };
    ($x: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerToggle($crate::layer::Layer::$x as u8))
    };
}

/// Create a shifted key
#[macro_export]
macro_rules! shifted {
    ($x: ident) => {
        $crate::wm!(
            $x,
            $crate::modifier::ModifierCombination::new_from(false, false, false, true, false)
        )
    };
}

/// Lay out the 56 keys of the Charybdis 4x6 over its 10 x 6 matrix.
///
/// Keys are given in visual order: four rows of twelve keys, then the upper thumb row
/// (three left, two right), then the lower thumb row (two left, one right).
///
/// Matrix rows 0..=4 are the left half, rows 5..=9 the right half. Right half columns are
/// mirrored, column 0 is the outer edge of each half. Matrix positions without a switch
/// are filled with `KeyAction::No`.
#[macro_export]
macro_rules! charybdis_4x6 {
    (
        $l00: expr, $l01: expr, $l02: expr, $l03: expr, $l04: expr, $l05: expr,
        $r00: expr, $r01: expr, $r02: expr, $r03: expr, $r04: expr, $r05: expr,
        $l10: expr, $l11: expr, $l12: expr, $l13: expr, $l14: expr, $l15: expr,
        $r10: expr, $r11: expr, $r12: expr, $r13: expr, $r14: expr, $r15: expr,
        $l20: expr, $l21: expr, $l22: expr, $l23: expr, $l24: expr, $l25: expr,
        $r20: expr, $r21: expr, $r22: expr, $r23: expr, $r24: expr, $r25: expr,
        $l30: expr, $l31: expr, $l32: expr, $l33: expr, $l34: expr, $l35: expr,
        $r30: expr, $r31: expr, $r32: expr, $r33: expr, $r34: expr, $r35: expr,
        $lt0: expr, $lt1: expr, $lt2: expr, $rt0: expr, $rt1: expr,
        $lt3: expr, $lt4: expr, $rt2: expr $(,)?
    ) => {
        [
            [$l00, $l01, $l02, $l03, $l04, $l05],
            [$l10, $l11, $l12, $l13, $l14, $l15],
            [$l20, $l21, $l22, $l23, $l24, $l25],
            [$l30, $l31, $l32, $l33, $l34, $l35],
            [$crate::action::KeyAction::No, $lt2, $lt3, $lt0, $lt1, $lt4],
            [$r05, $r04, $r03, $r02, $r01, $r00],
            [$r15, $r14, $r13, $r12, $r11, $r10],
            [$r25, $r24, $r23, $r22, $r21, $r20],
            [$r35, $r34, $r33, $r32, $r31, $r30],
            [
                $crate::action::KeyAction::No,
                $rt0,
                $crate::action::KeyAction::No,
                $rt1,
                $rt2,
                $crate::action::KeyAction::No,
            ],
        ]
    };
}

#[cfg(test)]
mod tests {
    use crate::action::{Action, KeyAction};
    use crate::keycode::KeyCode;
    use crate::layer::Layer;
    use crate::modifier::SHIFT;

    #[test]
    fn test_layer_macros() {
        assert_eq!(mo!(Lower), mo!(1));
        assert_eq!(mo!(Raise), KeyAction::Single(Action::LayerOn(Layer::Raise as u8)));
        assert_eq!(tg!(Pointer), KeyAction::Single(Action::LayerToggle(3)));
        assert_eq!(
            lt!(Pointer, Z),
            KeyAction::TapHold(Action::Key(KeyCode::Z), Action::LayerOn(3))
        );
        assert_eq!(lt!(Pointer, Slash), lt!(3, Slash));
    }

    #[test]
    fn test_shifted() {
        assert_eq!(
            shifted!(Grave),
            KeyAction::Single(Action::KeyWithModifier(KeyCode::Grave, SHIFT))
        );
    }
}

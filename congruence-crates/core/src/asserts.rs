//! Leveled assertion macros.
//!
//! Every assertion has a level; it is only checked when [`CONGRUENCE_ASSERT_LEVEL_DEFINITION`] is
//! at least that level. Expensive consistency checks use the higher levels so that they can be
//! switched on while debugging without slowing down regular runs.

pub const CONGRUENCE_ASSERT_LEVEL_DEFINITION: u8 = if cfg!(feature = "debug-checks") {
    CONGRUENCE_ASSERT_EXTREME
} else {
    CONGRUENCE_ASSERT_SIMPLE
};

pub const CONGRUENCE_ASSERT_SIMPLE: u8 = 1;
pub const CONGRUENCE_ASSERT_MODERATE: u8 = 2;
pub const CONGRUENCE_ASSERT_ADVANCED: u8 = 3;
pub const CONGRUENCE_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! congruence_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CONGRUENCE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CONGRUENCE_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! congruence_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CONGRUENCE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CONGRUENCE_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! congruence_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::CONGRUENCE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CONGRUENCE_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! congruence_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::CONGRUENCE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CONGRUENCE_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

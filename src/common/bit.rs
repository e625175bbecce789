/// Pin-word register value for a pin that reads high.
pub const ONES_32: u32 = 0xffff_ffff;

#[macro_export]
macro_rules! BIT {
    ( $x:expr ) => {
        1 << $x
    };
}

#[macro_export]
macro_rules! BIT_MASK_LEN {
    ( $x:expr ) => {
        $crate::BIT!($x) - 1
    };
}

// bits range: BIT_RNG(4, 8)  0b000111110000,  start from 4, end at 8 inclusive
#[macro_export]
macro_rules! BIT_RNG {
    ( $s:expr, $e:expr ) => {
        $crate::BIT_MASK_LEN!($e - $s + 1) << $s
    };
}

// index of the lowest set bit, 32 for an empty mask
#[macro_export]
macro_rules! BIT_LOW_BIT {
    ( $y:expr ) => {
        (($y) as u32).trailing_zeros()
    };
}

#[macro_export]
macro_rules! BM_SET {
    ( $x:expr, $mask:expr ) => {
        $x |= $mask
    };
}

#[macro_export]
macro_rules! BM_CLR {
    ( $x:expr, $mask:expr ) => {
        $x &= !($mask)
    };
}

#[macro_export]
macro_rules! BM_IS_SET {
    ( $x:expr, $mask:expr ) => {
        ($x & $mask) != 0
    };
}

/// Places `v` into the field described by mask `m`; extra pairs are OR'd in.
#[macro_export]
macro_rules! MASK_VAL {
    ($m:expr, $v:expr) => (
        (($v << $crate::BIT_LOW_BIT!($m)) & $m)
    );

    ($m:expr, $v:expr $(, $extra:expr)*) => (
        (($v << $crate::BIT_LOW_BIT!($m)) & $m) | $crate::MASK_VAL!($($extra),*)
    )
}

/// Extracts the field described by mask `m` from `v`.
#[macro_export]
macro_rules! GET_FLD {
    ($v:expr, $m:expr) => {
        (($v & $m) >> $crate::BIT_LOW_BIT!($m))
    };
}

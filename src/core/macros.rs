/******************************************\
|==========================================|
|          Macro: impl_enum_index          |
|==========================================|
\******************************************/

/// Generates index conversions for a fieldless `#[repr(u8)]` enum with a `NUM` constant.
///
/// It provides:
/// - `unsafe fn from_unchecked(index: u8) -> Self`: assumes `index < NUM`.
/// - `fn from_index(index: usize) -> Option<Self>`: checked counterpart.
/// - `const fn index(&self) -> usize`: the discriminant as `usize`.
#[macro_export]
macro_rules! impl_enum_index {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Converts primitive type u8 to ", stringify!($enum_name))]
            /// ## Safety
            /// - `index` must be smaller than `NUM`
            #[inline]
            pub const unsafe fn from_unchecked(index: u8) -> Self {
                debug_assert!((index as usize) < Self::NUM, "Index out of bounds");
                unsafe { std::mem::transmute(index) }
            }

            #[doc=concat!("Checked index to ", stringify!($enum_name), " conversion")]
            #[inline]
            pub const fn from_index(index: usize) -> Option<Self> {
                if index < Self::NUM {
                    Some(unsafe { Self::from_unchecked(index as u8) })
                } else {
                    None
                }
            }

            #[doc=concat!("Converts ", stringify!($enum_name), " to primitive type usize")]
            #[inline]
            pub const fn index(&self) -> usize {
                *self as usize
            }
        }
    };
}

/******************************************\
|==========================================|
|          Macro: impl_enum_iter           |
|==========================================|
\******************************************/

/// Generates an `iter()` method over every variant, in discriminant order.
/// Requires the methods generated by [`impl_enum_index`].
#[macro_export]
macro_rules! impl_enum_iter {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Returns iterator for all the elements in ", stringify!($enum_name))]
            pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
                (0..Self::NUM as u8).map(|i| unsafe { Self::from_unchecked(i) })
            }
        }
    };
}

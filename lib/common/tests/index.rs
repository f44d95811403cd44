use tessel_common::{addressable, ArrayIndex};

/// Ensure that every unsigned index type with width <= `size_of::<usize>()` is an [ArrayIndex]
#[test]
#[allow(clippy::just_underscores_and_digits)]
fn index_widths() {
    fn check<Idx: ArrayIndex>() -> Option<Idx> {
        Idx::try_from_usize(200)
    }
    let _8 = check::<u8>();
    let _16 = check::<u16>();
    #[cfg(not(target_pointer_width = "16"))]
    {
        // size_of::<usize>() > 16
        let _32 = check::<u32>();
        #[cfg(not(target_pointer_width = "32"))]
        {
            // size_of::<usize>() > 32
            let _64 = check::<u64>();
        }
    }
    let _size = check::<usize>();
}

#[test]
fn narrowing() {
    assert_eq!(u8::try_from_usize(255), Some(255u8));
    assert_eq!(u8::try_from_usize(256), None);
    assert_eq!(u16::try_from_usize(65_536), None);
    assert_eq!(i8::try_from_usize(128), None);
    assert_eq!(42u16.as_usize(), 42);
}

#[test]
fn addressable_lengths() {
    assert!(addressable::<u8>(0));
    assert!(addressable::<u8>(256));
    assert!(!addressable::<u8>(257));
    assert!(addressable::<u16>(65_536));
    assert!(!addressable::<u16>(65_537));
    assert!(addressable::<u32>(1 << 20));
}

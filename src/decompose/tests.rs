// src/decompose/tests.rs

use super::*;
use crate::register::{Reg128, Reg256, Reg512};
use test_log::test;

// Small deterministic generator so the property checks cover varied bit
// patterns without a randomness dependency.
fn splitmix(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn sample_words(seed: u64, n: usize) -> Vec<u64> {
    let mut state = seed;
    let mut words: Vec<u64> = (0..n).map(|_| splitmix(&mut state)).collect();
    // Make sure edge patterns show up in every sample.
    words[0] = u64::MAX;
    if n > 1 {
        words[1] = 0x8000_0000_8000_8080;
    }
    words
}

#[test]
fn test_u8_lane_boundary_scenario() {
    let reg = Reg128::new([0x0102030405060708, 0x090A0B0C0D0E0F10]);
    let set = decompose(&reg);
    assert_eq!(
        set.by_kind(LaneKind::U8).values,
        LaneValues::U8(vec![
            0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01, 0x10, 0x0F, 0x0E, 0x0D, 0x0C, 0x0B,
            0x0A, 0x09,
        ])
    );
    assert_eq!(
        set.by_kind(LaneKind::U64).values,
        LaneValues::U64(vec![0x0102030405060708, 0x090A0B0C0D0E0F10])
    );
}

#[test]
fn test_all_ones_low_word_scenario() {
    let set = decompose(&Reg128::new([u64::MAX, 0]));
    let mut expected_i8 = vec![-1i8; 8];
    expected_i8.extend([0i8; 8]);
    assert_eq!(set.by_kind(LaneKind::I8).values, LaneValues::I8(expected_i8));
    assert_eq!(
        set.by_kind(LaneKind::U32).values,
        LaneValues::U32(vec![0xFFFF_FFFF, 0xFFFF_FFFF, 0, 0])
    );
    // Signed formatting applies at every lane width, not just 8 bits.
    assert_eq!(set.by_kind(LaneKind::I16).values, LaneValues::I16(vec![-1, -1, -1, -1, 0, 0, 0, 0]));
    assert_eq!(set.by_kind(LaneKind::I32).values, LaneValues::I32(vec![-1, -1, 0, 0]));
    assert_eq!(set.by_kind(LaneKind::I64).values, LaneValues::I64(vec![-1, 0]));
}

#[test]
fn test_512_top_word_scenario() {
    let mut words = [0u64; 8];
    words[7] = 1;
    let set = decompose(&Reg512::new(words));
    assert_eq!(
        set.by_kind(LaneKind::U64).values,
        LaneValues::U64(vec![0, 0, 0, 0, 0, 0, 0, 1])
    );
    let i64_lane = set.by_kind(LaneKind::I64);
    assert!(i64_lane.name.ends_with("x8"));
    assert_eq!(i64_lane.name, "i64x8");
}

#[test]
fn test_fixed_order_and_names() {
    let set = decompose(&Reg256::new([0; 4]));
    assert_eq!(set.len(), 8);
    let names: Vec<&str> = set.iter().map(|lane| lane.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["u8x32", "i8x32", "u16x16", "i16x16", "u32x8", "i32x8", "u64x4", "i64x4"]
    );
}

#[test]
fn test_element_counts_for_every_width() {
    for width in RegisterWidth::ALL {
        let words = vec![0u64; width.words()];
        let set = decompose_as(width, &words).unwrap();
        assert_eq!(set.width(), width);
        for kind in LaneKind::ALL {
            let expected = (width.bits() / kind.bit_width()) as usize;
            assert_eq!(set.by_kind(kind).len(), expected, "{:?} {:?}", width, kind);
        }
    }
}

#[test]
fn test_every_lane_reconstructs_the_register() {
    for (seed, width) in RegisterWidth::ALL.into_iter().enumerate() {
        let words = sample_words(seed as u64 + 1, width.words());
        let set = decompose_as(width, &words).unwrap();
        for lane in &set {
            assert_eq!(lane.values.to_words(), words, "{} did not round-trip", lane.name);
        }
    }
}

#[test]
fn test_signed_and_unsigned_lanes_share_bit_patterns() {
    let words = sample_words(99, 8);
    let set = decompose_words(&words).unwrap();
    for kind in LaneKind::ALL.into_iter().filter(|k| !k.is_signed()) {
        let unsigned = &set.by_kind(kind).values;
        let signed = &set.by_kind(kind.counterpart()).values;
        assert!(unsigned.patterns().eq(signed.patterns()), "{} patterns differ", kind);
    }
}

#[test]
fn test_ff_renders_per_signedness() {
    let set = decompose(&Reg128::new([0xFF, 0]));
    assert_eq!(set.by_kind(LaneKind::U8).values.render(0).as_deref(), Some("255"));
    assert_eq!(set.by_kind(LaneKind::I8).values.render(0).as_deref(), Some("-1"));
    assert_eq!(set.by_kind(LaneKind::I16).values.render(0).as_deref(), Some("255"));
}

#[test]
fn test_decompose_is_deterministic() {
    let reg = Reg256::new([1, 2, 3, 0xDEAD_BEEF_CAFE_F00D]);
    assert_eq!(decompose(&reg), decompose(&reg));
}

#[test]
fn test_positional_lookup_past_end_is_none() {
    for width in RegisterWidth::ALL {
        let set = decompose_as(width, &vec![0; width.words()]).unwrap();
        assert!(set.get(7).is_some());
        assert!(set.get(8).is_none());
        assert!(set.get(100).is_none());
    }
}

#[test]
fn test_decompose_words_selects_width() {
    assert_eq!(decompose_words(&[0; 2]).unwrap().width(), RegisterWidth::W128);
    assert_eq!(decompose_words(&[0; 4]).unwrap().width(), RegisterWidth::W256);
    assert_eq!(decompose_words(&[0; 8]).unwrap().width(), RegisterWidth::W512);
}

#[test]
fn test_decompose_words_invalid_lengths() {
    assert_eq!(
        decompose_words(&[0; 3]),
        Err(LaneError::InvalidWidth { expected: 4, actual: 3 })
    );
    assert_eq!(
        decompose_words(&[]),
        Err(LaneError::InvalidWidth { expected: 2, actual: 0 })
    );
    assert_eq!(
        decompose_words(&[0; 9]),
        Err(LaneError::InvalidWidth { expected: 8, actual: 9 })
    );
}

#[test]
fn test_decompose_as_rejects_mismatched_width() {
    let err = decompose_as(RegisterWidth::W512, &[0; 4]).unwrap_err();
    assert_eq!(err, LaneError::InvalidWidth { expected: 8, actual: 4 });
    assert_eq!(err.to_string(), "expected 8 64-bit words, got 4");
}

#[test]
fn test_lane_view_aliases() {
    assert_eq!(LaneView128::WIDTH, RegisterWidth::W128);
    assert_eq!(LaneView256::WIDTH, RegisterWidth::W256);
    assert_eq!(LaneView512::WIDTH, RegisterWidth::W512);

    let reg = Reg256::new([5, 6, 7, 8]);
    assert_eq!(LaneView256::decompose(&reg), decompose(&reg));
    assert_eq!(LaneView256::decompose_words(&[5, 6, 7, 8]).unwrap(), decompose(&reg));
    assert!(LaneView128::decompose_words(&[5, 6, 7, 8]).is_err());
}

#[test]
fn test_decompose_batch_preserves_order() {
    let regs = [Reg128::new([1, 0]), Reg128::new([2, 0]), Reg128::new([3, 0])];
    let sets = decompose_batch(&regs);
    assert_eq!(sets.len(), 3);
    for (set, reg) in sets.iter().zip(regs.iter()) {
        assert_eq!(set, &decompose(reg));
    }
}

#[test]
fn test_decompose_across_threads() {
    let reg = Reg512::new([0x0123_4567_89AB_CDEF; 8]);
    let expected = decompose(&reg);
    let handles: Vec<_> = (0..4).map(|_| std::thread::spawn(move || decompose(&reg))).collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_extract_masks_to_lane_width() {
    let words = [u64::MAX, 0x8000_0000_0000_0001];
    for kind in LaneKind::ALL {
        let patterns: Vec<u64> = extract(&words, kind).collect();
        assert_eq!(patterns.len(), kind.count(RegisterWidth::W128));
        assert!(patterns.iter().all(|&p| p & !kind.mask() == 0), "{} leaked bits", kind);
        assert_eq!(patterns[0], kind.mask());
    }
}

//! Golden Vector Tests - Known-Answer Output per Family
//!
//! Every family is pinned against reference output computed from an
//! independent implementation. A failure here means the draw path of a
//! family changed, which silently breaks every saved seed in the wild.
//!
//! Critical invariants tested:
//! - Exact u64 output for each family from a fixed entropy block
//! - Narrowed u32 output follows the low-half-first carry rule
//! - Double output follows each family's mantissa construction

use prbg_core_rs::{Algorithm, Generator};

// ============================================================================
// Test Helpers
// ============================================================================

/// Shared entropy block. Each family takes the prefix it needs.
const ENTROPY: [u64; 8] = [
    0x0123_4567_89AB_CDEF,
    0x1122_3344_5566_7788,
    0xDEAD_BEEF_CAFE_F00D,
    0x0F1E_2D3C_4B5A_6978,
    0x1234_5678_1234_5678,
    0x9E37_79B9_7F4A_7C15,
    0xABCD_EF01_2345_6789,
    0x5555_AAAA_5555_AAAA,
];

fn seeded(algorithm: Algorithm) -> Generator {
    Generator::seeded(algorithm, &ENTROPY[..algorithm.min_seed_words()])
        .expect("entropy prefix covers the minimum")
}

fn assert_u64s(algorithm: Algorithm, expected: &[u64]) {
    let mut gen = seeded(algorithm);
    for (i, &want) in expected.iter().enumerate() {
        assert_eq!(gen.next_u64().unwrap(), want, "{} u64 draw {}", algorithm, i);
    }
}

fn assert_u32s(algorithm: Algorithm, expected: &[u32]) {
    let mut gen = seeded(algorithm);
    for (i, &want) in expected.iter().enumerate() {
        assert_eq!(gen.next_u32().unwrap(), want, "{} u32 draw {}", algorithm, i);
    }
}

/// Doubles are compared by bit pattern, not by approximate value.
fn assert_doubles(algorithm: Algorithm, expected_bits: &[u64]) {
    let mut gen = seeded(algorithm);
    for (i, &want) in expected_bits.iter().enumerate() {
        let got = gen.next_double().unwrap();
        assert_eq!(
            got.to_bits(),
            want,
            "{} double draw {} was {}",
            algorithm,
            i,
            got
        );
    }
}

// ============================================================================
// Per-Family Known Answers
// ============================================================================

#[test]
fn golden_mt19937() {
    assert_u64s(
        Algorithm::Mt19937,
        &[
            0xE58D_45A7_5936_3FC1,
            0x64A9_486C_470C_2E3D,
            0xDCE1_2135_82B1_AE25,
            0x319A_22B3_BE61_AAA9,
        ],
    );
    assert_u32s(
        Algorithm::Mt19937,
        &[0xE58D_45A7, 0x5936_3FC1, 0x64A9_486C, 0x470C_2E3D, 0xDCE1_2135],
    );
    assert_doubles(
        Algorithm::Mt19937,
        &[0x3FEC_B1A8_B564_D8FF, 0x3FD9_2A52_1A38_6170, 0x3FEB_9C24_260A_C6B8],
    );
}

#[test]
fn golden_dsfmt() {
    assert_u64s(
        Algorithm::Dsfmt,
        &[
            0x7308_CB48_8782_1302,
            0xCDA6_E0D8_500A_F8D8,
            0x6F7E_0EAE_09D2_B554,
            0x02E7_B567_4EE0_6A43,
        ],
    );
    assert_u32s(
        Algorithm::Dsfmt,
        &[0x7308_CB48, 0x8782_1302, 0xCDA6_E0D8, 0x500A_F8D8, 0x6F7E_0EAE],
    );
    assert_doubles(
        Algorithm::Dsfmt,
        &[0x3FE3_709E_E611_9690, 0x3FE3_A6D7_0F04_2604, 0x3FC0_322E_6D37_06C0],
    );
}

#[test]
fn golden_pcg32() {
    assert_u64s(
        Algorithm::Pcg32,
        &[
            0x32D1_2E91_2140_4E7E,
            0x0DA1_5E7F_53A2_3B65,
            0xF554_859F_E2DC_21C8,
            0xBCC8_AFE3_4393_1B6C,
        ],
    );
    assert_u32s(
        Algorithm::Pcg32,
        &[0x32D1_2E91, 0x2140_4E7E, 0x0DA1_5E7F, 0x53A2_3B65, 0xF554_859F],
    );
    assert_doubles(
        Algorithm::Pcg32,
        &[0x3FC9_6897_4214_04E4, 0x3FAB_42BC_D4E8_8ED0, 0x3FEE_AA90_B38B_7087],
    );
}

#[test]
fn golden_pcg64() {
    assert_u64s(
        Algorithm::Pcg64,
        &[
            0xF1B1_2F1D_9C1B_90D3,
            0x7D0F_5671_9035_C339,
            0xE4C1_363B_3020_BF05,
            0x9540_3A20_89D7_FD2F,
        ],
    );
    assert_u32s(
        Algorithm::Pcg64,
        &[0x9C1B_90D3, 0xF1B1_2F1D, 0x9035_C339, 0x7D0F_5671, 0x3020_BF05],
    );
    assert_doubles(
        Algorithm::Pcg64,
        &[0x3FEE_3625_E3B3_8372, 0x3FDF_43D5_9C64_0D70, 0x3FEC_9826_C766_0417],
    );
}

#[test]
fn golden_philox() {
    assert_u64s(
        Algorithm::Philox,
        &[
            0x8481_F163_6CBD_2C30,
            0xCA80_32F6_CF8A_F46A,
            0x915F_93BE_5100_5707,
            0x6A25_F176_BBFB_627A,
        ],
    );
    assert_u32s(
        Algorithm::Philox,
        &[0x6CBD_2C30, 0x8481_F163, 0xCF8A_F46A, 0xCA80_32F6, 0x5100_5707],
    );
    assert_doubles(
        Algorithm::Philox,
        &[0x3FE0_903E_2C6D_97A5, 0x3FE9_5006_5ED9_F15E, 0x3FE2_2BF2_77CA_200A],
    );
}

#[test]
fn golden_threefry() {
    assert_u64s(
        Algorithm::Threefry,
        &[
            0xF89D_B7E4_9A56_CAFD,
            0xA43B_9308_EE6A_FA94,
            0xB8E6_6662_26B2_7D45,
            0xB93A_6AEF_FB5A_81E1,
        ],
    );
    assert_u32s(
        Algorithm::Threefry,
        &[0x9A56_CAFD, 0xF89D_B7E4, 0xEE6A_FA94, 0xA43B_9308, 0x26B2_7D45],
    );
    assert_doubles(
        Algorithm::Threefry,
        &[0x3FEF_13B6_FC93_4AD9, 0x3FE4_8772_611D_CD5F, 0x3FE7_1CCC_CC44_D64F],
    );
}

#[test]
fn golden_xoshiro256() {
    assert_u64s(
        Algorithm::Xoshiro256,
        &[
            0x8181_8181_8181_757A,
            0x2FA5_EFF3_820A_5124,
            0xF99A_4988_54F7_45AD,
            0x5CC2_BE4C_605A_FD29,
        ],
    );
    assert_u32s(
        Algorithm::Xoshiro256,
        &[0x8181_757A, 0x8181_8181, 0x820A_5124, 0x2FA5_EFF3, 0x54F7_45AD],
    );
    assert_doubles(
        Algorithm::Xoshiro256,
        &[0x3FE0_3030_3030_302E, 0x3FC7_D2F7_F9C1_0528, 0x3FEF_3349_310A_9EE8],
    );
}

#[test]
fn golden_xoshiro512() {
    // The first two draws coincide with xoshiro256 because both emit
    // from s[1] until the larger lag rotates different words in.
    assert_u64s(
        Algorithm::Xoshiro512,
        &[
            0x8181_8181_8181_757A,
            0x2FA5_EFF3_820A_5124,
            0x7B75_9375_8781_6DFD,
            0x4691_3EA8_C7E1_A81A,
        ],
    );
    assert_u32s(
        Algorithm::Xoshiro512,
        &[0x8181_757A, 0x8181_8181, 0x820A_5124, 0x2FA5_EFF3, 0x8781_6DFD],
    );
    assert_doubles(
        Algorithm::Xoshiro512,
        &[0x3FE0_3030_3030_302E, 0x3FC7_D2F7_F9C1_0528, 0x3FDE_DD64_DD61_E05A],
    );
}

#[test]
fn golden_sfc64() {
    assert_u64s(
        Algorithm::Sfc64,
        &[
            0x9F57_1BA7_EE20_67BB,
            0x053A_5A2C_E54F_394D,
            0x6C82_17C9_D277_CF66,
            0xA55C_587B_2620_64F0,
        ],
    );
    assert_u32s(
        Algorithm::Sfc64,
        &[0xEE20_67BB, 0x9F57_1BA7, 0xE54F_394D, 0x053A_5A2C, 0xD277_CF66],
    );
    assert_doubles(
        Algorithm::Sfc64,
        &[0x3FE3_EAE3_74FD_C40C, 0x3F94_E968_B395_3CE0, 0x3FDB_2085_F274_9DF2],
    );
}

#[test]
fn golden_jsf64() {
    assert_u64s(
        Algorithm::Jsf64,
        &[
            0x3695_13D0_E9EE_D540,
            0x461F_AE31_9FD7_4EFA,
            0x15B0_45DD_37EA_7FAA,
            0xCFFF_BD3A_1EA4_71A4,
        ],
    );
    assert_u32s(
        Algorithm::Jsf64,
        &[0xE9EE_D540, 0x3695_13D0, 0x9FD7_4EFA, 0x461F_AE31, 0x37EA_7FAA],
    );
    assert_doubles(
        Algorithm::Jsf64,
        &[0x3FCB_4A89_E874_F768, 0x3FD1_87EB_8C67_F5D2, 0x3FB5_B045_DD37_EA78],
    );
}

#[test]
fn golden_gjrand() {
    assert_u64s(
        Algorithm::Gjrand,
        &[
            0x0597_564F_086A_CB0B,
            0x2408_9A39_2D99_9BC5,
            0xC2B6_8F2D_2574_3D75,
            0xF705_C6FA_2B5E_1E86,
        ],
    );
    assert_u32s(
        Algorithm::Gjrand,
        &[0x086A_CB0B, 0x0597_564F, 0x2D99_9BC5, 0x2408_9A39, 0x2574_3D75],
    );
    assert_doubles(
        Algorithm::Gjrand,
        &[0x3F96_5D59_3C21_AB20, 0x3FC2_044D_1C96_CCCC, 0x3FE8_56D1_E5A4_AE87],
    );
}

// ============================================================================
// Multi-Word Seeding
// ============================================================================

#[test]
fn golden_mt19937_two_word_seed() {
    // Extra entropy words beyond the minimum feed the key-mixing init,
    // so a two-word seed lands on a different orbit than either word alone.
    let mut gen = Generator::seeded(Algorithm::Mt19937, &[0x1234, 0x5678]).unwrap();
    let expected: [u32; 5] = [
        0x9534_D3A9, 0x0B72_1601, 0xF5EE_4B92, 0xCCDA_E1F1, 0x2217_E7D9,
    ];
    for (i, &want) in expected.iter().enumerate() {
        assert_eq!(gen.next_u32().unwrap(), want, "mt19937 pair-seed draw {}", i);
    }
}

//! Precomputed jump polynomials for the MT19937 recurrence, reduced
//! modulo its minimal polynomial (degree 19937 plus the transient part of
//! the 19968-bit window representation).

/// z^(2^128) mod p: one jump unit of 2^128 draws.
pub(super) const JUMP_POLY: [u64; 313] = [
    0x0000_0000_0000_0000, 0xA823_F8E5_8827_9BB6, 0x041F_2259_26D8_3E59, 0x8B52_1777_E7FD_BB15,
    0xBF28_12D5_48B5_E756, 0x0B48_49AA_E4B0_ADB9, 0xE96D_39CE_3E92_8B83, 0x09EA_F2E8_AF61_31D3,
    0xC181_4C7B_3354_8456, 0xFEBD_07BC_893A_7C83, 0x5147_DCBF_01BD_8267, 0x9AFE_F574_E2A6_7DE6,
    0xF0D3_DECA_B833_4D09, 0xD884_703B_5561_FD58, 0xB39B_8F42_EF5C_803B, 0xD61C_FED3_20DF_B761,
    0x4741_6177_CF5F_3E5B, 0x8EA9_CFAB_8E84_42E9, 0x3B1A_DBED_585D_0EC0, 0xF0F7_D618_8288_5DA6,
    0xCA3E_E37D_B2BB_3BFC, 0x870E_D969_81C9_E659, 0xBECC_8C23_4B4A_C3DE, 0x73CD_A5ED_7768_3B21,
    0x86FD_956C_56BC_FCBC, 0x4ECE_C6E1_2219_3BA8, 0x1D85_9D9A_10CE_E717, 0x9D97_AED5_CA6A_E0A2,
    0xE75C_9519_9E46_4218, 0xEAF2_59EB_AB64_9486, 0x7F82_82D4_73B5_E184, 0x192D_DF99_C8CA_CD44,
    0x5288_B589_D6BE_8546, 0x9819_557F_B4F2_6CA7, 0x03E7_3D28_2005_70EB, 0x78A1_14C9_264A_CC04,
    0x42EE_E897_95F0_FB7B, 0x67E7_51E8_ABCC_80C2, 0x740E_87EF_1330_CC85, 0xC556_4186_1F60_5DBA,
    0x1BA1_158F_3EE3_D205, 0x1F6A_A87D_2C4C_DB89, 0x878B_3223_9B5E_9A3A, 0x7C02_2CBF_88F8_C3ED,
    0x1D08_F055_975C_6E75, 0xD6DE_80E9_C8A0_8242, 0x4B92_CE4C_A1CF_0B40, 0x60F4_1830_4055_EFFE,
    0xBECF_F8B2_DD23_EE6D, 0xA436_9751_DFAC_7287, 0x69CE_B112_A28B_C89D, 0xF53B_DBED_A20E_0174,
    0xA414_9D1C_CFBA_4997, 0x32C7_2905_D5C6_6FC3, 0x8311_A927_D2DF_2361, 0xC588_F396_F213_A9B5,
    0x2C61_8D4E_9D61_16BB, 0x0E47_1335_B344_20D1, 0xCBDC_A6F3_5191_135F, 0xBE28_3395_7CB7_8166,
    0x20C0_D096_03A2_436A, 0xE840_5452_CC73_3C5F, 0x9B45_B903_49D7_8DC8, 0x67EB_90E3_0AA4_C4C8,
    0x1040_5B31_F32B_13F0, 0x641E_AE81_748B_E0AD, 0x80B5_5358_6D6A_AFB6, 0xF1FA_779A_72B5_5832,
    0x4BE9_BF36_4385_2374, 0x2835_9472_4FA6_0B27, 0x527D_C1A9_61E7_AAF1, 0xBCAD_693F_834E_8087,
    0x9517_1796_C9CA_3BF6, 0xB7D3_6775_9F41_164A, 0x61FF_82C7_BDE6_CF3B, 0x47DF_D69F_F477_31E0,
    0xD708_247F_D90D_6E15, 0xAD79_9628_5FE9_5113, 0xFCFB_0CE2_C627_F9F2, 0x4B00_3380_0F24_41CE,
    0x50FA_780B_7216_1100, 0xB71C_A8B7_1F72_B11A, 0x5475_BACE_FFAB_42FD, 0x356E_EF78_91C2_8B39,
    0xDC80_086D_1441_C9C3, 0xB5C3_0EC9_96C4_7491, 0xA932_1ADD_A254_E42D, 0xC30B_EE5B_963A_3612,
    0x514F_D40F_035C_75C7, 0x8926_E38F_2E9E_9C80, 0x8977_54D8_71B6_9592, 0x5BC0_6174_3CDD_DE5E,
    0xBEBB_80A7_AD52_0904, 0xD91D_5D33_5CC2_84D4, 0x1109_0E41_8C6B_A748, 0x462C_FFBC_33BB_9929,
    0xEFC6_8605_C42A_508E, 0x230E_6CD9_602A_3A14, 0x49B8_EB31_26C6_F9F4, 0x16A8_DA2C_B401_4749,
    0x1910_BB39_47B5_92CA, 0xAD0C_A518_3CED_6A5B, 0x65FE_6379_9346_1DCB, 0xECC5_CA0F_741B_1C6B,
    0x0BDD_C87D_FD1A_431B, 0x7D98_20AC_5D69_4024, 0x716C_1AE1_FFEB_5538, 0x04F8_ED86_13CF_FB2F,
    0x1B32_EB97_D777_F039, 0x893D_A4EE_87C1_A95F, 0x9651_18D4_C235_F16C, 0x7175_9F90_2E79_94BA,
    0x8912_68A5_BAE6_A478, 0x4D16_3861_E7CF_46B4, 0xCA68_8C0E_0B2C_5681, 0xB863_46B5_3670_2E5F,
    0x5EC6_0137_55E3_11BB, 0x1C00_8C60_CCA1_879B, 0x9567_9097_8D5F_3845, 0x4D79_A2E8_D52D_4C9C,
    0x02B4_C095_9376_70C7, 0x789B_F7B2_FEC1_96E0, 0xAB1D_0C25_81FE_8F87, 0xB601_BB28_048F_776D,
    0x0973_F96E_9600_4A47, 0x4A9F_A5E9_EC94_8CED, 0x5438_4AD4_B0B6_F662, 0x8167_0A57_A350_C0EE,
    0x1D9D_3497_A85E_DDC1, 0xB974_9667_B575_D5C5, 0xAA85_3838_738D_FC2A, 0xA53A_92A4_00CC_C442,
    0xBDC8_CFA2_CFAF_5A3E, 0x529F_EE9D_0988_4265, 0x966C_709E_A4D7_F84F, 0xD142_65D4_4C80_BC42,
    0xB23C_2AED_F5EB_E7F3, 0xB7D4_7C42_8045_23F1, 0x7337_0568_A7CB_0AA9, 0x6615_8A1E_06D9_0AC5,
    0xC4A3_898C_9805_C7AD, 0x7FC5_3690_7890_ADDE, 0xC542_7E08_85C3_9B20, 0x2FBA_05ED_C0C8_64F8,
    0x210A_D2BF_C365_017A, 0x609C_A003_8FFB_95EA, 0x84E6_63C4_8E6C_4F72, 0x753C_1CA8_3C11_0562,
    0xADD8_583A_8700_B723, 0xCEF1_123F_7E4D_A8A4, 0xF075_B8B8_ED84_973C, 0xF00A_255A_0CEA_C5C9,
    0x7E77_E0DA_DFCD_487C, 0x0071_CB97_8BE5_750C, 0xEFE8_586F_5608_27FE, 0xCDAD_2C78_BC98_C7AB,
    0x2E31_6C30_9499_4F61, 0x2E84_89F9_5EB5_BB74, 0x1AE3_F3BA_FA0C_B83D, 0x61E0_E6BE_8230_9E37,
    0x11B5_9C56_0422_260E, 0x9CD5_ECAA_E4F2_0C9C, 0x9BC7_2523_F866_E2DA, 0x816F_533C_52C4_1667,
    0xA0DB_FF9E_47A3_235E, 0xEA9C_A5A3_0C62_A756, 0xC512_67E9_DE07_61A6, 0x5C98_50E8_652A_0696,
    0x1C4B_1E86_D52C_1609, 0xBC47_FCDF_9065_AE24, 0x9C77_5B9C_DFCA_6259, 0xBB03_33EB_66F2_E869,
    0xC4BE_33DD_2A73_A1A1, 0x78FC_8E7E_9456_D058, 0x5BAB_F52E_491E_46E6, 0x3BDA_688B_7C22_640B,
    0x1F9D_F507_DB3D_707A, 0xB15E_0471_0E36_8E49, 0xB468_6DF0_617C_6EAC, 0x397D_DD73_D27E_023B,
    0x40F3_61BF_2250_92A1, 0xC480_A1C5_749E_7858, 0x35C6_EE0B_602C_BFF0, 0xFFA6_92B6_D231_71E4,
    0x458E_E284_2819_01D0, 0xD5AE_DBD4_F94B_2D95, 0x27CD_7C2B_196D_7F13, 0x0990_3450_7575_914B,
    0xAE05_6412_A881_93AC, 0xD8FE_916F_3C5C_B955, 0xD18C_CB5E_AEC2_89DF, 0x6801_57F2_0EEF_81BF,
    0xC23F_0F66_9E1E_6D8D, 0x6CE6_C5A3_8E3B_47CF, 0x7967_6F10_50D0_B6F2, 0xE8AA_A4E3_C795_EBC1,
    0x6A06_B25C_7297_5636, 0x0407_54A1_DA1D_3580, 0x3CDC_34E2_00AD_717C, 0x3365_1B19_4C92_BCBF,
    0xCB16_B681_AAA1_58D0, 0x3EA5_90D2_2387_5CF7, 0xAAD7_8A6E_E8AC_9C3B, 0x8A94_4EFC_549F_8626,
    0xEDF8_F12B_8594_145A, 0xCE84_E955_EB4A_4AFF, 0x94A3_F6CC_CED5_4147, 0xBD2D_687B_153E_A03A,
    0x86BB_0A63_35C8_E2FF, 0x6B24_8289_409B_507D, 0xB628_0435_52C1_8EEF, 0xC75F_2399_79C4_A188,
    0x7F5B_A797_1CC7_7BF0, 0xE5FB_DE52_061B_8419, 0x57E9_43AA_A1F1_2B4F, 0xF856_F195_9B1E_77EB,
    0x6DEC_F616_8C04_FF21, 0x6090_54B4_532E_4242, 0x3E3C_8561_5E8D_5619, 0x2491_156C_39C6_B81C,
    0x046C_5A77_3B03_B4A6, 0x9398_66F6_EDD5_1BD7, 0x6FA1_0FC8_9E99_1A70, 0x6B00_7B6B_5D22_68D8,
    0x2309_0B84_9E21_C563, 0xBBAC_1331_BA01_6830, 0x9873_C32A_F4BE_DE58, 0x97F3_1829_9D12_C2DD,
    0xD4E0_5C1C_E1CB_389F, 0xCD33_873C_0125_5764, 0xFAEC_F5A4_202C_0DDF, 0x53D0_1475_CEA1_124E,
    0xA3D9_87B8_1F88_7DD1, 0xBAD0_4278_83E7_FE48, 0xD20D_1EB8_736B_0A3E, 0x0CEB_694D_7C67_8A6D,
    0xA2F2_467E_9EA6_F249, 0x0E5C_217E_FA99_35B5, 0xEE07_F456_7C00_6834, 0x9169_6733_8E51_0006,
    0xEE5E_B245_781D_188D, 0x78AC_8879_DCCD_36BD, 0x297E_DB80_8C1F_D942, 0x4E5A_823F_E955_339B,
    0x25EF_8B51_FD8E_8747, 0xA757_1F6F_A8A7_3925, 0xBE8E_7601_7A7B_3BB8, 0x3C1E_511A_EA66_0549,
    0x5D03_2045_C7A1_931A, 0x4477_9AC3_1985_17FE, 0x3112_BC43_5061_B55A, 0x87FE_9735_6174_CD48,
    0x8C22_17FF_E1D8_6BB0, 0x635D_7138_7D05_A538, 0x9B65_73CA_1B2F_17E9, 0x637D_F225_63EC_D3B2,
    0x6BEB_8AFA_1B50_126D, 0x1CDF_A6AA_75E8_331D, 0x39BC_3B9F_4065_19A2, 0xDDA3_66C2_5518_B7CC,
    0xB413_2090_232F_B36A, 0x5351_72E3_92D0_C3C5, 0xD622_A0A9_095F_FCCB, 0xD4A1_1CA8_1FB8_51BC,
    0x407D_D59F_4837_7DD1, 0xA848_6626_92E1_70B6, 0x6842_994D_8667_E025, 0x1EEC_4C73_DA3D_2484,
    0x3F01_3576_568A_6C90, 0xDF2B_7DA8_85EE_A735, 0x1D75_E172_22E0_92A2, 0x6561_06ED_010D_E880,
    0x2BF7_A654_B078_A231, 0x7C51_044D_4149_2133, 0x6366_0519_EFA6_2C49, 0x0E62_955F_1701_DD8D,
    0xFCB6_6A13_180D_B0E9, 0xDFD5_9B72_5D99_0A12, 0xD019_241D_E7C4_D154, 0x902E_97A0_A8F1_1D44,
    0x6D80_3DE9_4B7C_6A7B, 0x706D_2495_3B56_B34D, 0x6D2A_52A1_7D8B_D878, 0x3E6C_C58A_88C6_ACF8,
    0x61F9_0CDE_E3BB_AFB3, 0xA092_C12F_67D6_CD2B, 0x72C5_B57F_38C8_C85C, 0x53F7_82F4_B97F_2B0A,
    0x7C86_2307_0919_82EB, 0xEDC6_266D_B35C_C8F8, 0x14B7_F688_CA67_E7FE, 0x52EE_5E8A_BB5F_5F7B,
    0xB994_F39A_C47D_A030, 0x87D3_1F39_0DF2_B627, 0x0E38_EB37_12CE_5FD4, 0x8E53_F472_4032_85D9,
    0x7640_41AA_E79E_435A, 0xB359_BD5E_29A3_EE70, 0x7F58_F46B_4613_3047, 0x1657_95C2_B82A_77BF,
    0x950F_AAC1_A64A_B733, 0x1A95_5E03_DFA2_861F, 0x5EB1_B52E_F7C7_231D, 0x19E1_A74D_639C_B063,
    0x775C_20D6_7EC1_2528, 0x0872_2D7F_A44C_4DDF, 0x83D1_45BC_B0C9_2D32, 0x73DA_60E4_3B22_07E8,
    0x9628_13B9_A13D_0929, 0xEB65_72D6_738F_420B, 0x80A4_A0EF_151A_52CA, 0xE5BC_72C6_23EE_E457,
    0x0000_0001_6AE1_3D88,
];

/// z^1024, below the modulus degree so the reduction is exact.
#[cfg(test)]
pub(super) const TEST_POLY_2_10: [u64; 17] = [
    0x0000_0000_0000_0000, 0x0000_0000_0000_0000, 0x0000_0000_0000_0000, 0x0000_0000_0000_0000,
    0x0000_0000_0000_0000, 0x0000_0000_0000_0000, 0x0000_0000_0000_0000, 0x0000_0000_0000_0000,
    0x0000_0000_0000_0000, 0x0000_0000_0000_0000, 0x0000_0000_0000_0000, 0x0000_0000_0000_0000,
    0x0000_0000_0000_0000, 0x0000_0000_0000_0000, 0x0000_0000_0000_0000, 0x0000_0000_0000_0000,
    0x0000_0000_0000_0001,
];

/// z^(2^20) mod p, small enough to cross-check by stepping.
#[cfg(test)]
pub(super) const TEST_POLY_2_20: [u64; 313] = [
    0x0000_0000_0000_0000, 0xADC4_C8B2_BEFA_4D70, 0xF095_5951_23F2_69F1, 0xCCF0_1D2F_A19B_C77C,
    0x6769_1FCD_89F9_0A3B, 0x5884_6827_C612_F21B, 0xA024_724A_EA84_D6F9, 0x7F1C_4CA3_11E0_AE46,
    0x6068_3F55_93E7_69BC, 0x5D56_7F3C_F86E_41BC, 0x692A_7E93_2E1F_091D, 0x0B58_B2C0_2359_EF12,
    0xECCD_EF01_F06D_9493, 0x3CF2_4C13_7E2B_E6A2, 0x3FB5_D8A4_1C9F_44DB, 0x3200_92E9_144D_3FAF,
    0x4299_7177_7054_523C, 0xDEBC_078A_1787_D509, 0x2D7A_8966_5AAE_B386, 0xE03E_6554_72D9_4873,
    0x7B99_05CA_0F99_20B3, 0x4DD5_202C_C6B0_C6C1, 0x99EF_671F_B31F_62F1, 0x5C43_3F85_A803_061F,
    0x736C_772C_4AF6_27C4, 0xB7B3_A28A_6A02_00EE, 0x0898_F102_223F_0FEE, 0xD62A_8FEA_BAF1_C4A2,
    0x0C51_44C2_FB14_DF97, 0x02A6_EFCF_F5A9_327E, 0xAD5A_221C_6EDD_9F65, 0xAD74_2FE2_5145_BED4,
    0x4FE7_A88B_AEB3_370B, 0xBB7D_A76E_03D8_BFD0, 0x4F0B_4778_D37B_A3D4, 0xC4C9_3CBD_0931_D190,
    0x6A35_7040_7361_DC46, 0xCF77_8AB0_AD34_42F4, 0xD291_5FE6_082D_3BFE, 0xDFBC_AC15_7C1D_E9EE,
    0x02D6_7F85_CB8E_1763, 0xC4C7_246B_B196_93F8, 0x1E7A_413B_C6CC_DA01, 0x3407_EB5F_E2A0_6660,
    0x5963_723D_FEE3_4207, 0xAE9E_FA7B_3CB7_3C9B, 0x0CBB_02AA_F4E8_4C1F, 0xEF80_C056_9667_E10D,
    0x21F4_6276_EB2F_FE48, 0x4565_7132_D0B9_30DF, 0xA9C7_1B0F_411E_CAA4, 0xF7DE_8900_892F_BAEA,
    0x83A4_0BAE_2BB6_D4D8, 0xE4CD_3BC7_1E48_A137, 0x7F57_623A_0605_0332, 0xC389_E322_E8F9_0E31,
    0xB09B_966F_E949_1785, 0x49DC_D9F1_F6C9_6F54, 0x5334_8056_BAB7_DE20, 0x5102_45CA_E3F7_FB74,
    0xF33D_907C_FCD8_EE40, 0xF8F8_A427_17A1_574E, 0x2C50_648B_61DE_23E2, 0x913B_6D92_7A50_D21F,
    0x6334_8AD0_194B_0BDC, 0x1563_FD03_0C31_ADF3, 0x84CE_EABA_A0B8_C39C, 0x4C70_236C_2404_5370,
    0xD92A_4343_BA73_53CE, 0x9C6E_661D_54D4_18EC, 0x6296_7B52_09CF_99FC, 0x2A73_4B9F_FEE5_08B1,
    0x27F8_726C_5013_5637, 0x0D79_C054_A8D6_4246, 0x95F9_B41F_B4C9_CE55, 0x1AED_170C_6618_7DB9,
    0xC02E_1168_AA02_CBAC, 0x4F5A_2505_5272_2ADC, 0xAC4F_4300_522B_22F9, 0xC8E4_1AE8_B974_F1E9,
    0x29F0_CAB4_1D55_8C63, 0xA6E0_63F7_2370_640B, 0xCEFC_457A_34E4_36E7, 0x2056_D593_A710_7B46,
    0xCC30_2C9F_60AC_EF1F, 0xA8B8_2496_D818_0B7A, 0x8367_1917_C81E_5237, 0xA82F_8B02_B17D_B7BD,
    0x8F82_502C_0143_F425, 0xBC47_FFFE_B112_BBD1, 0x2A9E_7EB0_D37B_9ED1, 0x91CA_D071_ADDC_ECA4,
    0xEAB1_107C_4D17_CC60, 0x3D86_8F19_6403_CC01, 0x7A3A_A33E_5BE5_A795, 0x8C84_CFF5_E239_E614,
    0x35C5_2964_708E_558D, 0xFB05_9A02_B0FB_49EB, 0xA25E_1C8D_C74E_00D9, 0xB6F9_ED79_E5D5_94E2,
    0xE4D5_4472_1987_E12E, 0xB689_37DF_4532_37DC, 0x9A5D_022E_D787_8393, 0x90FB_3111_8424_72D0,
    0x0928_1233_E6E6_C8FD, 0xF08D_F485_6257_1B02, 0xA4F3_F91C_0956_B5D9, 0x7CBE_51E1_46A6_31EF,
    0xED67_E22E_C785_7B86, 0x017F_B4E6_B8B7_DAC0, 0xB57B_6432_4B98_03E5, 0xAC27_9586_CCF3_7AA6,
    0x9EC8_98FA_4A9B_954C, 0xD815_6DB6_ECA5_5312, 0x4DCC_4554_A5BA_8807, 0xD341_3725_799E_57D3,
    0x24ED_FF59_4566_2187, 0x79D7_6592_E8B1_3E14, 0xE946_8AE2_C37B_9C77, 0x8602_1F42_2E18_D94D,
    0x2BAC_0545_4B82_806A, 0x6B0E_8CD0_799C_FFF3, 0xA76F_5824_C482_D1DB, 0xE0F5_5C25_F52B_B5F3,
    0xDBA0_EFFB_47F2_5D13, 0x6B93_A432_51BA_CCB9, 0x79BC_0D1F_BE8A_EB01, 0x5C8C_13FC_4E84_3718,
    0x9694_D6AA_DEA5_EE5C, 0x14EE_8ED7_D2FC_AD20, 0xC129_008E_1C93_D772, 0x27E2_2987_6180_5675,
    0xBAD5_B1DB_B2AA_E41A, 0xFFE7_B659_E5C7_E0D9, 0xE3A2_2059_BAE4_C34E, 0x0581_6C33_A51F_6FA7,
    0xD92D_83CD_E61C_276D, 0xB083_CD35_CFCD_327F, 0x372C_A022_3821_F57E, 0x0DC1_AA8D_BD00_3B47,
    0xBA14_8634_3897_089D, 0x480B_174C_B3D5_3F2A, 0x7589_C8BB_E091_D5F3, 0xC42D_80E6_15CE_DAE0,
    0xB810_D6EA_D5CC_304C, 0x0322_6722_035C_B0D4, 0x2882_EB50_6796_E622, 0x6DC5_AAB8_C8B4_968C,
    0x1BD1_4EB8_6BED_6442, 0xDC85_5592_C8A4_6A9C, 0x2084_0DEA_FF73_4DE5, 0xFA4E_1CD5_5F9D_F6C7,
    0xD874_AFA1_9CC6_4E10, 0x13D9_2DCF_198D_2A62, 0xAB36_D092_9385_39C0, 0xA5BF_8408_DEB8_4369,
    0xDEE8_CFBB_DB0E_52B5, 0xBDCA_4BE9_B834_6176, 0x3F3E_8C57_D4F5_A665, 0xE728_7F2E_B6D6_90A5,
    0x7321_1586_6EAC_7044, 0x6491_4AA8_1644_B661, 0xEC3F_5A1E_38FC_5881, 0x8F3C_CFF3_3378_2633,
    0xE16A_DEE2_130A_CC82, 0x2ADE_F6BA_0838_24E4, 0x00E7_BA58_6686_4277, 0x57C8_D6D6_4ADA_4E79,
    0x87C3_2EAF_7F6F_1BBB, 0x3FB1_84C4_85B8_1A07, 0x8C65_C6AC_9D44_7A17, 0xB744_AB27_98A6_7B29,
    0x5B87_7E7E_94A0_E6A2, 0x59C1_7F18_66C8_73AD, 0xFCA0_6DF8_3975_529E, 0x3140_58AA_96A4_0B28,
    0xFE5B_101A_038C_1C54, 0x1A3B_2837_31C6_CB10, 0xDC01_E7D8_9721_E0D4, 0xA9EE_76D3_A48E_C02B,
    0xF9EA_A8D4_E82F_934C, 0xE6F7_2303_AEB7_E2FD, 0x2049_D7A3_4EF0_3508, 0x67B8_0EB1_D7CE_9505,
    0x9F11_99E6_9A6C_4E98, 0x7B6F_7023_990C_FD20, 0x99CC_4987_8863_CF31, 0x25D7_CE6D_8D8C_62F0,
    0x2A85_B8D7_BE38_E6F2, 0x56D0_7626_53CF_A372, 0x3B8B_74B7_662E_C41B, 0x73EF_19F0_0D18_BEA3,
    0x65F8_3D78_335B_0ECC, 0x4BEE_018D_985C_8C7D, 0x049B_CA9E_287D_F6E1, 0x2DC2_9A4C_80BF_A1E4,
    0xA2AE_C7BF_165A_21A5, 0xC96F_E362_E048_DD92, 0x2B3B_15FA_4468_0C19, 0x3855_44C9_BD64_0A50,
    0xD92E_5C93_2EDB_12F3, 0x741D_A289_5AA6_591C, 0xDDC2_DC55_B24A_7977, 0x19DF_1D20_2BEF_88DD,
    0xBD7C_8A75_80F6_4590, 0xB5EA_56CE_33AA_2D6D, 0xDD86_B842_6931_F6CD, 0x4F71_CFC0_B551_3D62,
    0x7CB6_6C1F_107C_4ED7, 0x891A_151D_4B01_13E3, 0x9AB5_D85F_6117_2A84, 0x5640_BBDD_DDE6_B974,
    0xC9B6_BC5E_6E5C_29ED, 0x3B09_74DC_7681_D87E, 0x5637_CD35_9014_8557, 0xC3E6_0BE7_BD27_13BC,
    0x1723_64BC_5DD9_7C72, 0x1265_1970_3545_8618, 0x367E_D190_8224_5826, 0xF4BB_2137_6984_68D4,
    0x6403_39FE_EABE_D4F5, 0x4000_3970_9E1B_2F9A, 0xA854_6BFA_E052_BCBA, 0xBC84_A847_1CB3_6317,
    0xDA8B_2C7F_6394_BF77, 0x7324_C47B_D8D3_4788, 0x24B1_ED65_CE46_8F8E, 0x835C_76A2_792A_FF29,
    0x678E_5A7D_07D2_97B9, 0x58D2_476E_2D06_5637, 0xDABA_8DD7_EFE4_3AF8, 0x4A3A_DAC5_41EA_64ED,
    0xC22C_E857_D3EF_A08C, 0x71E1_63E6_F1AC_125C, 0x7BD8_1815_38B1_48A0, 0x6727_4037_5FE1_E688,
    0xA524_1999_0AA4_3D2D, 0x09BF_1881_E2C0_A3E9, 0xD267_F272_5687_3980, 0x5792_3484_21C9_3CA5,
    0x7EC1_6F69_1716_AAF4, 0xDF30_6654_7275_F6E7, 0x3B30_72AE_BE79_C08D, 0x2B3D_1A42_AC8E_FE8D,
    0xA34B_5EF9_892F_1779, 0xB32E_434A_29F1_89E5, 0x4AAB_151B_70FF_97CF, 0x4D01_0E68_7218_D914,
    0x9415_2BE7_4689_D046, 0xC82D_C0AF_6B03_AB60, 0xE093_D758_103C_88FA, 0x40DC_3283_F101_E1A9,
    0x7B64_5C74_6111_DA16, 0x0DBB_9DD2_D024_CDEE, 0x045A_552F_BF16_A993, 0x694D_67E3_51CA_5DD3,
    0x4F4D_769A_769F_0792, 0xD0A2_6A78_342E_D998, 0xDB63_22A7_F3FC_AA12, 0x01EE_D0FE_7BB2_AA8F,
    0x14B2_AFA5_820E_09F9, 0xE5CE_10D8_DAC6_904D, 0xA5CB_D01C_CBBF_27B8, 0x9BD3_69A3_E778_6E94,
    0xCE58_B5CC_F497_0EF8, 0x4598_4DA8_D7AD_0395, 0xCF29_B773_5AB8_EB3F, 0x39A2_703F_88A9_F457,
    0xE3EF_FC54_2A56_5E4E, 0x9984_81EF_0CDA_89FF, 0xC928_B353_73A4_E645, 0x549B_B300_21EF_4FB1,
    0x678F_0ADE_333B_4E9F, 0x20B6_2DE8_2B6D_8973, 0xD2D2_DD81_157B_035E, 0xB3FE_F358_3BC0_80BB,
    0xA2DE_E751_476B_987B, 0x62DC_8677_357C_8CF0, 0x0622_02A1_27A8_62DF, 0xE79D_F164_B102_7264,
    0x0E99_F4C9_C568_E2BF, 0x82BA_431B_C6A5_B40C, 0x6510_FCFA_88CD_E181, 0x2C6B_EAEE_1AD1_ADEA,
    0x262B_3986_CD97_BF3D, 0x0E00_EFE3_6328_1880, 0x08B6_E7B0_65A7_D016, 0xF1DC_8629_631E_38D0,
    0xDF32_CF65_FE80_74DC, 0x4C40_E3E4_4A3D_022C, 0x14D1_AADE_124B_242E, 0x1925_58B9_19F3_C859,
    0x7B1A_FC2E_2216_D863, 0x3D7F_9110_73BB_3837, 0xF40E_5279_C399_E168, 0xD533_E4D9_87BB_7CDB,
    0xB057_1327_4EEC_9510, 0xDB9B_AA85_ACEA_1B64, 0x2C3E_1CD2_3658_E725, 0xCAE6_BDC3_8EFC_F58D,
    0xCDDB_CADA_7411_0FE6, 0x4727_108A_7C11_A9CD, 0xE669_35F3_5679_899D, 0xF98D_6CCD_6353_EFD9,
    0x0151_B56C_CE58_94BB, 0xC169_0409_DE81_17CF, 0xCD48_EE59_7D28_2B3C, 0xF123_18F3_D600_2857,
    0xAABB_9E4D_9639_130F, 0x9C1A_506B_8C56_50D9, 0x3884_1EC8_DE39_5CB0, 0xDBE6_55FD_4336_0ADC,
    0x0000_0002_FD56_1958,
];

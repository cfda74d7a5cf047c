//! Precomputed jump polynomials for the dSFMT-19937 recurrence, reduced
//! modulo its minimal polynomial. One application advances 2^127
//! recursions, which is 2^128 draws.

/// z^(2^127) mod p: one jump unit of 2^128 draws.
pub(super) const JUMP_POLY: [u64; 318] = [
    0x0000_0000_0000_0000, 0x0000_0000_0000_0000, 0x439C_5C0A_7044_F1A0, 0x3CD7_5622_6C68_DCE5,
    0x1FF0_6219_B81F_1BAB, 0xB6AB_003F_FF2B_7597, 0xB1B2_E90D_F092_1CC2, 0x9802_B300_020B_DEAE,
    0xA8FA_0F16_2344_C2A0, 0xFDE9_570D_E3BA_FF9C, 0x90AD_C204_959C_F80B, 0xD5B4_F642_543D_67EE,
    0xA1AA_8D32_7145_D48D, 0xD7FE_28D4_8F9E_88D5, 0xD66E_40FA_D4F0_5471, 0x987C_2815_DEC8_FA5D,
    0x0C42_1954_8384_02FD, 0x144D_1CCD_1A06_CABE, 0x14C0_0643_78EE_A791, 0xFD7A_0A3C_3834_FF02,
    0xDF02_6F90_BEFC_0286, 0x0302_18F2_4B3A_60DE, 0x1CAB_38D8_95F7_D29D, 0xC295_CD9D_F4EC_3EF7,
    0x797B_FC84_4E42_DCFE, 0x2D9F_6B94_FAF0_24E6, 0x44DE_2F05_44F9_A38E, 0x1C70_595E_9C5F_B87A,
    0xBACE_1748_E651_D46A, 0xAD36_3456_005B_0ED7, 0x800F_24E6_B1D8_AF19, 0xBFB3_CBA6_AD6C_F642,
    0xF867_AAF2_55A7_1D51, 0x21B4_FFC6_3FD4_BCCF, 0x0FC9_FC06_11B8_DA1C, 0x61D8_649C_DAE0_6E9E,
    0xE46E_EB1D_5C9C_555D, 0xEF6D_AC8D_E2DA_F348, 0x26FA_061B_8F51_6236, 0x97E1_F9AA_7859_1363,
    0x7CC1_801A_130A_F084, 0x8836_53EE_B7CE_DF19, 0x8003_ACC4_1BDF_F5FE, 0x3872_9090_7AC2_8C88,
    0xE50A_091F_0DA4_6D57, 0xC2C1_7758_EA62_FD34, 0x9419_D9FA_7B95_9FA4, 0xF623_16B8_73F2_6A22,
    0x3CF2_6395_F2E4_7066, 0xD1AE_EA03_6205_0E8D, 0x5F48_5EB4_6640_782C, 0x5E18_CE92_B582_B37F,
    0x2294_5524_0241_AE9A, 0xDE81_2386_0D02_62D8, 0x0785_0477_AA24_C31B, 0xDCEE_4D86_F558_385F,
    0x6C99_4438_81A0_A832, 0x56D1_F6C2_0BE7_054E, 0x013D_3807_B119_D367, 0xAC88_7065_3778_13AE,
    0x60D2_3B69_B2D6_6F95, 0xDDA0_826A_F9F0_9084, 0xFCCD_2B8E_A5A4_54E0, 0xCC73_1022_98D5_53B0,
    0x66DE_8F17_EAA6_2166, 0x83FA_72FA_3C2B_577C, 0x2CA5_5132_AB14_913D, 0xD809_C884_7EAD_BF29,
    0x6C0F_ED70_BE62_81F0, 0x18CE_7ED3_5E4F_630A, 0xF4BB_0A18_987F_3723, 0x3507_21C4_B78E_419C,
    0x0E56_A002_0ADB_52E4, 0x7D07_0303_DCDC_0EEF, 0x1795_D5C5_2936_691F, 0x75BD_1DB9_47CF_A5DD,
    0xB5F1_0F06_11BD_6AC4, 0xAB6E_63D9_98A3_9421, 0x946F_1961_2A0A_8969, 0x4E63_F61D_DC32_A8F0,
    0xA988_CA63_80BB_215D, 0x3089_C3C0_D1FD_89F3, 0xF89A_6316_A1A4_CDD4, 0xDFEA_623B_2614_8049,
    0xD9B8_3370_556E_0B37, 0x336B_90AF_95D7_3CAA, 0xFF7B_301B_CB16_CBAA, 0x0F4F_150C_2546_86ED,
    0x7799_6AEB_0528_AD9B, 0x5D52_1E67_263F_911A, 0x734C_7A6E_4E51_962C, 0xD3D8_7E6D_7160_7594,
    0x0A69_340D_C43E_87DF, 0x2202_B404_F4BB_5142, 0x5B63_D27B_AC28_C54D, 0x7006_1E0A_434B_9099,
    0xF47D_D0EC_26E1_F289, 0x541B_3A9C_2B3C_9AD0, 0x048E_6A8B_7279_D334, 0xCF76_C027_BCE9_19A7,
    0xEE5A_68F5_7561_925D, 0x6D1F_E4C5_2514_0D5C, 0x091D_DD00_63D5_CDA1, 0xCD54_46DE_17A3_23CE,
    0xE1FD_0E79_1414_A1F0, 0xA40B_84D2_BCD6_D10B, 0x0B77_0796_6BD0_FD84, 0x1032_205A_9B2A_B16A,
    0xC106_D0C6_3F18_F7B1, 0x6ABD_3294_CB29_FE16, 0x65C8_8251_B779_61DD, 0xC42A_289B_9FE7_FCEB,
    0xD3CF_7FCA_4C6F_0DAF, 0x773F_8CDD_1458_A037, 0x7D1D_A3A8_0B32_E380, 0x8959_1668_3CF4_9185,
    0x314D_12CF_9632_514A, 0x55A7_3090_97F7_02D2, 0xBC41_4A31_C012_C2FE, 0xB142_E8EC_E4D4_3113,
    0xB302_801B_3F7C_9031, 0xA43B_E0FB_7745_E628, 0x938C_9716_79CB_94DE, 0x44F8_FEA2_A048_D876,
    0x1B29_A9BF_7888_CC37, 0x8D5F_A6C3_8449_2B3D, 0xE312_537A_3698_EA13, 0xA149_BF9C_4137_5D98,
    0x4D10_9BBB_1C39_496D, 0x9F3B_298E_5BA1_F0BE, 0x3307_1AEE_8DE3_93D9, 0xD382_E8A5_C968_5A88,
    0xBBF1_5629_9556_D536, 0xB230_9CD8_B5C7_1D0F, 0x7DF3_1BEA_E883_3CBB, 0x48CC_0274_779A_DF27,
    0x668A_F13C_1A06_20A6, 0xA21E_305D_2B44_E855, 0xD637_09CD_53AB_C2A8, 0x3ABD_BB7E_C3C1_3953,
    0x4797_4B77_1334_C6A8, 0x8FA6_45AC_53DE_B911, 0xCCA2_1C1B_D0F0_60CC, 0x729C_0FC0_7283_B1A4,
    0x0CA4_813A_4213_5B25, 0x0456_59C5_8EB5_E5DF, 0x9456_2CC1_0124_180A, 0xF97A_7C71_4D78_FC3A,
    0x2E90_5BA1_85BA_96CC, 0xC5FC_2135_35DD_A9F4, 0x4C4F_9D2D_0876_3E91, 0xF937_3DEB_6F11_A209,
    0x5AD2_3BA3_73E5_B1E2, 0x5D92_DA23_2A81_8D9B, 0x0E59_833B_215F_D4BF, 0xD3AA_E9A3_33FE_3180,
    0x80BD_4015_6F07_70E9, 0x9ED3_1991_1962_2B58, 0xC11B_B312_EBD8_9DF6, 0x9854_E80F_A9F2_D3CB,
    0x03EA_96E6_092B_569C, 0x74CC_E09F_9BFC_007E, 0x0045_8135_C67C_5E10, 0x9A8E_3049_49EE_77BC,
    0x586B_ADD5_FE66_7414, 0x5349_683F_CCC0_83BA, 0xDED5_202F_DF30_633A, 0x2D07_8E20_500C_E9CD,
    0xE364_31DD_0DAB_AB6E, 0xCFE8_C403_CE7C_97C0, 0x63C3_2608_A4FE_40C5, 0x0541_F4BB_699D_1C2F,
    0x7781_D252_6240_5B67, 0x8322_12AD_F206_F936, 0xB5F5_CF56_432B_7894, 0x094A_0524_F9E0_43A2,
    0x5C97_E509_55EC_F236, 0xCBE4_35D9_DAF0_D537, 0x39B9_94DC_1E24_2141, 0xCE8F_7C34_36B9_332A,
    0xCCFC_6499_7CBF_06B8, 0xC221_A4F7_9D4E_D7D3, 0x7374_4F6D_1647_0046, 0x98EE_CE7F_428C_CCCF,
    0xEA42_4701_9145_C4DC, 0x92CA_EFC9_1C8F_3189, 0x886D_A974_A0BF_D9FA, 0xA255_0F95_25C7_480A,
    0x0FA5_9946_A350_73B9, 0xD67A_9703_83A4_BDCD, 0x7242_E0B4_26C7_7A73, 0x5829_5A54_D901_50DE,
    0xF8D2_60A5_5F70_52FC, 0xBD94_1154_0A28_44B6, 0x0C82_7D0A_A789_AC3B, 0x5AF5_7E19_3C9A_89DD,
    0xAE68_F171_427C_EF11, 0x3806_0BE2_352B_7EC7, 0x067B_DA2E_C95F_1DA2, 0x7BDA_6A81_D310_747F,
    0x87DF_122E_6C70_A8E0, 0x13A4_0F3C_C671_5123, 0xDF4F_FAD0_DE24_3E16, 0x59C0_7B67_2437_D65A,
    0x745B_15A3_5AE8_9D89, 0xAF0F_B3B6_022D_4078, 0x794F_E78C_6E83_8D24, 0x4A21_A319_4C12_6D95,
    0xF801_BDE5_31A5_B6EE, 0x97C7_D84D_82BB_8F71, 0xEA78_E6AC_47E9_E700, 0xB234_F972_9E6D_19CF,
    0x1403_3E09_4D75_5F1A, 0x18A5_605C_32F4_6737, 0x81FA_35C8_275A_62CB, 0x5853_766E_E625_3FFF,
    0x9E5B_9131_1AC1_AAD7, 0x318C_884B_1832_D8B4, 0x8444_205C_B602_4DD7, 0xE957_3720_B44E_3540,
    0xDEC6_F94F_3AC3_8F13, 0xCFFD_8EC5_2A53_FC9C, 0x1D8C_6258_A378_FFA2, 0x6DAB_A2BB_AFD7_C557,
    0x34E3_4925_1717_D93A, 0xA27C_457A_4667_3487, 0xBEA8_63DD_3D74_DECB, 0x1211_B283_75B5_4D04,
    0x489A_F16C_7064_CB93, 0xF748_5768_7214_046F, 0xCCD5_BEB3_8323_8625, 0x2520_FDCD_62D0_3102,
    0x11D0_0808_F998_4EDF, 0x86A3_28F9_D0F3_625D, 0x9408_B824_07C9_6B43, 0x90D3_A559_79A7_6F68,
    0x2221_20DA_8AF6_A3CD, 0x0D87_69B8_36B0_8F30, 0xBA30_C3F9_C491_061F, 0x4950_45E9_1D79_C400,
    0x7344_CECA_9C55_DF29, 0x4F77_E23F_3C9D_3524, 0xB390_D609_EEB9_3D32, 0x4420_95A5_4709_A6ED,
    0x8C30_E95A_EE63_A8CC, 0x8730_9A8E_9334_5A80, 0x52BC_B41C_7522_23A0, 0x1F2F_29C7_1928_15C3,
    0xBAE3_22E3_4307_B083, 0x3A97_361C_DC5C_C5FA, 0xF216_656E_72AC_7247, 0x6C37_8255_DBB0_C2C9,
    0xAB95_5C42_8A6A_9684, 0x601D_0C15_1D35_7CCF, 0x5509_953B_1BC1_539D, 0xE648_2AD3_FB8C_7FBD,
    0x1262_C815_71D3_91F9, 0x5784_6AE0_44E1_D4B4, 0x7220_0A14_6B2C_7219, 0xA153_54EF_DEC5_C532,
    0xA6F1_E490_01BD_17BC, 0xECAC_05AB_C831_86AC, 0xA15B_15EE_8EEC_0CB5, 0x6912_DCEA_B6EC_BA3E,
    0x85CC_FFEB_3914_0768, 0x7209_C725_124F_55CF, 0x64B4_F34D_4BD5_751D, 0x5658_C0C4_4B75_5E17,
    0x9826_1FDE_1F80_8D3B, 0x8AFA_308B_296F_BE6C, 0x67FB_4CAA_654E_184B, 0xCAEF_57B1_2E67_C364,
    0xC9C2_5DAD_B6E6_FB12, 0xA15D_355D_AB17_BC2B, 0x5296_0399_18BA_26DB, 0xA9F6_AABC_0136_2A97,
    0x6060_DEDA_8DD1_3BD7, 0xF130_292D_4AEA_2C13, 0x605A_C012_0F78_8284, 0x88DE_2714_30ED_3027,
    0xAECE_757D_9914_DD5A, 0x2205_A7E4_E44B_58FB, 0x470C_3122_73D7_FCBE, 0xF5ED_3B91_E861_B078,
    0x2993_17C0_2DD3_8862, 0x9F49_3B2F_FF3C_A356, 0x17B4_35DA_9C11_9D9E, 0xFF6A_166C_42B3_50B3,
    0x1FB3_FC48_98D7_B979, 0x2C7F_2B5A_B025_3ABC, 0xD429_DD19_A5ED_33A0, 0x3CAC_9D46_D1AE_15AD,
    0xB28B_5357_8D3B_7EE7, 0x35F0_2B44_1FED_8231, 0xC3DB_C10B_9D24_8393, 0x62FE_F926_6BAC_04F8,
    0x2AA0_AC68_3C4E_6496, 0xFD15_A69F_A433_8EC1, 0x0C6A_7AD7_95B0_FCB9, 0x609D_5B78_CD79_A7E0,
    0xA1B7_15D6_5084_49D2, 0x21EE_28D3_262F_12C3, 0xB269_020E_9C66_098F, 0xFD91_92CB_260C_CCAC,
    0x77E7_777E_D986_1E5A, 0xAC9A_BB87_D06E_2442, 0xD0B3_1448_6AE8_BC43, 0x8CB6_7345_B83C_7F01,
    0xBE7E_520E_8C14_87E7, 0xAAC3_8DEC_17B5_EA47, 0xE8A2_5FE2_B0D4_29BE, 0x2054_D867_3D25_99C8,
    0x2C71_56B4_B5AA_12FC, 0x6802_B455_BBAD_D4C7, 0x5547_768A_71B4_CD15, 0x4DA1_6CC4_89E5_A968,
    0x444D_A027_1870_43E7, 0x0000_0000_00D1_293B,
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
pub(super) const TEST_POLY_2_20: [u64; 318] = [
    0x0000_0000_0000_0000, 0x0000_0000_0000_0000, 0x9906_C09B_E058_B71E, 0x73B7_2538_9820_B00E,
    0x2D00_2664_D291_3699, 0x8303_9B81_C7B6_9238, 0x409D_818D_66E4_1772, 0x4179_71F2_67A1_DFFB,
    0x8BBD_EE40_BF6D_8B6A, 0x11B1_C328_1E23_23A0, 0x8019_EC2F_BF8C_25C5, 0xF020_518C_6C4B_2465,
    0x8E26_7025_3A30_4D2D, 0x30B5_B479_F5C4_4FA0, 0x3012_B845_BD7F_C3C0, 0x9694_E2DC_6D5F_8733,
    0x0C0B_71BD_6293_168F, 0x4045_8DC7_73E2_0F1D, 0xD52A_71F5_5355_5FD1, 0xC13E_F988_81F6_D735,
    0xCDEB_5FD4_BF1F_DFA2, 0x71C2_6953_1FBF_BD86, 0x419D_7A95_BE4C_9252, 0xB6E0_9AD2_3446_0D5A,
    0xD0A1_AB90_309A_73A5, 0x254D_B98C_DAFD_669A, 0x8918_A034_EE26_F820, 0x8F9C_5802_D9CB_6E22,
    0x6606_013F_6487_E832, 0x02F0_3FB9_0D95_500E, 0x74DC_14D4_EBF3_D6B8, 0x56BD_12B0_329F_F42F,
    0x1809_54FD_521E_2DB8, 0xBFAA_4927_8E83_481C, 0x1E56_3091_9F18_86FC, 0xB355_1BE3_E5E9_E8E5,
    0xE515_63B2_D72E_D7C4, 0xF1D0_2890_739C_58FA, 0x8B7B_F6F5_DCF7_804C, 0x751E_7C85_5326_E380,
    0xD87F_43E5_6F50_DF15, 0xB5FF_F19C_EBA5_6B61, 0x974F_3F0D_DC08_B5F2, 0xCDED_AA84_67D0_F40E,
    0x3A23_AAF1_DBEF_D177, 0x5BA5_46DF_2F57_C20F, 0x78FD_4678_C80C_F6A6, 0x4CD1_9B09_A5AC_308A,
    0x4D90_808D_C33A_474B, 0xAD8F_245C_7704_31F2, 0x5AA5_787B_06D6_F724, 0x1075_8149_0291_3C2C,
    0x3379_9DB3_A317_EC4F, 0x378F_2A8F_55B8_530D, 0xFE6F_5B18_5D5A_036E, 0xAE65_06B2_9DDD_A9F5,
    0xA332_9BBB_A67E_4998, 0xE4D1_4D9F_07EB_5B6A, 0x8766_C421_715D_5CB1, 0x436C_A7B9_B36B_09C8,
    0x0C6F_722C_8ED1_59BE, 0xA2A1_3B5C_4683_74D7, 0x3D87_5ABD_DF13_AD2E, 0xD3B6_49D8_7D88_60CD,
    0xA812_9964_3F00_BD33, 0xAADA_AE07_C17B_3E58, 0x984B_62E0_2399_4E49, 0x040A_233C_2328_B69D,
    0xACEF_355D_DC1F_9CC7, 0xAB49_17E1_F665_3461, 0xC027_4555_C62C_6A20, 0x7AE4_D3FD_5AD2_060C,
    0xD32F_3D29_EA1F_FFEE, 0x7C09_001E_B858_2D1E, 0x3D69_C105_898C_595C, 0xD756_A59A_DF96_4F21,
    0x587B_E96A_A535_D9A7, 0xC302_0317_B514_D550, 0x5F59_A430_7578_0AB0, 0x6335_E2AA_E531_3206,
    0x6BF4_F283_A7C1_240A, 0x77BF_3FD4_01B6_D85B, 0x383D_39D9_374C_6F77, 0x285D_9399_DF57_981F,
    0x3BE8_1335_5497_C60C, 0xAB31_AB31_2B3C_5A6B, 0x5B5F_C90C_021E_F9E8, 0xD842_C6B0_E237_C048,
    0xDD7D_05D2_63B1_984F, 0xE982_8A8E_7BC3_91D2, 0x1BF6_F53D_A3B1_AE6F, 0x0B96_8AE5_8667_C17B,
    0xBF87_6B80_0531_3494, 0xAD47_918B_7EF9_E237, 0x68EF_F1C7_BCF6_5BA8, 0x62F0_85E3_2F5D_27A6,
    0xA880_3161_B14B_6905, 0xDF13_96A4_4A4B_2FDB, 0x181D_DB02_0FB9_A3CA, 0x0563_47E5_F2F7_49CF,
    0xD37F_BBDE_9935_2775, 0x3EA9_BB5A_C2D1_575A, 0x82E7_C991_D4AC_02F9, 0x1ED9_6CA9_6B12_4112,
    0xEA91_9CC1_B04C_BDFF, 0xF446_9108_697A_4E3B, 0x5078_D956_CC1B_6EB1, 0xB546_1761_D499_84CC,
    0xF8AF_C69C_FB3A_DC16, 0xF1F0_7B37_6836_8DFF, 0xC40C_5B94_818E_9194, 0x6818_C5E7_84AB_1CAC,
    0xA801_6749_A63F_044A, 0x6661_5229_B722_645F, 0x17CB_658E_3854_0A3E, 0xDDC7_EF35_4407_2B0D,
    0xBB3A_3813_9FDC_3516, 0xD880_962F_78BD_9859, 0x1E42_43DE_FC94_BFB2, 0xF053_90AA_240B_B7FD,
    0x2065_FB47_80C2_4D0D, 0x213A_A881_9336_B916, 0xD393_27ED_C70C_7393, 0xA271_8E46_8E4E_D0BD,
    0x8E1A_6C7F_84BC_19F5, 0xBCC3_2170_E49B_1017, 0x6AB9_F6AF_3B8E_97A4, 0xE552_F36C_7F30_7900,
    0x5B22_A993_8020_9C0F, 0x8CD0_1881_F941_B04E, 0x2361_7926_50A3_C249, 0x9BB1_CBC4_9B63_6C5D,
    0x7D28_8B5A_28E7_23B2, 0xD190_7C08_7390_1A6E, 0x7040_1B62_865B_04E6, 0x9D89_B4E1_8B7A_4BED,
    0xEEF3_FCDD_DDF5_37BF, 0x7332_AFF0_C0F4_13AE, 0x965A_1F90_128C_F5F9, 0xEA66_E285_74F1_3D74,
    0x83C3_45F0_C959_DB92, 0x8151_6D8A_A4C6_0AC9, 0xB7F3_7479_B4DA_266D, 0xDB94_D611_8D77_F9AE,
    0x2BBE_4C3C_CCD5_0452, 0x29E7_B341_FAE0_DD74, 0xAFBD_2166_019C_AA96, 0x21FE_C796_50CB_5DA0,
    0x7E79_DEF3_9800_B41E, 0xCF4C_57D1_867A_8A42, 0x86B4_9E50_1A70_C3F5, 0xC4B3_657A_4745_00A5,
    0x1E7E_F68C_D6D4_12F7, 0xB0ED_015B_5322_5F30, 0xB2F0_4644_947F_8EAB, 0xACC1_E0C1_1561_985F,
    0x8E20_C14F_EB02_7CE0, 0x1FFC_DAF0_15DD_6C13, 0x8659_97B2_88BE_E5D6, 0xFBE7_A20D_1D99_8F36,
    0xFF3F_5388_FBF3_6ACA, 0x9098_9846_35D1_32ED, 0xE899_0B85_015A_7B7C, 0x5E38_DD3A_F996_3BA0,
    0x4088_CDEB_4C6A_E928, 0x9073_63BA_5656_3454, 0x1F99_2039_27DA_5DE3, 0x3E8E_3B1C_70C1_22C4,
    0x921A_CC84_748B_7435, 0x5E31_53E7_CB32_33F9, 0x7F19_A2B0_0601_FE4A, 0x49D0_30C5_DD99_85DD,
    0xF63D_DEC8_8E3E_F15E, 0x61C5_0697_B0AE_9CCF, 0xA88B_24F6_9E71_D377, 0xD346_E5FF_D67A_40A6,
    0xCC5A_CDEE_7325_559F, 0x5D19_A1FF_A736_15CE, 0x7F76_BA93_4CF3_7A02, 0xA57F_FCB3_2129_61D6,
    0x1649_E68E_8A94_A4C3, 0xEFCE_492A_53B8_37F0, 0x4207_FD5C_F6CC_8B52, 0xAC63_A63C_CF34_9B04,
    0x2FE7_CC48_2CCC_652D, 0x134F_3F35_F701_6423, 0xB53B_22C8_1BD5_644C, 0xAAF8_B4DD_C445_CDE4,
    0xF019_AC8C_8DE4_543C, 0xF86F_354D_244A_D28F, 0xF69F_25F3_B603_97F6, 0x7176_0D84_DBC1_3038,
    0xEE9E_87AF_E800_49E8, 0xA50D_ECB0_3947_FCF9, 0x8CE1_AF7E_91E4_F8E3, 0x6F7F_C783_4511_ED6C,
    0xC4D9_269F_2A24_D39D, 0x71D5_CF7C_1358_B456, 0x6A9C_56F4_9565_50FE, 0x3523_5037_58C5_C434,
    0x5AC6_E806_1B2E_D9FF, 0x79B5_D40A_96E1_4753, 0x0F03_CF16_8F48_9C5E, 0x2ADC_A894_A8DA_570F,
    0x359F_A6D2_E896_8AAE, 0x8D18_125C_55C6_0B97, 0x7A37_3D32_B22B_3846, 0xA5EB_E848_A999_816F,
    0xC7E9_0EB2_B053_14E3, 0x0DA6_9034_A1E7_90C1, 0xFA90_C4A9_C7F7_BB3B, 0x19FD_2393_2EBA_DD5E,
    0xC384_A456_9766_85B3, 0xC986_F49F_BA4C_2AF3, 0xB272_114E_7234_A217, 0x1B80_7674_D37F_DE6F,
    0x0E57_2EBF_7819_9046, 0x3C2D_8B10_7FFA_CCEE, 0x8E57_476F_5205_450F, 0x5B68_F59A_22E9_2C9A,
    0x9255_25FE_78FA_2F29, 0x6BE1_7BB0_DD9C_6908, 0x251F_7ABF_358E_64C6, 0xF76E_1FA9_6A24_1D04,
    0x09C4_3FCB_8EF7_7329, 0x40E8_54FF_B9BB_B5A1, 0xFE1B_87B7_B341_E9EC, 0x921E_0550_EBB6_606F,
    0x155B_47C3_E3C4_6C64, 0xC66A_D45D_4979_CC39, 0xABB6_F8AC_F1EA_C4C0, 0xBDF8_E6E9_167F_37C1,
    0x116B_C26D_B507_898C, 0x9335_F133_AC4D_45D6, 0x994F_8E1C_2818_5DD8, 0x6130_3DD1_2FB7_521C,
    0xF717_2AF3_247B_917F, 0x7AEF_0593_49D9_F24F, 0x6C1F_F11C_2DDF_B03D, 0x9557_4C22_ED9F_7036,
    0xA265_63F9_FAF0_2F12, 0x6C8D_210A_845E_17CB, 0xBC8D_8641_6725_5559, 0xAA54_2048_558A_F776,
    0x80F5_8242_C4F7_9EDD, 0x5864_E92D_0C1E_32FD, 0x68A7_F148_E720_438B, 0x0084_685F_8A5E_A00F,
    0xB83C_9E44_4CCA_962A, 0x7208_AB9A_0F76_11AD, 0x0685_8821_D25A_11C4, 0x0174_1236_4147_F2C0,
    0x58D0_59C0_DFC9_EB73, 0x3997_3A94_0999_9ED6, 0x94A4_D93D_D2C2_837E, 0xA96B_562C_8882_119E,
    0xF1FB_EB16_A59F_8B42, 0xA162_7060_0B78_7608, 0x0CFB_C5EC_DB32_D89F, 0xC879_A494_AC57_5368,
    0xD0EF_5B33_61DB_93AE, 0x2024_1CEC_25F8_F2D2, 0x17D8_F5D5_A5BD_8474, 0x2DF0_7FEE_B698_8180,
    0xC6B8_2204_ADD1_99D5, 0xC83C_1364_832A_8B75, 0x0595_4A73_1D66_2A01, 0x4E8D_B2E5_754F_E3FA,
    0xA971_CF46_6F10_C561, 0xEB50_BC04_9207_F170, 0xE35E_2857_116A_B8DB, 0x747B_5AC2_3DEC_6EA1,
    0x0943_85B7_37E9_9ABB, 0x1A60_DE62_E187_5FF3, 0x1E49_3647_2518_9963, 0x7D02_D074_9BBF_0B61,
    0xB143_A6E6_F1DD_E99E, 0x54E6_9F0C_BC22_5555, 0x20E1_8C2F_3D66_19A2, 0xEBF9_E998_46F5_FF52,
    0xF863_5DA1_AB35_48D9, 0xC55C_D939_FB5B_AB82, 0x55A9_8AC6_A307_9DDE, 0x0A15_A637_4328_FC97,
    0x7C02_A09B_8290_A368, 0xFF41_05B4_F508_FB93, 0xA2E9_E33A_E6C9_BF72, 0x0E0E_D546_BD74_457F,
    0xDA27_6A1F_CDC4_00CD, 0xA980_8EBD_A19C_685F, 0x0B8C_9D47_6784_E75F, 0xD23E_E29D_44F3_EC26,
    0x4E1B_7241_76B5_1B4E, 0xDF83_56B7_AAC5_7D9F, 0xCD13_1093_9ED6_E16D, 0x5F03_10F0_8455_D690,
    0xC493_45B7_F055_BE91, 0x0087_A722_70A2_1D57, 0x09D6_65FC_EEC3_040F, 0x578A_74CE_7B3E_1564,
    0xB084_64A6_D974_099C, 0x11C1_B4A9_16C7_09B3, 0xBA2D_D2A0_9937_E187, 0x822B_7539_1D99_0C81,
    0x46D9_C9F7_5CBC_807C, 0x4A0E_557F_8E77_462A, 0x1E1D_7C48_9987_7DCD, 0x2988_5BDC_E5ED_6310,
    0x93DD_5106_B89D_0FBA, 0xB52D_D1BB_4956_503F, 0x1AE7_82C2_9878_95B3, 0x96DE_0E13_28F5_1403,
    0x2D5F_6AED_41C9_B658, 0xF82C_A382_D032_BE29, 0xB635_21AD_FEC8_48F9, 0x4614_A2C0_F6DF_3DBC,
    0xB7FF_B956_0EE1_65A5, 0x0000_0000_0001_23EF,
];

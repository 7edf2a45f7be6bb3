//! Seed mixing for the independent random streams of one museum generation.

const LAYOUT_STREAM: u64 = 0x4C41_594F_5554_0001;
const ROOM_STREAM: u64 = 0x524F_4F4D_0000_0002;

pub(super) fn derive_layout_seed(run_seed: u64) -> u64 {
    mix_seed_stream(run_seed, LAYOUT_STREAM)
}

pub(super) fn derive_room_seed(run_seed: u64, room_index: usize) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= (room_index as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= ROOM_STREAM.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

fn mix_seed_stream(seed: u64, stream: u64) -> u64 {
    let mut mixed = seed ^ stream.wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    mixed ^ (mixed >> 33)
}

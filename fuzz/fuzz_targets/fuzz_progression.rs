#![no_main]

use libfuzzer_sys::fuzz_target;

use seqgen_core::{calculate, generate_progression, get_element};

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    // Seed from the first 8 bytes, count from the next 2, capped for speed
    let seed = u64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let count = usize::from(u16::from_le_bytes([data[8], data[9]])) % 4_096;
    let step = |x: &u64| x.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);

    let Ok(seq) = generate_progression(seed, Some(step), count) else {
        assert_eq!(count, 0);
        return;
    };

    // Progression, accessor and fold must agree
    let items: Vec<u64> = seq.iter().collect();
    assert_eq!(items.len(), count);
    assert_eq!(get_element(seed, Some(step), count).ok(), items.last().copied());
    let folded = calculate(seed, Some(step), Some(|a: u64, b: &u64| a ^ b), count).unwrap();
    assert_eq!(folded, items.iter().fold(0, |a, b| a ^ b));
});

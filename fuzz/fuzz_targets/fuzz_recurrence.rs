#![no_main]

use libfuzzer_sys::fuzz_target;

use seqgen_core::generate_sequence;

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }
    let first = u16::from_le_bytes([data[0], data[1]]);
    let second = u16::from_le_bytes([data[2], data[3]]);
    let count = usize::from(u16::from_le_bytes([data[4], data[5]])) % 2_048;

    let add = |a: &u16, b: &u16| a.wrapping_add(*b);
    let Ok(seq) = generate_sequence(first, second, Some(add), count) else {
        assert_eq!(count, 0);
        return;
    };

    let items: Vec<u16> = seq.iter().collect();
    assert_eq!(items.len(), count);
    assert_eq!(items[0], first);
    if count >= 2 {
        assert_eq!(items[1], second);
    }
    for w in items.windows(3) {
        assert_eq!(w[2], w[0].wrapping_add(w[1]));
    }
});

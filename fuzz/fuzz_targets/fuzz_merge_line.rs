#![no_main]

use libfuzzer_sys::fuzz_target;
use twenty48::game::merge_line;

fuzz_target!(|data: Vec<u8>| {
    // Map raw bytes onto game-legal tiles: empty or powers of two up to 2048.
    let line: Vec<u32> = data
        .iter()
        .map(|&byte| {
            let exp = u32::from(byte % 12);
            if exp == 0 { 0 } else { 1 << exp }
        })
        .collect();

    let merged = merge_line(&line);
    assert_eq!(merged.len(), line.len());

    // Merging rewrites x,x -> 2x,0: the value sum is preserved.
    let sum_before: u64 = line.iter().map(|&v| u64::from(v)).sum();
    let sum_after: u64 = merged.iter().map(|&v| u64::from(v)).sum();
    assert_eq!(sum_before, sum_after);

    // Tiles are never created.
    let nonzero_before = line.iter().filter(|&&v| v != 0).count();
    let nonzero_after = merged.iter().filter(|&&v| v != 0).count();
    assert!(nonzero_after <= nonzero_before);

    // The result is compact: zeros only trail.
    let first_zero = merged.iter().position(|&v| v == 0).unwrap_or(merged.len());
    assert!(merged[first_zero..].iter().all(|&v| v == 0));
});

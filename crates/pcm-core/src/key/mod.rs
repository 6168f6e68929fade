//! Seed/key unlock computation.
//!
//! A PCM answers an unlock request with a 16-bit seed; the tool must
//! reply with the key derived from that seed by one of 256 table-driven
//! micro-programs. Which program applies comes from the OSID registry.

mod programs;

use programs::KEY_PROGRAMS;

// Opcodes understood by the interpreter.
const OP_ADD: u8 = 0x14;
const OP_SUB: u8 = 0x98;
const OP_COMPLEMENT: u8 = 0x2A;
const OP_ROTATE_LEFT: u8 = 0x4C;
const OP_ROTATE_RIGHT: u8 = 0x6B;
const OP_SWAP_ADD: u8 = 0x7E;

/// Compute the unlock key for a seed.
///
/// `algorithm` indexes the program table; indices past the end of the
/// table yield 0 rather than a key. A seed of 0xFFFF means the PCM is
/// already unlocked and is returned unchanged.
pub fn compute_key(algorithm: u16, seed: u16) -> u16 {
    let Some(program) = KEY_PROGRAMS.get(usize::from(algorithm)) else {
        return 0;
    };

    if seed == 0xFFFF {
        return seed;
    }

    let mut key = seed;
    for step in [1, 4, 7, 10] {
        key = apply_step(key, program[step], program[step + 1], program[step + 2]);
    }
    key
}

/// One interpreter step. All arithmetic wraps at 16 bits.
fn apply_step(acc: u16, op: u8, h: u8, l: u8) -> u16 {
    match op {
        OP_ADD => acc.wrapping_add(u16::from_be_bytes([h, l])),
        OP_SUB => acc.wrapping_sub(u16::from_be_bytes([h, l])),
        OP_COMPLEMENT => {
            if h > l {
                !acc
            } else {
                (!acc).wrapping_add(1)
            }
        }
        OP_ROTATE_LEFT => rotate_left(acc, h),
        OP_ROTATE_RIGHT => rotate_right(acc, l),
        OP_SWAP_ADD => {
            let operand = if h >= l {
                u16::from_be_bytes([h, l])
            } else {
                u16::from_be_bytes([l, h])
            };
            acc.swap_bytes().wrapping_add(operand)
        }
        // Unknown opcode: leave the accumulator alone.
        _ => acc,
    }
}

// The rotate counts are not reduced mod 16. Counts above 16 shift bits
// out through the 32-bit intermediate exactly like the PCM's own code,
// so these are not plain u16 rotates.
fn rotate_left(acc: u16, count: u8) -> u16 {
    let wide = u32::from(acc);
    let left = u32::from(count) & 31;
    let right = ((16 - i32::from(count)) & 31) as u32;
    ((wide << left) | (wide >> right)) as u16
}

fn rotate_right(acc: u16, count: u8) -> u16 {
    let wide = u32::from(acc);
    let right = u32::from(count) & 31;
    let left = ((16 - i32::from(count)) & 31) as u32;
    ((wide >> right) | (wide << left)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        // Row 0 only has one live step (a COMPLEMENT).
        assert_eq!(compute_key(0, 0x1234), 0xEDCB);
        // Rows exercising add, both rotates and swap-add.
        assert_eq!(compute_key(1, 0x0000), 0xC5B4);
        assert_eq!(compute_key(14, 0xABCD), 0x9E8D);
        // Algorithm 40 is the P01/P59 default.
        assert_eq!(compute_key(40, 0x3322), 0x711A);
    }

    #[test]
    fn test_deterministic() {
        for seed in [0x0000, 0x0001, 0x8000, 0xFFFE] {
            assert_eq!(compute_key(40, seed), compute_key(40, seed));
        }
    }

    #[test]
    fn test_unlocked_sentinel() {
        // 0xFFFF means "no seed required"; it must pass through untouched.
        assert_eq!(compute_key(40, 0xFFFF), 0xFFFF);
        assert_eq!(compute_key(0, 0xFFFF), 0xFFFF);
    }

    #[test]
    fn test_algorithm_out_of_table() {
        assert_eq!(compute_key(256, 0x1234), 0);
        assert_eq!(compute_key(u16::MAX, 0x1234), 0);
    }

    #[test]
    fn test_rotate_matches_pcm_arithmetic() {
        // Small counts behave like a 16-bit rotate.
        assert_eq!(rotate_left(0x8001, 1), 0x0003);
        assert_eq!(rotate_right(0x8001, 1), 0xC000);
        // Counts above 16 shift every bit out through the 32-bit
        // intermediate; a plain 16-bit rotate would keep them.
        assert_eq!(rotate_left(0x8001, 20), 0x0000);
        assert_eq!(rotate_right(0x8001, 20), 0x0000);
    }
}

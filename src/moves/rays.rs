//! Square-pair geometry: the segment and full line through two squares, and
//! their relative direction. Used for pin detection and check-evasion block
//! masks, where the move generator needs "what lies between the king and an
//! attacking slider" rather than just "what does a slider attack".

use once_cell::sync::OnceCell;

/// Which of the four ray families two collinear squares share, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rank,
    File,
    DiagA1H8,
    DiagH1A8,
}

struct RayTables {
    segment: Box<[[u64; 64]; 64]>,
    extend: Box<[[u64; 64]; 64]>,
    direction: Box<[[Option<Direction>; 64]; 64]>,
}

fn classify(a: usize, b: usize) -> Option<Direction> {
    let (ar, af) = (a as i32 / 8, a as i32 % 8);
    let (br, bf) = (b as i32 / 8, b as i32 % 8);
    if ar == br {
        Some(Direction::Rank)
    } else if af == bf {
        Some(Direction::File)
    } else if ar - br == af - bf {
        Some(Direction::DiagA1H8)
    } else if ar - br == bf - af {
        Some(Direction::DiagH1A8)
    } else {
        None
    }
}

fn build() -> RayTables {
    let mut segment = Box::new([[0u64; 64]; 64]);
    let mut extend = Box::new([[0u64; 64]; 64]);
    let mut direction = Box::new([[None; 64]; 64]);

    for a in 0..64usize {
        for b in 0..64usize {
            if a == b {
                continue;
            }
            let dir = match classify(a, b) {
                Some(d) => d,
                None => continue,
            };
            direction[a][b] = Some(dir);

            let (ar, af) = (a as i32 / 8, a as i32 % 8);
            let (br, bf) = (b as i32 / 8, b as i32 % 8);
            let step_r = (br - ar).signum();
            let step_f = (bf - af).signum();

            let mut seg = 0u64;
            let (mut r, mut f) = (ar + step_r, af + step_f);
            while (r, f) != (br, bf) {
                seg |= 1u64 << (r * 8 + f);
                r += step_r;
                f += step_f;
            }
            segment[a][b] = seg;

            let mut ext = 0u64;
            let (mut r, mut f) = (ar, af);
            while (0..8).contains(&r) && (0..8).contains(&f) {
                ext |= 1u64 << (r * 8 + f);
                r -= step_r;
                f -= step_f;
            }
            let (mut r, mut f) = (ar + step_r, af + step_f);
            while (0..8).contains(&r) && (0..8).contains(&f) {
                ext |= 1u64 << (r * 8 + f);
                r += step_r;
                f += step_f;
            }
            extend[a][b] = ext;
        }
    }

    RayTables {
        segment,
        extend,
        direction,
    }
}

fn tables() -> &'static RayTables {
    static TABLES: OnceCell<RayTables> = OnceCell::new();
    TABLES.get_or_init(build)
}

/// Squares strictly between `a` and `b` if they share a rank, file, or
/// diagonal; zero otherwise (including when `a == b`).
pub fn ray_segment(a: u8, b: u8) -> u64 {
    tables().segment[a as usize][b as usize]
}

/// The entire board line through `a` and `b`, zero if they are not collinear.
pub fn ray_extend(a: u8, b: u8) -> u64 {
    tables().extend[a as usize][b as usize]
}

/// The shared rank/file/diagonal tag for `a` and `b`, or `None`.
pub fn direction(a: u8, b: u8) -> Option<Direction> {
    tables().direction[a as usize][b as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_between_rook_ends_is_empty_line() {
        // a1 (0) to h1 (7): segment is b1..g1
        let seg = ray_segment(0, 7);
        assert_eq!(seg.count_ones(), 6);
        assert_eq!(direction(0, 7), Some(Direction::Rank));
    }

    #[test]
    fn segment_between_adjacent_squares_is_empty() {
        assert_eq!(ray_segment(0, 1), 0);
        assert_eq!(direction(0, 1), Some(Direction::Rank));
    }

    #[test]
    fn non_collinear_squares_have_no_direction() {
        // a1 (0) to b3 (17): knight-shaped offset, not a line
        assert_eq!(direction(0, 17), None);
        assert_eq!(ray_segment(0, 17), 0);
    }

    #[test]
    fn diagonal_classification_a1h8() {
        // a1 (0) to h8 (63)
        assert_eq!(direction(0, 63), Some(Direction::DiagA1H8));
        assert_eq!(ray_segment(0, 63).count_ones(), 6);
    }

    #[test]
    fn extend_covers_full_line_through_both_squares() {
        // d1 (3) and d4 (27) share the d-file; extend covers all 8 squares.
        let ext = ray_extend(3, 27);
        assert_eq!(ext.count_ones(), 8);
        assert_eq!(ext & (1u64 << 3), 1u64 << 3);
        assert_eq!(ext & (1u64 << 63), 0);
    }
}

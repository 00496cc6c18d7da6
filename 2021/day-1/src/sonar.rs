use itertools::Itertools;

/// Width of the noise-reducing window used by the second part.
pub const WINDOW_WIDTH: usize = 3;

/// Counts ascents: adjacent readings where the later one is strictly deeper.
pub fn count_increases(depths: &[i64]) -> usize {
    depths
        .iter()
        .tuple_windows()
        .filter(|(previous, next)| previous < next)
        .count()
}

/// Sums every window of `width` readings and counts how many sums are
/// strictly smaller than the sum of the window starting one reading later.
///
/// Sequences shorter than `width + 1` have no pair of windows and yield 0.
pub fn count_window_increases(depths: &[i64], width: usize) -> usize {
    if width == 0 {
        return 0;
    }

    depths
        .windows(width)
        // widened so long windows of large readings cannot overflow
        .map(|window| window.iter().map(|&depth| i128::from(depth)).sum::<i128>())
        .tuple_windows()
        .filter(|(previous, next)| previous < next)
        .count()
}

/// Same answer as [`count_window_increases`]: consecutive windows share
/// `width - 1` readings, so only the two endpoints decide the comparison.
pub fn count_endpoint_increases(depths: &[i64], width: usize) -> usize {
    depths
        .iter()
        .zip(depths.iter().skip(width))
        .filter(|(first, last)| first < last)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    const SAMPLE: [i64; 10] = [199, 200, 208, 210, 200, 207, 240, 269, 260, 263];

    #[test]
    fn counts_sample_ascents() {
        assert_eq!(7, count_increases(&SAMPLE));
    }

    #[test]
    fn counts_sample_window_ascents() {
        assert_eq!(5, count_window_increases(&SAMPLE, WINDOW_WIDTH));
        assert_eq!(5, count_endpoint_increases(&SAMPLE, WINDOW_WIDTH));
    }

    #[rstest]
    #[case(&[], 0)]
    #[case(&[5], 0)]
    #[case(&[5, 5, 5], 0)]
    #[case(&[3, 2, 1], 0)]
    #[case(&[1, 2, 3, 4], 3)]
    #[case(&[-3, -1, -1, 0], 2)]
    fn counts_strict_ascents(#[case] depths: &[i64], #[case] expected: usize) {
        assert_eq!(expected, count_increases(depths));
    }

    #[rstest]
    #[case(&[])]
    #[case(&[5])]
    #[case(&[1, 2, 3, 4])]
    #[case(&[4, 4, 4, 4, 4])]
    #[case(&SAMPLE)]
    fn ascents_fit_in_pair_count(#[case] depths: &[i64]) {
        assert!(count_increases(depths) <= depths.len().saturating_sub(1));
    }

    #[rstest]
    #[case(&[], 3)]
    #[case(&[1, 2], 3)]
    #[case(&[1, 2, 3], 3)]
    #[case(&[1, 2], 0)]
    fn short_sequences_have_no_window_ascents(#[case] depths: &[i64], #[case] width: usize) {
        assert_eq!(0, count_window_increases(depths, width));
        assert_eq!(0, count_endpoint_increases(depths, width));
    }

    #[rstest]
    #[case(&SAMPLE, 1)]
    #[case(&SAMPLE, 2)]
    #[case(&SAMPLE, 3)]
    #[case(&SAMPLE, 4)]
    #[case(&SAMPLE, 9)]
    #[case(&SAMPLE, 10)]
    #[case(&[1, 2, 3, 4], 3)]
    #[case(&[5, 1, 9, 2, 8, 3, 7, 4, 6, 5, 5, 0], 3)]
    #[case(&[-10, 10, -10, 10, -10, 10, -10], 2)]
    #[case(&[7, 7, 7, 7, 7, 7], 3)]
    #[case(&[i64::MAX, i64::MAX, i64::MAX, 0, i64::MAX], 3)]
    fn window_sums_agree_with_endpoints(#[case] depths: &[i64], #[case] width: usize) {
        assert_eq!(
            count_window_increases(depths, width),
            count_endpoint_increases(depths, width)
        );
    }

    #[test]
    fn width_one_windows_are_plain_ascents() {
        assert_eq!(count_increases(&SAMPLE), count_window_increases(&SAMPLE, 1));
    }
}

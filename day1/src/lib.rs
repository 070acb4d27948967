use anyhow::{anyhow, Result};
use itertools::Itertools;
use util::{parse_line, parse_number};

/// One sum per run of non-blank lines. Blank lines (after trimming) close
/// the current group; the final group is emitted even without a trailing
/// blank, so the result is never empty.
pub fn group_sums(input: impl Iterator<Item = impl Into<String>>) -> Result<Vec<i64>> {
    let mut sums = Vec::new();
    let mut current = 0;
    for line in input {
        let line: String = line.into();
        let line = line.trim();

        if line.is_empty() {
            sums.push(current);
            current = 0;
        } else {
            current += parse_line(line, parse_number)?;
        }
    }
    sums.push(current);

    Ok(sums)
}

pub fn max_group_sum(input: impl Iterator<Item = impl Into<String>>) -> Result<i64> {
    let sums = group_sums(input)?;

    sums.into_iter().max().ok_or(anyhow!("no groups in input"))
}

/// Sums the three largest groups; with fewer than three, all of them.
pub fn top_three_sum(input: impl Iterator<Item = impl Into<String>>) -> Result<i64> {
    let sums = group_sums(input)?;

    Ok(sums.into_iter().sorted().rev().take(3).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn test_input() -> String {
        r"1000
2000
3000

4000

5000
6000

7000
8000
9000

10000"
            .to_string()
    }

    #[test]
    fn group_sums_ok() {
        let sums = group_sums(test_input().lines());

        assert!(sums.is_ok());

        assert_eq!(sums.unwrap(), vec![6000, 4000, 11000, 24000, 10000]);
    }

    #[test]
    fn max_group_sum_ok() {
        let res = max_group_sum(test_input().lines());

        assert!(res.is_ok());

        assert_eq!(res.unwrap(), 24000);
    }

    #[test]
    fn top_three_sum_ok() {
        let res = top_three_sum(test_input().lines());

        assert!(res.is_ok());

        assert_eq!(res.unwrap(), 45000);
    }

    #[test]
    fn same_input_same_answers() {
        assert_eq!(
            max_group_sum(test_input().lines()).unwrap(),
            max_group_sum(test_input().lines()).unwrap()
        );
        assert_eq!(
            top_three_sum(test_input().lines()).unwrap(),
            top_three_sum(test_input().lines()).unwrap()
        );
    }

    #[rstest]
    #[case("100\n200\n300", vec![600])]
    #[case("1000\n\n", vec![1000, 0])]
    #[case("1\n\n2", vec![1, 2])]
    fn group_sums_boundaries(#[case] input: &str, #[case] expected: Vec<i64>) {
        let sums = group_sums(input.lines());

        assert!(sums.is_ok());

        assert_eq!(sums.unwrap(), expected);
    }

    #[rstest]
    #[case("100", 100)]
    #[case("100\n200\n300", 600)]
    #[case("1\n\n2", 3)]
    fn top_three_sum_with_fewer_than_three_groups(#[case] input: &str, #[case] expected: i64) {
        let res = top_three_sum(input.lines());

        assert!(res.is_ok());

        assert_eq!(res.unwrap(), expected);
    }

    #[test]
    fn indented_lines_are_trimmed() {
        let res = max_group_sum("  1000\n\t2000".lines());

        assert!(res.is_ok());

        assert_eq!(res.unwrap(), 3000);
    }

    #[test]
    fn non_numeric_line_is_an_error() {
        assert!(group_sums("1000\nlembas\n2000".lines()).is_err());
    }
}

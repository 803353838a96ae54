//! The individual demonstrations.
//!
//! Every demo writes to a caller-supplied writer so it can be exercised from
//! tests with in-memory buffers.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Context;
use lazyseq::prelude::*;

const PASCAL_PROMPT: &str = "input numbers: ";
const ECHO_PROMPT: &str = "echo > ";

/// Prints FizzBuzz for `1..=count`, pulled from an unbounded range.
pub fn fizz_buzz<W: Write>(count: usize, out: &mut W) -> anyhow::Result<()> {
    let words = from_int(1)
        .to_infinity()
        .transform(|number| match (number % 3, number % 5) {
            (0, 0) => "FizzBuzz".to_string(),
            (0, _) => "Fizz".to_string(),
            (_, 0) => "Buzz".to_string(),
            _ => number.to_string(),
        })
        .take(count);

    for word in words.iter() {
        writeln!(out, "{}", word?)?;
    }
    Ok(())
}

/// Prints `start..=end`, one value per line.
pub fn count_to<W: Write>(start: i64, end: i64, out: &mut W) -> anyhow::Result<()> {
    for value in from_int(start).to(end).iter() {
        writeln!(out, "{}", value?)?;
    }
    Ok(())
}

/// Echoes every input line back, prompting before each read.
pub fn echo<B: BufRead, W: Write>(input: B, out: &mut W) -> anyhow::Result<()> {
    write!(out, "{ECHO_PROMPT}")?;
    out.flush()?;
    for line in from_reader(input).lines().iter() {
        writeln!(out, "{}", line?)?;
        write!(out, "{ECHO_PROMPT}")?;
        out.flush()?;
    }
    Ok(())
}

/// Reports whether `values` is in ascending order.
pub fn sorted<W: Write>(values: &[i64], out: &mut W) -> anyhow::Result<()> {
    let ascending = from_iterable(values)
        .each_pair()
        .satisfy_all(|pair| pair[0] <= pair[1])?;
    writeln!(out, "sorted({values:?}) = {ascending}")?;
    Ok(())
}

/// Reduces each input line of integers by summing neighbours until empty.
///
/// `1 2 3` prints `1 2 3`, `3 5`, `8`.
pub fn pascal<B: BufRead, W: Write>(input: B, out: &mut W) -> anyhow::Result<()> {
    write!(out, "{PASCAL_PROMPT}")?;
    out.flush()?;
    for line in from_reader(input).lines().iter() {
        let line = line?;
        let mut numbers = from_str(line.as_str()).split(" ").to_integer().boxed();
        loop {
            let row = numbers
                .join(" ")
                .with_context(|| format!("cannot reduce {line:?}"))?;
            if row.is_empty() {
                break;
            }
            writeln!(out, "{row}")?;
            numbers = numbers
                .each_pair()
                .transform(|pair| pair[0] + pair[1])
                .boxed();
        }
        writeln!(out, "{PASCAL_PROMPT}")?;
    }
    Ok(())
}

/// Prints a file with zero-based line numbers.
pub fn numbered<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<()> {
    let lines = LineSource::open(path)
        .with_context(|| format!("cannot open {}", path.display()))?
        .lines()
        .with_index();
    tracing::debug!(path = %path.display(), "listing file");

    for line in lines.iter() {
        writeln!(out, "{}", line?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn render(run: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
        let mut buffer = Vec::new();
        run(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[rstest]
    fn fizz_buzz_first_fifteen() {
        let output = render(|out| fizz_buzz(15, out));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[2], "Fizz");
        assert_eq!(lines[14], "FizzBuzz");
    }

    #[rstest]
    fn count_to_ten() {
        let output = render(|out| count_to(1, 10, out));
        assert_eq!(output.lines().count(), 10);
        assert!(output.ends_with("10\n"));
    }

    #[rstest]
    fn echo_repeats_lines() {
        let output = render(|out| echo("hi\nthere\n".as_bytes(), out));
        assert_eq!(output, "echo > hi\necho > there\necho > ");
    }

    #[rstest]
    #[case(&[1, 2, 3, 4], "sorted([1, 2, 3, 4]) = true\n")]
    #[case(&[1, 2, 4, 3], "sorted([1, 2, 4, 3]) = false\n")]
    fn sorted_reports(#[case] values: &[i64], #[case] expected: &str) {
        assert_eq!(render(|out| sorted(values, out)), expected);
    }

    #[rstest]
    fn pascal_reduces_each_line() {
        let output = render(|out| pascal("1 2 3\n\n".as_bytes(), out));
        assert_eq!(
            output,
            "input numbers: 1 2 3\n3 5\n8\ninput numbers: \ninput numbers: \n"
        );
    }

    #[rstest]
    fn pascal_rejects_non_numbers() {
        let mut buffer = Vec::new();
        let error = pascal("1 x\n".as_bytes(), &mut buffer).unwrap_err();
        assert!(error.to_string().contains("cannot reduce"));
    }
}

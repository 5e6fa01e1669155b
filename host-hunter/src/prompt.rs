//! Interactive scan-speed prompt.
//!
//! The worker count is asked for on every run. Anything that is not a
//! positive integer is rejected and asked for again; there is no default and
//! no upper bound.

use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const PROMPT: &str = "Enter Scan Speed [example 50]: ";
const RETRY: &str = "Invalid input. Enter a positive number: ";

/// Parse one line of input as a worker count.
pub fn parse_worker_count(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

/// Ask for the worker count until a valid answer arrives.
///
/// Returns `UnexpectedEof` if the input ends first.
pub async fn prompt_worker_count<R, W>(reader: &mut R, writer: &mut W) -> io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(PROMPT.as_bytes()).await?;
    writer.flush().await?;

    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a scan speed was entered",
            ));
        }

        if let Some(count) = parse_worker_count(&line) {
            return Ok(count);
        }

        writer.write_all(RETRY.as_bytes()).await?;
        writer.flush().await?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;
    use tokio_test::io::Builder;

    #[test]
    fn test_parse_worker_count() {
        assert_eq!(parse_worker_count("50\n"), Some(50));
        assert_eq!(parse_worker_count("  7  "), Some(7));
        assert_eq!(parse_worker_count("100000"), Some(100000));
        assert_eq!(parse_worker_count("0"), None);
        assert_eq!(parse_worker_count("-3"), None);
        assert_eq!(parse_worker_count("abc"), None);
        assert_eq!(parse_worker_count(""), None);
        assert_eq!(parse_worker_count("2.5"), None);
    }

    #[tokio::test]
    async fn test_reprompts_until_valid() {
        let mock = Builder::new()
            .read(b"-3\n")
            .read(b"abc\n")
            .read(b"5\n")
            .build();
        let mut reader = BufReader::new(mock);
        let mut output = Vec::new();

        let count = prompt_worker_count(&mut reader, &mut output).await.unwrap();

        assert_eq!(count, 5);
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with(PROMPT));
        assert_eq!(output.matches(RETRY).count(), 2);
    }

    #[tokio::test]
    async fn test_first_answer_accepted() {
        let mock = Builder::new().read(b"12\n").build();
        let mut reader = BufReader::new(mock);
        let mut output = Vec::new();

        let count = prompt_worker_count(&mut reader, &mut output).await.unwrap();

        assert_eq!(count, 12);
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    }

    #[tokio::test]
    async fn test_end_of_input_is_an_error() {
        let mock = Builder::new().read(b"nope\n").build();
        let mut reader = BufReader::new(mock);
        let mut output = Vec::new();

        let err = prompt_worker_count(&mut reader, &mut output)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}

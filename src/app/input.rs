//! Reading the list of input URLs.

use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::config::INTERACTIVE_PROMPT;

/// Reads one URL per line until a blank line or end of input.
///
/// A read error is logged and ends the input.
pub async fn read_interactive_lines<R>(reader: R) -> Vec<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut urls = Vec::new();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    break;
                }
                urls.push(trimmed.to_string());
            }
            Ok(None) => break,
            Err(e) => {
                warn!("Failed to read line from input: {e}");
                break;
            }
        }
    }
    urls
}

/// Prints the prompt and reads URLs from stdin.
pub async fn prompt_for_urls() -> Result<Vec<String>> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(format!("{INTERACTIVE_PROMPT}\n").as_bytes())
        .await
        .context("Failed to write prompt")?;
    stdout.flush().await.context("Failed to flush prompt")?;
    Ok(read_interactive_lines(BufReader::new(tokio::io::stdin())).await)
}

/// Reads URLs from a file, skipping blank lines and `#` comments.
pub async fn read_url_file(path: &Path) -> Result<Vec<String>> {
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();
    let mut urls = Vec::new();
    while let Some(line) = lines
        .next_line()
        .await
        .with_context(|| format!("Failed to read input file {}", path.display()))?
    {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        urls.push(trimmed.to_string());
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_interactive_stops_at_blank_line() {
        let input: &[u8] = b"example.com\n  https://example.org  \n\nignored.net\n";
        let urls = read_interactive_lines(input).await;
        assert_eq!(urls, vec!["example.com", "https://example.org"]);
    }

    #[tokio::test]
    async fn test_interactive_stops_at_eof() {
        let input: &[u8] = b"a.example\nb.example";
        let urls = read_interactive_lines(input).await;
        assert_eq!(urls, vec!["a.example", "b.example"]);
    }

    #[tokio::test]
    async fn test_interactive_stops_at_read_error() {
        let input: &[u8] = b"a.example\n\xff\xfe\nb.example\n";
        let urls = read_interactive_lines(input).await;
        assert_eq!(urls, vec!["a.example"]);
    }

    #[tokio::test]
    async fn test_read_url_file_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "# sites\nexample.com\n\n   \nhttp://example.org\n#x.com")
            .expect("write");
        let urls = read_url_file(file.path()).await.expect("readable");
        assert_eq!(urls, vec!["example.com", "http://example.org"]);
    }

    #[tokio::test]
    async fn test_read_url_file_missing() {
        let err = read_url_file(Path::new("/nonexistent/urls.txt"))
            .await
            .expect_err("missing file");
        assert!(err.to_string().contains("Failed to open input file"));
    }
}

use crate::prelude::*;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Where the raw text of one submission comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// `-` means stdin, anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Source::Stdin
        } else {
            Source::File(PathBuf::from(arg))
        }
    }

    pub fn name(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// Resolve positional arguments into sources, defaulting to stdin.
pub fn sources(args: &[String]) -> Vec<Source> {
    if args.is_empty() {
        vec![Source::Stdin]
    } else {
        args.iter().map(|arg| Source::from_arg(arg)).collect()
    }
}

/// Read a source as text with `\r\n` line endings folded into `\n`.
///
/// At most `limit` bytes are accepted. Reading stops as soon as one more byte
/// arrives and the source is rejected without being decoded.
pub async fn read_source(source: &Source, limit: usize) -> Result<String> {
    let read_error = |e: std::io::Error| Error::InputRead {
        source_name: source.name(),
        reason: e.to_string(),
    };

    let bytes = match source {
        Source::Stdin => read_bounded(tokio::io::stdin(), limit)
            .await
            .map_err(read_error)?,
        Source::File(path) => {
            let file = tokio::fs::File::open(path).await.map_err(read_error)?;
            read_bounded(file, limit).await.map_err(read_error)?
        }
    };

    if bytes.len() > limit {
        return Err(Error::InputTooLarge {
            source_name: source.name(),
            limit,
        }
        .into());
    }

    log::debug!("Read {} bytes from {}", bytes.len(), source.name());

    let text = decode(&source.name(), bytes)?;
    Ok(normalize_newlines(text))
}

/// Read up to `limit + 1` bytes so callers can tell an exact fit from overflow.
async fn read_bounded<R>(reader: R, limit: usize) -> std::io::Result<Vec<u8>>
where
    R: tokio::io::AsyncRead + Unpin,
{
    let mut buffer = Vec::new();
    reader
        .take(limit as u64 + 1)
        .read_to_end(&mut buffer)
        .await?;
    Ok(buffer)
}

fn decode(name: &str, bytes: Vec<u8>) -> Result<String, Error> {
    String::from_utf8(bytes).map_err(|_| Error::NotText(name.to_string()))
}

fn normalize_newlines(text: String) -> String {
    if text.contains("\r\n") {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sources_default_to_stdin() {
        assert_eq!(sources(&[]), vec![Source::Stdin]);
    }

    #[test]
    fn test_sources_from_args() {
        let args = vec!["a.fa".to_string(), "-".to_string()];
        assert_eq!(
            sources(&args),
            vec![Source::File(PathBuf::from("a.fa")), Source::Stdin]
        );
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines(">a\r\nAUGC\r\n".to_string()), ">a\nAUGC\n");
        assert_eq!(normalize_newlines(">a\nAUGC".to_string()), ">a\nAUGC");
    }

    #[test]
    fn test_decode_rejects_binary() {
        let result = decode("blob", vec![0xff, 0xfe, 0x00]);
        assert!(matches!(result, Err(Error::NotText(name)) if name == "blob"));
    }

    #[tokio::test]
    async fn test_read_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, ">mir1 desc\r\nAUGCAUGC\r\n").unwrap();

        let source = Source::File(file.path().to_path_buf());
        let text = read_source(&source, 1024).await.unwrap();
        assert_eq!(text, ">mir1 desc\nAUGCAUGC\n");
    }

    #[tokio::test]
    async fn test_read_stops_above_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![b'A'; 4096]).unwrap();

        let source = Source::File(file.path().to_path_buf());
        let err = read_source(&source, 1024).await.unwrap_err();
        assert!(err.to_string().contains("above the limit of 1024 bytes"));
    }

    #[tokio::test]
    async fn test_read_accepts_exact_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![b'A'; 1024]).unwrap();

        let source = Source::File(file.path().to_path_buf());
        let text = read_source(&source, 1024).await.unwrap();
        assert_eq!(text.len(), 1024);
    }

    #[tokio::test]
    async fn test_read_bounded_takes_one_byte_past_limit() {
        let bytes = read_bounded(&b"AUGCAUGC"[..], 4).await.unwrap();
        assert_eq!(bytes, b"AUGCA");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = Source::File(dir.path().join("missing.fa"));

        let err = read_source(&source, 1024).await.unwrap_err();
        assert!(err.to_string().contains("missing.fa"));
    }
}

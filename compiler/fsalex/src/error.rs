use fsalex_core::ScanError;

/// Failures of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad command line. Printed together with the command's usage line.
    #[error("{0}")]
    Usage(String),
    #[error("cannot find file '{0}'")]
    NotFound(String),
    #[error("permission denied reading '{0}'")]
    PermissionDenied(String),
    #[error("'{0}' contains invalid UTF-8 data")]
    InvalidUtf8(String),
    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("error writing output: {0}")]
    Write(#[source] std::io::Error),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl CliError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }

    pub(crate) fn from_read(path: &str, err: std::io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => CliError::NotFound(path),
            std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied(path),
            std::io::ErrorKind::InvalidData => CliError::InvalidUtf8(path),
            _ => CliError::Read { path, source: err },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsalex_core::Span;

    #[test]
    fn read_errors_by_kind() {
        let not_found = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert_eq!(
            CliError::from_read("a.txt", not_found).to_string(),
            "cannot find file 'a.txt'"
        );
        let bad_utf8 = std::io::Error::from(std::io::ErrorKind::InvalidData);
        assert_eq!(
            CliError::from_read("b.bin", bad_utf8).to_string(),
            "'b.bin' contains invalid UTF-8 data"
        );
    }

    #[test]
    fn scan_error_is_transparent() {
        let err = CliError::from(ScanError::UnexpectedCharacter {
            ch: ';',
            span: Span::new(3, 4),
        });
        assert_eq!(err.to_string(), "unexpected character ';' at 3..4");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn usage_exit_code() {
        assert_eq!(CliError::Usage("missing input".into()).exit_code(), 2);
    }
}

//! Error handling and exit codes.

use folio_core::constants::exit_codes;
use folio_core::FolioError;

/// Map an engine error to the process exit code.
#[allow(dead_code)]
pub fn handle_error(err: &FolioError) -> i32 {
    match err {
        FolioError::Content(_) => exit_codes::ERROR_CONFIG,
        FolioError::Io(_) => exit_codes::ERROR_GENERIC,
        FolioError::Cancelled => exit_codes::ERROR_CANCELED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&FolioError::Cancelled), 130);
        assert_eq!(handle_error(&FolioError::Content("bad".into())), 4);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(handle_error(&FolioError::Io(io)), 1);
    }
}

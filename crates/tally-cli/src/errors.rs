//! CLI error classification for exit codes.

use tally_core::TallyError;

use crate::constants::exit_codes;

/// Pick the process exit code for an error returned by a command handler.
///
/// Core errors anywhere in the chain decide the code; anything else is a
/// general failure.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.chain().find_map(|cause| cause.downcast_ref::<TallyError>()) {
        Some(TallyError::Parse(_)) | Some(TallyError::OutOfRange { .. }) => {
            exit_codes::INVALID_INPUT
        }
        Some(TallyError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(TallyError::PersistenceRead(_)) | Some(TallyError::PersistenceWrite(_)) => {
            exit_codes::STORAGE
        }
        None => 1,
    }
}

/// Contextual hint for common failures.
pub fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    match err.chain().find_map(|cause| cause.downcast_ref::<TallyError>()) {
        Some(TallyError::OutOfRange { .. }) => {
            Some("Run `tally list` to see current expense numbers.")
        }
        Some(TallyError::NotFound(_)) => {
            Some("Run `tally categories` to see recorded categories.")
        }
        Some(TallyError::PersistenceRead(_)) => {
            Some("Fix or move the expenses file, or point --file elsewhere.")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = anyhow::Error::new(TallyError::OutOfRange { index: 9, len: 1 });
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);

        let err = anyhow::Error::new(TallyError::NotFound("Food".into()));
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);

        let err = anyhow::Error::new(TallyError::PersistenceWrite("denied".into()))
            .context("Could not save expenses");
        assert_eq!(exit_code_for(&err), exit_codes::STORAGE);

        assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), 1);
    }

    #[test]
    fn test_hints() {
        let err = anyhow::Error::new(TallyError::OutOfRange { index: 9, len: 1 });
        assert!(hint_for(&err).unwrap().contains("tally list"));
        assert!(hint_for(&anyhow::anyhow!("boom")).is_none());
    }
}

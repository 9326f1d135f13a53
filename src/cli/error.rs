use crate::file::BindPadError;

// Exit codes for CLI automation
pub const SUCCESS: i32 = 0;
pub const ERROR: i32 = 1;
pub const NOT_FOUND: i32 = 2;
pub const INVALID_INPUT: i32 = 3;

/// Exit code for an error surfaced by a command handler
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<BindPadError>() {
        Some(BindPadError::MissingInput(_)) | Some(BindPadError::SameFile(_)) => INVALID_INPUT,
        Some(BindPadError::FileNotFound(_)) => NOT_FOUND,
        Some(BindPadError::Io { .. }) | None => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let err = anyhow::Error::new(BindPadError::MissingInput("WoW path and account name"));
        assert_eq!(exit_code_for(&err), INVALID_INPUT);

        let err = anyhow::Error::new(BindPadError::FileNotFound(PathBuf::from("x")));
        assert_eq!(exit_code_for(&err), NOT_FOUND);

        let err = anyhow::Error::new(BindPadError::SameFile(PathBuf::from("BindPad.lua")));
        assert_eq!(exit_code_for(&err), INVALID_INPUT);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), ERROR);
    }
}

// src/exit.rs
//! Process exit codes for the `follownet` binary.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum FollownetExit {
    /// Command completed.
    Success = 0,
    /// Generic error (IO, invalid network file, rejected seed).
    Error = 1,
    /// The named user does not exist.
    NotFound = 2,
}

impl FollownetExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for FollownetExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

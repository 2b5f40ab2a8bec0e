//! Submission Mode
//!
//! Selected by the caller (the UI's toggle between the two screens);
//! determines which validation and remote-call sequence applies.

use derive_more::Display;

/// Which flow a submission follows
///
/// The display form is the operation name used in fallback error wording,
/// so it is part of the user-visible contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Mode {
    /// Create a session for an existing account
    #[display("signIn")]
    SignIn,
    /// Create an account, then sign straight in
    #[display("signUp")]
    SignUp,
}

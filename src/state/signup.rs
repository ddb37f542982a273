//! Signup flow state machine.
//!
//! Registration is a two-step remote sequence: create an identity from the
//! credentials, then insert one profile row keyed by the identity reference
//! the service issued. A local password check short-circuits before any
//! network call. There is no compensating rollback: when the profile insert
//! fails the identity already exists and stays behind; resubmitting starts
//! a fresh attempt from `Editing`.
//!
//! The machine is plain data so the full sequence is unit-testable without
//! a browser. Pages drive it through an `RwSignal` and perform the actual
//! network calls between transitions.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use serde::Serialize;

use crate::net::types::Credentials;
use crate::util::password;

/// Mutable registration form state, updated field-by-field.
///
/// `age` stays a raw string: the form never interprets it, and the service
/// coerces on insert.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub age: String,
    pub gender: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

/// Profile fields minus the identity key.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileDraft {
    pub full_name: String,
    pub age: String,
    pub gender: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

/// Immutable per-submission snapshot, taken at submit time so in-flight
/// requests are isolated from subsequent form edits.
#[derive(Clone, Debug, PartialEq)]
pub struct SignupRequest {
    pub credentials: Credentials,
    pub profile: ProfileDraft,
}

/// Profile row keyed by a freshly issued identity reference.
///
/// Only [`SignupState::identity_created`] constructs one, so profile
/// insertion can never precede identity creation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileRecord {
    id: String,
    #[serde(flatten)]
    draft: ProfileDraft,
}

impl ProfileRecord {
    /// Identity reference this row is keyed by.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Phases of one registration attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignupPhase {
    #[default]
    Editing,
    Validating,
    CreatingIdentity,
    CreatingProfile,
    Done,
}

/// Current phase plus the inline error message, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupState {
    pub phase: SignupPhase,
    pub error: Option<String>,
}

impl SignupState {
    /// Begin a submission attempt from the current form contents.
    ///
    /// Runs the local password check first; on failure the machine returns
    /// to `Editing` with the fixed policy message and yields `None`, so no
    /// network call is made. On success it enters `CreatingIdentity` and
    /// yields the immutable request snapshot. Ignored while a previous
    /// attempt's remote call is still in flight.
    pub fn submit(&mut self, form: &RegisterForm) -> Option<SignupRequest> {
        if self.busy() {
            return None;
        }
        self.phase = SignupPhase::Validating;
        self.error = None;

        if !password::is_valid(&form.password) {
            self.phase = SignupPhase::Editing;
            self.error = Some(password::PASSWORD_RULE_MESSAGE.to_owned());
            return None;
        }

        self.phase = SignupPhase::CreatingIdentity;
        Some(SignupRequest {
            credentials: Credentials {
                email: form.email.clone(),
                password: form.password.clone(),
            },
            profile: ProfileDraft {
                full_name: form.full_name.clone(),
                age: form.age.clone(),
                gender: form.gender.clone(),
                city: form.city.clone(),
                state: form.state.clone(),
                country: form.country.clone(),
            },
        })
    }

    /// Identity creation succeeded: enter `CreatingProfile` and key the
    /// profile row by the issued identity reference.
    pub fn identity_created(&mut self, identity_ref: String, draft: ProfileDraft) -> ProfileRecord {
        self.phase = SignupPhase::CreatingProfile;
        ProfileRecord { id: identity_ref, draft }
    }

    /// Identity creation failed; nothing was created remotely. The service
    /// message is displayed verbatim.
    pub fn identity_failed(&mut self, message: String) {
        self.phase = SignupPhase::Editing;
        self.error = Some(message);
    }

    /// Profile insertion succeeded; the page navigates to the dashboard.
    pub fn profile_created(&mut self) {
        self.phase = SignupPhase::Done;
        self.error = None;
    }

    /// Profile insertion failed. The identity created in the previous step
    /// is not rolled back; the service message is displayed verbatim.
    pub fn profile_failed(&mut self, message: String) {
        self.phase = SignupPhase::Editing;
        self.error = Some(message);
    }

    /// A remote call is in flight for this attempt.
    pub fn busy(&self) -> bool {
        matches!(self.phase, SignupPhase::CreatingIdentity | SignupPhase::CreatingProfile)
    }
}

//! Mock session state.

use crate::form::{AuthForm, AuthMode};
use crate::user::{email_local_part, User};
use crate::AuthError;
use tracing::{debug, info};

/// Client-held "current user" plus the state of the login/register dialog.
///
/// Nothing here talks to a server: a submitted form only needs its required
/// fields to be present.
#[derive(Debug, Clone, Default)]
pub struct MockSession {
    current: Option<User>,
    dialog: Option<AuthMode>,
}

impl MockSession {
    /// Create a signed-out session with the dialog closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Open the dialog in `mode`.
    pub fn open_dialog(&mut self, mode: AuthMode) {
        self.dialog = Some(mode);
    }

    /// Dismiss the dialog without submitting.
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Mode of the open dialog, if one is open.
    pub fn dialog(&self) -> Option<AuthMode> {
        self.dialog
    }

    /// Submit the form in `mode`.
    ///
    /// On success the current user is replaced and the dialog closes. The
    /// display name is the typed name when registering and the email's local
    /// part when logging in. On a validation failure nothing changes.
    pub fn submit(&mut self, mode: AuthMode, form: &AuthForm) -> Result<&User, AuthError> {
        if let Err(e) = form.validate(mode) {
            debug!(%mode, error = %e, "Rejected auth form");
            return Err(e);
        }

        let name = match mode {
            AuthMode::Register => form.name.clone(),
            AuthMode::Login => email_local_part(&form.email).to_string(),
        };

        info!(%mode, name = %name, "Signed in");
        self.dialog = None;
        Ok(&*self.current.insert(User::new(name, form.email.clone())))
    }

    /// Sign out. Always succeeds, even when nobody is signed in.
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            info!(name = %user.name, "Signed out");
        }
    }
}

//! Account service
//!
//! Sign-up, sign-in and sign-out. A successful sign-in or sign-up makes the
//! user the active session and loads their partition in the same call.

use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::audit::EntityType;
use crate::config::Settings;
use crate::crypto::{hash_password, verify_password, Verification};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{require, UserRecord};
use crate::state::AppState;
use crate::storage::{Storage, UserSnapshot};

/// Raw sign-up form
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: Zeroizing<String>,
    pub confirm_password: Zeroizing<String>,
}

/// Service for account lifecycle
pub struct AuthService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> AuthService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Register a new user and sign them in
    ///
    /// Nothing is written when validation fails or the email is taken. Once
    /// the record is saved the session is active even if auditing fails.
    pub fn sign_up(&self, state: &mut AppState, input: SignUpInput) -> LedgerResult<UserRecord> {
        let name = input.name.trim();
        let email = input.email.trim();
        require(&[
            name,
            email,
            input.password.as_str(),
            input.confirm_password.as_str(),
        ])?;

        if *input.password != *input.confirm_password {
            return Err(LedgerError::Validation("Passwords do not match".into()));
        }

        if self.storage.users.find_by_email(email).is_some() {
            return Err(LedgerError::duplicate_email(email));
        }

        let hash = hash_password(&input.password, &self.settings.password_hashing)?;
        let user = self.storage.users.create(UserRecord::new(
            email,
            hash,
            name,
            self.settings.default_currency.clone(),
        ))?;

        info!(email = %user.email, "account created");
        state.activate(self.storage, user.clone())?;

        // the account already exists; a missing audit line must not undo it
        if let Err(e) = self.storage.log_create(
            EntityType::User,
            user.email.clone(),
            Some(user.name.clone()),
            &UserSnapshot::from(&user),
        ) {
            warn!(email = %user.email, error = %e, "could not audit account creation");
        }

        Ok(user)
    }

    /// Authenticate and make the user the active session
    ///
    /// Unknown email and wrong password fail with the same error. A record
    /// still holding a legacy password is upgraded to an Argon2 hash.
    pub fn sign_in(
        &self,
        state: &mut AppState,
        email: &str,
        password: &str,
    ) -> LedgerResult<UserRecord> {
        let email = email.trim();
        require(&[email, password])?;

        let mut user = self
            .storage
            .users
            .find_by_email(email)
            .ok_or(LedgerError::AuthenticationFailed)?;

        match verify_password(password, &user.password_hash) {
            Verification::Mismatch => return Err(LedgerError::AuthenticationFailed),
            Verification::Match => {}
            Verification::MatchLegacy => {
                if let Err(e) = self.upgrade_password(&mut user, password) {
                    warn!(email = %user.email, error = %e, "could not upgrade legacy password");
                }
            }
        }

        state.activate(self.storage, user.clone())?;
        info!(email = %user.email, "signed in");
        Ok(user)
    }

    /// Forget the session and every resident collection
    pub fn sign_out(&self, state: &mut AppState) -> LedgerResult<()> {
        self.storage.sessions.clear()?;
        state.reset();
        Ok(())
    }

    fn upgrade_password(&self, user: &mut UserRecord, password: &str) -> LedgerResult<()> {
        let mut upgraded = user.clone();
        upgraded.password_hash = hash_password(password, &self.settings.password_hashing)?;
        self.storage.users.update(&upgraded)?;
        *user = upgraded;
        info!(email = %user.email, "upgraded legacy password hash");
        Ok(())
    }
}

//! Content disclaimer shown once per browsing session before reviews are revealed.
use crate::errors::StorageError;
use crate::storage::SessionStore;
use leptos::logging::{error, log};

pub const DISCLAIMER_FLAG_KEY: &str = "disclaimerAccepted";
pub const DISCLAIMER_FLAG_VALUE: &str = "true";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisclaimerState {
    /// Session flag not read yet, which is always the case while rendering on the server.
    #[default]
    Pending,
    /// Flag absent: the modal is up and the reviews stay hidden.
    Prompting,
    /// Flag present or just acknowledged: reviews are visible.
    Accepted,
}

impl DisclaimerState {
    /// Reads the session flag. Any non-empty value counts as accepted.
    ///
    /// An unreadable store is treated like a missing flag, so the visitor is asked again.
    pub fn check(store: &dyn SessionStore) -> Self {
        match store.get(DISCLAIMER_FLAG_KEY) {
            Ok(Some(value)) if !value.is_empty() => {
                log!("[DISCLAIMER] Already accepted in this session");
                DisclaimerState::Accepted
            }
            Ok(_) => {
                log!("[DISCLAIMER] Not accepted yet, prompting");
                DisclaimerState::Prompting
            }
            Err(err) => {
                error!("[DISCLAIMER] Could not read session flag: {}", err);
                DisclaimerState::Prompting
            }
        }
    }

    /// Records the acknowledgement for the rest of the session.
    pub fn acknowledge(store: &dyn SessionStore) -> Result<Self, StorageError> {
        store.set(DISCLAIMER_FLAG_KEY, DISCLAIMER_FLAG_VALUE)?;
        log!("[DISCLAIMER] Acknowledged");
        Ok(DisclaimerState::Accepted)
    }

    /// Like [`DisclaimerState::acknowledge`], but a failed write still reveals the
    /// content for the current view.
    pub fn acknowledge_or_reveal(store: &dyn SessionStore) -> Self {
        Self::acknowledge(store).unwrap_or_else(|err| {
            error!("[DISCLAIMER] Could not persist acknowledgement: {}", err);
            DisclaimerState::Accepted
        })
    }

    pub fn modal_visible(self) -> bool {
        self == DisclaimerState::Prompting
    }

    pub fn content_visible(self) -> bool {
        self == DisclaimerState::Accepted
    }
}

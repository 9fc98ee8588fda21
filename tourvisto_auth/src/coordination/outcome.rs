use serde::Serialize;

use crate::userdb::UserRecord;

use super::errors::CoordinationError;

/// Instruction to send the client elsewhere, usually the sign-in route
///
/// This is a normal result of a loader, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectSignal {
    location: String,
}

impl RedirectSignal {
    pub fn to(location: &str) -> Self {
        Self {
            location: location.to_string(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Result of a route loader
#[derive(Debug, Clone)]
pub enum LoaderOutcome<T> {
    Ready(T),
    /// The caller must be redirected, nothing else happened
    Redirect(RedirectSignal),
    /// Infrastructure failed; the error has already been logged
    Unavailable(CoordinationError),
}

impl<T> LoaderOutcome<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn redirect(&self) -> Option<&RedirectSignal> {
        match self {
            Self::Redirect(signal) => Some(signal),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoaderOutcome<U> {
        match self {
            Self::Ready(value) => LoaderOutcome::Ready(f(value)),
            Self::Redirect(signal) => LoaderOutcome::Redirect(signal),
            Self::Unavailable(err) => LoaderOutcome::Unavailable(err),
        }
    }
}

impl<T> From<RedirectSignal> for LoaderOutcome<T> {
    fn from(signal: RedirectSignal) -> Self {
        Self::Redirect(signal)
    }
}

/// What reconciliation did with the signed-in account
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciled {
    Created(UserRecord),
    /// A record for the account existed already, or was created concurrently
    AlreadyStored { account_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_signal_location() {
        let signal = RedirectSignal::to("/sign-in");
        assert_eq!(signal.location(), "/sign-in");
        assert_eq!(
            serde_json::to_value(&signal).unwrap(),
            serde_json::json!({"location": "/sign-in"})
        );
    }

    #[test]
    fn test_loader_outcome_accessors() {
        let ready: LoaderOutcome<u32> = LoaderOutcome::Ready(7);
        assert!(ready.is_ready());
        assert_eq!(ready.map(|v| v * 2).ready(), Some(14));

        let redirect: LoaderOutcome<u32> = RedirectSignal::to("/sign-in").into();
        assert!(redirect.is_redirect());
        assert_eq!(redirect.redirect().map(|s| s.location()), Some("/sign-in"));
        assert!(redirect.map(|v| v + 1).ready().is_none());

        let unavailable: LoaderOutcome<u32> =
            LoaderOutcome::Unavailable(CoordinationError::Database("down".to_string()));
        assert!(unavailable.is_unavailable());
        assert!(unavailable.redirect().is_none());
    }
}

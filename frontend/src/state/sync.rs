//! Write/read ordering shared by every page.
//!
//! Writes are never merged into a cached list. A successful write is always
//! followed by a fresh read of the authoritative list, and only that read may
//! replace what the page shows.

use crate::api::RequestError;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome<W, R> {
    /// The write and the follow-up read both succeeded.
    Settled { written: W, reloaded: R },
    /// The write failed; no read was issued.
    WriteFailed(RequestError),
    /// The write was acknowledged but the list could not be re-read.
    ReloadFailed { written: W, error: RequestError },
}

impl<W, R> MutationOutcome<W, R> {
    pub fn error(&self) -> Option<&RequestError> {
        match self {
            Self::Settled { .. } => None,
            Self::WriteFailed(error) | Self::ReloadFailed { error, .. } => Some(error),
        }
    }

    pub fn write_succeeded(&self) -> bool {
        !matches!(self, Self::WriteFailed(_))
    }
}

/// Runs `write`, then builds and awaits the reload only once the write has
/// been acknowledged.
pub async fn mutate_then_reload<W, R, WF, RF, Reload>(
    write: WF,
    reload: Reload,
) -> MutationOutcome<W, R>
where
    WF: Future<Output = Result<W, RequestError>>,
    Reload: FnOnce() -> RF,
    RF: Future<Output = Result<R, RequestError>>,
{
    let written = match write.await {
        Ok(written) => written,
        Err(error) => return MutationOutcome::WriteFailed(error),
    };
    match reload().await {
        Ok(reloaded) => MutationOutcome::Settled { written, reloaded },
        Err(error) => MutationOutcome::ReloadFailed { written, error },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchToken(u64);

/// Hands out increasing tokens; only the newest one may apply its response.
#[derive(Debug, Clone, Default)]
pub struct FetchSequencer {
    latest: Rc<Cell<u64>>,
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> FetchToken {
        let token = self.latest.get().wrapping_add(1);
        self.latest.set(token);
        FetchToken(token)
    }

    pub fn is_current(&self, token: FetchToken) -> bool {
        self.latest.get() == token.0
    }
}

use leptos::*;

/// How long a success message stays visible.
pub const SUCCESS_DISPLAY_MS: u32 = 3000;

/// Per-page request lifecycle: `Idle -> Loading -> (Success | Error)`.
///
/// Success returns to `Idle` after [`SUCCESS_DISPLAY_MS`]; an error stays
/// until dismissed or replaced by the next request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl RequestStatus {
    pub fn begin(&mut self) {
        *self = Self::Loading;
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        *self = Self::Success(message.into());
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Error(message.into());
    }

    pub fn dismiss(&mut self) {
        if matches!(self, Self::Success(_) | Self::Error(_)) {
            *self = Self::Idle;
        }
    }

    /// Clears a success message, unless a newer state has replaced it.
    pub fn expire(&mut self, message: &str) {
        if matches!(self, Self::Success(current) if current == message) {
            *self = Self::Idle;
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn success(&self) -> Option<&str> {
        match self {
            Self::Success(message) => Some(message),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Moves `status` to `Success(message)` and schedules its expiry.
pub fn show_success(status: RwSignal<RequestStatus>, message: String) {
    status.update(|state| state.succeed(message.clone()));
    schedule_expiry(status, message);
}

#[cfg(target_arch = "wasm32")]
fn schedule_expiry(status: RwSignal<RequestStatus>, message: String) {
    gloo_timers::callback::Timeout::new(SUCCESS_DISPLAY_MS, move || {
        let _ = status.try_update(|state| state.expire(&message));
    })
    .forget();
}

// Host renders have no event loop to fire the timer.
#[cfg(not(target_arch = "wasm32"))]
fn schedule_expiry(_status: RwSignal<RequestStatus>, _message: String) {}

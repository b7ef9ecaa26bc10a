use std::mem;

use super::{ChannelClosed, ReleaseError, Resource};

/// The lifecycle of a channel: `Open -> Closed`, with no way back.
pub(crate) enum State<R> {
    Open(R),
    Closed,
}

/// Owns a channel's resource and guarantees it is released exactly once, by the first `close` or
/// otherwise on drop.
pub(crate) struct Channel<R: Resource> {
    state: State<R>,
}

impl<R: Resource> Channel<R> {
    pub const fn new(resource: R) -> Channel<R> {
        Channel {
            state: State::Open(resource),
        }
    }

    pub const fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    pub const fn get_mut(&mut self) -> Result<&mut R, ChannelClosed> {
        match &mut self.state {
            State::Open(resource) => Ok(resource),
            State::Closed => Err(ChannelClosed),
        }
    }

    /// Transitions to `Closed`, releasing the resource if this is the first call.
    pub fn close(&mut self) -> Result<(), ReleaseError> {
        match mem::replace(&mut self.state, State::Closed) {
            State::Open(resource) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("releasing channel resource");
                resource.release()
            },
            State::Closed => Ok(()),
        }
    }
}

impl<R: Resource> Drop for Channel<R> {
    fn drop(&mut self) {
        if let Err(error) = self.close() {
            report_on_drop(&error);
        }
    }
}

/// Reports an error that happened while dropping a channel, when there is no caller to return it
/// to.
pub(crate) fn report_on_drop(error: &ReleaseError) {
    #[cfg(feature = "tracing")]
    tracing::warn!(%error, "failed to release channel resource on drop");
    #[cfg(not(feature = "tracing"))]
    let _ = error;
}

use serde::{Deserialize, Serialize};

use crate::interaction::HighlightState;

/// Repaint classes ordered by cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FrameRequestKind {
    ClearHighlight,
    Highlight,
    Full,
}

/// Work waiting for the next animation frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FrameRequest {
    /// Remove the highlight overlay and its mask.
    ClearHighlight,
    /// Replace the highlight overlay with this state.
    Highlight(HighlightState),
    /// Remount the surface and redraw every base layer.
    Full,
}

impl FrameRequest {
    #[must_use]
    pub fn kind(&self) -> FrameRequestKind {
        match self {
            Self::ClearHighlight => FrameRequestKind::ClearHighlight,
            Self::Highlight(_) => FrameRequestKind::Highlight,
            Self::Full => FrameRequestKind::Full,
        }
    }

    /// Coalesces `next` into `self`.
    ///
    /// A pending full render absorbs everything, since it drops the highlight
    /// anyway. Between highlight draws and removals the latest request wins.
    #[must_use]
    pub fn merge(self, next: Self) -> Self {
        match (self, next) {
            (Self::Full, _) | (_, Self::Full) => Self::Full,
            (_, latest) => latest,
        }
    }
}

/// Result of one `flush_frame` tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameOutcome {
    /// Nothing was pending.
    Idle,
    FullRender,
    HighlightDrawn { series_index: usize },
    HighlightCleared,
}

/// Single-slot frame scheduler.
///
/// Holds at most one pending request; every new request is merged into it so
/// a burst of events between two frames costs one repaint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameScheduler {
    pending: Option<FrameRequest>,
    merged_requests: u64,
}

impl FrameScheduler {
    pub fn request(&mut self, request: FrameRequest) {
        self.pending = Some(match self.pending.take() {
            Some(current) => {
                self.merged_requests += 1;
                current.merge(request)
            }
            None => request,
        });
    }

    /// Empties the slot, returning what was pending.
    pub fn take(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn pending(&self) -> Option<&FrameRequest> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn pending_kind(&self) -> Option<FrameRequestKind> {
        self.pending.as_ref().map(FrameRequest::kind)
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Requests absorbed into an already pending one.
    #[must_use]
    pub fn merged_requests(&self) -> u64 {
        self.merged_requests
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameRequest, FrameRequestKind, FrameScheduler};

    #[test]
    fn full_render_absorbs_later_requests() {
        let mut scheduler = FrameScheduler::default();
        scheduler.request(FrameRequest::Full);
        scheduler.request(FrameRequest::ClearHighlight);
        assert_eq!(scheduler.pending_kind(), Some(FrameRequestKind::Full));
    }

    #[test]
    fn clear_after_full_stays_full_and_take_empties_slot() {
        let mut scheduler = FrameScheduler::default();
        scheduler.request(FrameRequest::ClearHighlight);
        scheduler.request(FrameRequest::Full);
        assert_eq!(scheduler.take(), Some(FrameRequest::Full));
        assert!(!scheduler.has_pending());
        assert_eq!(scheduler.merged_requests(), 1);
    }

    #[test]
    fn many_full_requests_collapse_into_one() {
        let mut scheduler = FrameScheduler::default();
        for _ in 0..10 {
            scheduler.request(FrameRequest::Full);
        }
        assert_eq!(scheduler.take(), Some(FrameRequest::Full));
        assert_eq!(scheduler.take(), None);
    }
}

//! Transient status messages, one slot per notification region.
//!
//! Auto-hide is modelled with a generation counter rather than a timer
//! handle: every `notify` or `hide` bumps the slot's generation and hands
//! out a [`DismissTicket`]. A ticket only hides the slot if nothing has been
//! shown there since it was issued, which gives "restart the timer on every
//! new notification" without owning any timer.

/// Delay before a notification hides itself.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// The two independent notification areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeRegion {
    Query,
    Management,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

/// Handle for one scheduled auto-hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTicket {
    pub region: NoticeRegion,
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Slot {
    notice: Option<Notice>,
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    query: Slot,
    management: Slot,
}

impl Notifications {
    fn slot(&self, region: NoticeRegion) -> &Slot {
        match region {
            NoticeRegion::Query => &self.query,
            NoticeRegion::Management => &self.management,
        }
    }

    fn slot_mut(&mut self, region: NoticeRegion) -> &mut Slot {
        match region {
            NoticeRegion::Query => &mut self.query,
            NoticeRegion::Management => &mut self.management,
        }
    }

    /// Show `message` in `region`, replacing whatever is there.
    ///
    /// The caller schedules the returned ticket for [`NOTIFICATION_TIMEOUT_MS`].
    pub fn notify(
        &mut self,
        region: NoticeRegion,
        message: impl Into<String>,
        severity: Severity,
    ) -> DismissTicket {
        let slot = self.slot_mut(region);
        slot.generation += 1;
        slot.notice = Some(Notice {
            message: message.into(),
            severity,
        });
        DismissTicket {
            region,
            generation: slot.generation,
        }
    }

    /// Hide `region` immediately and invalidate its pending ticket.
    pub fn hide(&mut self, region: NoticeRegion) {
        let slot = self.slot_mut(region);
        slot.generation += 1;
        slot.notice = None;
    }

    /// Apply an expired ticket. Returns whether anything was hidden.
    pub fn dismiss(&mut self, ticket: DismissTicket) -> bool {
        let slot = self.slot_mut(ticket.region);
        if slot.generation != ticket.generation || slot.notice.is_none() {
            return false;
        }
        slot.notice = None;
        true
    }

    pub fn current(&self, region: NoticeRegion) -> Option<&Notice> {
        self.slot(region).notice.as_ref()
    }

    pub fn is_visible(&self, region: NoticeRegion) -> bool {
        self.current(region).is_some()
    }
}

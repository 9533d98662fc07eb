//=========================================================================
// Event Collector
//=========================================================================
//
// Scroll/resize event collection with bounded draining.
//
// Architecture:
//   Host → ScrollNotifier → Sender<ContainerEvent>
//                                 ↓
//   Controller::on_frame() → EventCollector::collect_frame() → dirty
//
// Events carry no geometry. Any number of them within one frame collapse
// into a single recompute pass.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::warn;

//=== ContainerEvent ======================================================

/// Notifications a host sends for the observed scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerEvent {
    Scrolled,
    Resized,
}

//=== ScrollNotifier ======================================================

/// Cloneable handle the host uses to report container events.
///
/// Sending never blocks and never fails visibly: if the controller is gone
/// the event is dropped.
#[derive(Debug, Clone)]
pub struct ScrollNotifier {
    sender: Sender<ContainerEvent>,
}

impl ScrollNotifier {
    pub fn scrolled(&self) {
        self.notify(ContainerEvent::Scrolled);
    }

    pub fn resized(&self) {
        self.notify(ContainerEvent::Resized);
    }

    pub fn notify(&self, event: ContainerEvent) {
        // A closed channel means the controller was dropped.
        let _ = self.sender.send(event);
    }
}

//=== EventCollector ======================================================

/// Drains container events once per frame.
pub struct EventCollector {
    sender: Sender<ContainerEvent>,
    receiver: Receiver<ContainerEvent>,
}

impl EventCollector {
    const MAX_EVENTS_PER_FRAME: usize = 1024;

    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Creates a notifier feeding this collector.
    pub fn notifier(&self) -> ScrollNotifier {
        ScrollNotifier { sender: self.sender.clone() }
    }

    /// Drains pending events and returns true if at least one arrived.
    ///
    /// Draining is bounded so a host flooding the channel cannot stall a
    /// frame; the remainder is picked up on the next one.
    pub fn collect_frame(&mut self) -> bool {
        let mut drained = 0;

        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(_) => drained += 1,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!("Container event backlog: drained {} events this frame", drained);
        }

        drained > 0
    }
}

impl Default for EventCollector {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

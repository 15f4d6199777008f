//! Signal/slot system for Slide Lattice.
//!
//! Controllers in this workspace report events to their host (a tapped title,
//! a finished layout pass, a selection waiting for its page transition) by
//! emitting signals. Connected slots (callbacks) are invoked in response.
//!
//! All title strip work happens on the UI thread, so slots are always invoked
//! directly in the emitting thread. There is no queued delivery.
//!
//! # Key Types
//!
//! - [`Signal<Args>`]: a notification slots connect to
//! - [`ConnectionId`]: handle for disconnecting one slot
//! - [`ConnectionGuard`]: disconnects its slot when dropped
//!
//! # Example
//!
//! ```
//! use slide_lattice_core::Signal;
//!
//! let page_tapped = Signal::<usize>::new();
//! let id = page_tapped.connect(|index| println!("tapped page {index}"));
//!
//! page_tapped.emit(2);
//! page_tapped.disconnect(id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Identifies one connected slot; pass it to [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A notification with any number of connected slots.
///
/// Emitting runs every slot with a reference to the arguments, in the order
/// the slots were connected. `Args` is `()` for bare notifications and a
/// tuple such as `(usize, SelectionCompletion)` when several values travel
/// together.
pub struct Signal<Args> {
    slots: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    /// Set while emission is suppressed.
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a signal with nothing connected.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a closure. Keep the returned id to disconnect it later.
    ///
    /// ```
    /// use slide_lattice_core::Signal;
    ///
    /// let layout_done = Signal::<()>::new();
    /// let id = layout_done.connect(|_| println!("strip laid out"));
    /// layout_done.emit(());
    /// assert!(layout_done.disconnect(id));
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Remove one slot. Returns whether `id` was still connected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    /// Remove every slot.
    pub fn disconnect_all(&self) {
        self.slots.lock().clear();
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Suppress or resume emission. A blocked signal drops every `emit`.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Whether emission is suppressed.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Run every connected slot with `args`, unless blocked.
    ///
    /// Slots are collected before any runs, so a slot may connect to or
    /// disconnect from this same signal.
    #[tracing::instrument(skip_all, target = "slide_lattice_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = self.slots.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

/// A connection guard that disconnects its slot when dropped.
///
/// Created via [`Signal::connect_scoped`]. The guard borrows the signal, so it
/// cannot outlive it.
///
/// # Example
///
/// ```
/// use slide_lattice_core::Signal;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let signal = Signal::<usize>::new();
/// let taps = Arc::new(AtomicUsize::new(0));
/// {
///     let taps_clone = taps.clone();
///     let _guard = signal.connect_scoped(move |_| {
///         taps_clone.fetch_add(1, Ordering::SeqCst);
///     });
///     signal.emit(3);
/// }
/// signal.emit(4); // slot was disconnected with the guard
/// assert_eq!(taps.load(Ordering::SeqCst), 1);
/// ```
pub struct ConnectionGuard<'a, Args: 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: 'static> ConnectionGuard<'_, Args> {
    /// The guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: 'static> Signal<Args> {
    /// Connect a slot that stays connected only while the returned guard lives.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard { signal: self, id }
    }
}

impl<Args: 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

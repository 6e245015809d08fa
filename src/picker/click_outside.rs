//! Outside-click detection.
//!
//! The rendering layer owns a set of [`RegionHandle`]s and records the rectangle
//! it last drew for each of them. [`ClickOutside`] installs a capture-phase
//! listener on the [`PointerDocument`] and fires its callback when a press lands
//! in none of the regions. Capture listeners run before any bubble listener, so
//! the callback always observes the press before a component reacts to it by
//! moving focus.

use ratatui::layout::Rect;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// A pointer press in terminal cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPress {
    pub column: u16,
    pub row: u16,
}

impl PointerPress {
    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Capture,
    Bubble,
}

type Listener = Rc<dyn Fn(&PointerPress)>;

struct Entry {
    id: u64,
    phase: Phase,
    listener: Listener,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Document-level pointer dispatcher
#[derive(Clone, Default)]
pub struct PointerDocument {
    registry: Rc<RefCell<Registry>>,
}

impl PointerDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays installed until the returned guard is dropped
    #[must_use = "dropping the guard removes the listener"]
    pub fn add_listener(&self, phase: Phase, listener: impl Fn(&PointerPress) + 'static) -> ListenerGuard {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push(Entry {
            id,
            phase,
            listener: Rc::new(listener),
        });

        ListenerGuard {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    /// Deliver a press to every capture listener, then every bubble listener
    pub fn dispatch_press(&self, press: PointerPress) {
        // Snapshot first so listeners may install or remove listeners
        let (capture, bubble): (Vec<_>, Vec<_>) = {
            let registry = self.registry.borrow();
            let capture = registry
                .entries
                .iter()
                .filter(|e| e.phase == Phase::Capture)
                .map(|e| Rc::clone(&e.listener))
                .collect();
            let bubble = registry
                .entries
                .iter()
                .filter(|e| e.phase == Phase::Bubble)
                .map(|e| Rc::clone(&e.listener))
                .collect();
            (capture, bubble)
        };

        for listener in capture.iter().chain(bubble.iter()) {
            listener(&press);
        }
    }
}

/// Removes its listener from the document when dropped
pub struct ListenerGuard {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().entries.retain(|e| e.id != self.id);
        }
    }
}

/// Opaque handle to a drawn UI region.
///
/// Empty until the renderer records a rectangle; an empty handle contains nothing.
#[derive(Debug, Clone, Default)]
pub struct RegionHandle(Rc<Cell<Option<Rect>>>);

impl RegionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, rect: Rect) {
        self.0.set(Some(rect));
    }

    pub fn clear(&self) {
        self.0.set(None);
    }

    pub fn get(&self) -> Option<Rect> {
        self.0.get()
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.get().is_some_and(|area| rect_contains(area, column, row))
    }
}

/// Cell containment test for a ratatui rectangle
pub fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && u32::from(column) < u32::from(area.x) + u32::from(area.width)
        && row >= area.y
        && u32::from(row) < u32::from(area.y) + u32::from(area.height)
}

/// True when the press lies inside none of the regions
pub fn is_outside(regions: &[RegionHandle], press: &PointerPress) -> bool {
    !regions.iter().any(|region| region.contains(press.column, press.row))
}

/// Capture-phase outside-click listener, active for as long as the value lives
pub struct ClickOutside {
    _guard: ListenerGuard,
}

impl ClickOutside {
    pub fn install(document: &PointerDocument, regions: Vec<RegionHandle>, callback: impl Fn() + 'static) -> Self {
        let guard = document.add_listener(Phase::Capture, move |press| {
            if is_outside(&regions, press) {
                callback();
            }
        });

        Self { _guard: guard }
    }
}

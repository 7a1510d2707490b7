use std::collections::{BTreeMap, VecDeque};

use brickyard_bricks::BrickId;
use brickyard_geom::Vec3;

use crate::input::InputFrame;

pub enum Event {
    // Input-derived intents
    MovementRequested {
        dt_ms: u32,
        frame: InputFrame,
    },
    PointerActionRequested {
        origin: Vec3,
        dir: Vec3,
        place: bool,
    },
    GadgetThrown {
        origin: Vec3,
        dir: Vec3,
    },

    // Selection / session state
    ColorSelected {
        index: usize,
    },
    BrickShapeSelected {
        key: String,
    },
    RotationToggled,
    ModeToggled,

    // Grid mutations, emitted after the fact for observers
    BrickPlaced {
        id: BrickId,
        origin: (i32, i32, i32),
    },
    BrickRemoved {
        id: BrickId,
        cell: (i32, i32, i32),
    },
}

pub struct EventEnvelope {
    pub id: u64,
    pub tick: u64,
    pub kind: Event,
}

/// Tick-bucketed FIFO: events fire in emit order within their tick, and
/// nothing fires before its tick arrives.
pub struct EventQueue {
    by_tick: BTreeMap<u64, VecDeque<EventEnvelope>>,
    pub now: u64,
    next_id: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            by_tick: BTreeMap::new(),
            now: 0,
            next_id: 1,
        }
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn emit_now(&mut self, kind: Event) -> u64 {
        let id = self.alloc_id();
        let env = EventEnvelope {
            id,
            tick: self.now,
            kind,
        };
        self.by_tick.entry(self.now).or_default().push_back(env);
        id
    }

    pub fn emit_at(&mut self, tick: u64, kind: Event) -> u64 {
        let id = self.alloc_id();
        let env = EventEnvelope { id, tick, kind };
        self.by_tick.entry(tick).or_default().push_back(env);
        id
    }

    pub fn emit_after(&mut self, delta: u64, kind: Event) -> u64 {
        self.emit_at(self.now + delta, kind)
    }

    pub fn pop_ready(&mut self) -> Option<EventEnvelope> {
        if let Some(q) = self.by_tick.get_mut(&self.now) {
            if let Some(env) = q.pop_front() {
                return Some(env);
            }
        }
        None
    }

    pub fn advance_tick(&mut self) {
        if let Some(q) = self.by_tick.get(&self.now) {
            if q.is_empty() {
                self.by_tick.remove(&self.now);
            }
        }
        self.now = self.now.wrapping_add(1);
    }
}

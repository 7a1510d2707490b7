use super::App;
use crate::builder::{self, CastAction, PlacementResult};
use crate::event::{Event, EventEnvelope};

impl App {
    pub(super) fn handle_event(&mut self, env: EventEnvelope) {
        let EventEnvelope { id, tick, kind } = env;
        log::trace!(target: "events", "[tick {}] handling event #{}", tick, id);
        match kind {
            Event::MovementRequested { dt_ms, frame } => {
                let dt = dt_ms as f32 / 1000.0;
                let out = self.gs.walker.update(&frame, dt, &self.gs.grid);
                log::trace!(
                    target: "events",
                    "[tick {}] MovementRequested dt_ms={} yaw={:.1} feet={:.2} grounded={} stepped={} gap={:.3}",
                    tick, dt_ms, frame.yaw_deg, self.gs.walker.feet_y(), out.grounded,
                    out.stepped_up, out.support_gap
                );
            }
            Event::PointerActionRequested { origin, dir, place } => {
                let action = if place {
                    CastAction::Place
                } else {
                    CastAction::Remove
                };
                let color = self.gs.selected_color();
                let footprint = self.gs.selected_footprint();
                let rotated = self.gs.rotated;
                let result = builder::cast_and_act(
                    &mut self.gs.grid,
                    &mut self.gs.registry,
                    origin,
                    dir,
                    action,
                    footprint,
                    rotated,
                    color,
                );
                log::info!(
                    target: "events",
                    "[tick {}] PointerAction {} -> {:?}",
                    tick, if place { "place" } else { "remove" }, result
                );
                match result {
                    PlacementResult::Placed { id, origin } => {
                        self.gs.note_placed(color);
                        self.queue.emit_now(Event::BrickPlaced { id, origin });
                    }
                    PlacementResult::Removed { id, cell } => {
                        self.gs.removed_count += 1;
                        self.queue.emit_now(Event::BrickRemoved { id, cell });
                    }
                    PlacementResult::Rejected(rejected) => {
                        self.gs.rejected_count += 1;
                        log::debug!(target: "events", "[tick {}] placement rejected: {:?}", tick, rejected);
                    }
                    PlacementResult::Miss => {}
                }
            }
            Event::GadgetThrown { origin, dir } => {
                // The gadget is a ranged whole-brick remover; same cast as
                // remove mode, just thrown along the facing
                let color = self.gs.selected_color();
                let footprint = self.gs.selected_footprint();
                let rotated = self.gs.rotated;
                let result = builder::cast_and_act(
                    &mut self.gs.grid,
                    &mut self.gs.registry,
                    origin,
                    dir,
                    CastAction::Remove,
                    footprint,
                    rotated,
                    color,
                );
                log::info!(target: "events", "[tick {}] GadgetThrown -> {:?}", tick, result);
                if let PlacementResult::Removed { id, cell } = result {
                    self.gs.removed_count += 1;
                    self.queue.emit_now(Event::BrickRemoved { id, cell });
                }
            }
            Event::ColorSelected { index } => {
                let ok = self.gs.select_color(index);
                log::info!(
                    target: "events",
                    "[tick {}] ColorSelected index={} ok={}",
                    tick, index, ok
                );
            }
            Event::BrickShapeSelected { key } => {
                let ok = self.gs.select_shape(&key);
                log::info!(
                    target: "events",
                    "[tick {}] BrickShapeSelected key={:?} ok={}",
                    tick, key, ok
                );
            }
            Event::RotationToggled => {
                self.gs.toggle_rotation();
                log::info!(
                    target: "events",
                    "[tick {}] RotationToggled rotated={}",
                    tick, self.gs.rotated
                );
            }
            Event::ModeToggled => {
                self.gs.toggle_mode();
                log::info!(
                    target: "events",
                    "[tick {}] ModeToggled mode={:?}",
                    tick, self.gs.mode
                );
            }
            Event::BrickPlaced { id, origin } => {
                // Sync point for the presentation layer: the occupied-cell
                // snapshot is re-read whenever the grid revision moves
                log::info!(
                    target: "events",
                    "[tick {}] BrickPlaced id={} origin={:?} rev={}",
                    tick, id, origin, self.gs.grid.rev()
                );
            }
            Event::BrickRemoved { id, cell } => {
                log::info!(
                    target: "events",
                    "[tick {}] BrickRemoved id={} at={:?} rev={}",
                    tick, id, cell, self.gs.grid.rev()
                );
            }
        }
    }
}

use super::App;
use crate::event::Event;
use crate::gamestate::SessionMode;
use crate::input::{ScriptAction, aim_direction};
use crate::player::MAX_TICK_DT;

// Ticks between a gadget throw and its effect landing (the projectile
// flight of the source, collapsed to a fixed delay).
const GADGET_FLIGHT_TICKS: u64 = 6;

impl App {
    /// One frame: sample the scripted input, emit this tick's events,
    /// drain them, advance. dt is clamped so frame hitches cannot tunnel
    /// the body through geometry.
    pub fn step(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_TICK_DT);
        let tick = self.queue.now;
        self.gs.tick = tick;

        let frame = self.script.frame_at(tick);
        let dt_ms = (dt * 1000.0) as u32;
        self.queue.emit_now(Event::MovementRequested { dt_ms, frame });

        let actions: Vec<ScriptAction> = self.script.actions_at(tick).cloned().collect();
        for action in actions {
            match action {
                ScriptAction::Pointer { place, pitch_deg } => {
                    let origin = self.gs.walker.eye_position();
                    let dir = aim_direction(frame.yaw_deg, pitch_deg);
                    match self.gs.mode {
                        SessionMode::Build => {
                            self.queue
                                .emit_now(Event::PointerActionRequested { origin, dir, place });
                        }
                        SessionMode::Gadget => {
                            self.queue
                                .emit_after(GADGET_FLIGHT_TICKS, Event::GadgetThrown { origin, dir });
                        }
                    }
                }
                ScriptAction::Gadget { pitch_deg } => {
                    let origin = self.gs.walker.eye_position();
                    let dir = aim_direction(frame.yaw_deg, pitch_deg);
                    self.queue
                        .emit_after(GADGET_FLIGHT_TICKS, Event::GadgetThrown { origin, dir });
                }
                ScriptAction::SelectColor(index) => {
                    self.queue.emit_now(Event::ColorSelected { index });
                }
                ScriptAction::SelectShape(key) => {
                    self.queue.emit_now(Event::BrickShapeSelected {
                        key: key.to_string(),
                    });
                }
                ScriptAction::ToggleRotation => {
                    self.queue.emit_now(Event::RotationToggled);
                }
                ScriptAction::ToggleMode => {
                    self.queue.emit_now(Event::ModeToggled);
                }
            }
        }

        while let Some(env) = self.queue.pop_ready() {
            self.handle_event(env);
        }
        self.queue.advance_tick();
    }
}

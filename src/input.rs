use brickyard_geom::Vec3;

/// Movement intent sampled once per tick. The core never reads raw key
/// codes; whatever captures the keyboard/touch state reduces it to this.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputFrame {
    /// Forward intent in [-1, 1] along the facing direction.
    pub forward: f32,
    /// Strafe intent in [-1, 1], positive to the right.
    pub strafe: f32,
    pub jump: bool,
    pub run: bool,
    /// Facing yaw in degrees, owned by the input/camera collaborator.
    pub yaw_deg: f32,
}

/// One scripted pointer/UI action, fired at a fixed tick.
#[derive(Clone, Debug)]
pub enum ScriptAction {
    /// Pointer click along the current facing, pitched up/down by degrees.
    Pointer { place: bool, pitch_deg: f32 },
    /// Gadget throw along the current facing (removes a whole brick).
    Gadget { pitch_deg: f32 },
    SelectColor(usize),
    SelectShape(&'static str),
    ToggleRotation,
    ToggleMode,
}

struct Segment {
    until: u64,
    frame: InputFrame,
}

/// Deterministic stand-in for the input collaborator: a fixed schedule of
/// intent frames and pointer actions, enough to exercise walking, jumping,
/// step-up, placement, removal, and the gadget in a headless run.
pub struct DemoScript {
    segments: Vec<Segment>,
    actions: Vec<(u64, ScriptAction)>,
}

impl DemoScript {
    pub fn standard() -> Self {
        let walk = |forward: f32, strafe: f32, yaw_deg: f32| InputFrame {
            forward,
            strafe,
            yaw_deg,
            ..InputFrame::default()
        };
        // Facing -z (toward the seeded street) for the whole first act
        let yaw = -90.0;
        let segments = vec![
            // Approach the street; the curb is one cell tall, so this
            // walks through a step-up
            Segment {
                until: 110,
                frame: walk(1.0, 0.0, yaw),
            },
            // Stand still long enough for auto-centering to settle
            Segment {
                until: 180,
                frame: walk(0.0, 0.0, yaw),
            },
            // Hop forward over the placed brick
            Segment {
                until: 185,
                frame: InputFrame {
                    forward: 1.0,
                    jump: true,
                    yaw_deg: yaw,
                    ..InputFrame::default()
                },
            },
            Segment {
                until: 260,
                frame: walk(1.0, 0.0, yaw),
            },
            // Turn and strafe along the street
            Segment {
                until: 330,
                frame: walk(0.0, 1.0, -135.0),
            },
        ];
        let actions = vec![
            (120, ScriptAction::SelectColor(6)),
            (124, ScriptAction::SelectShape("2x4")),
            (128, ScriptAction::ToggleRotation),
            (140, ScriptAction::Pointer { place: true, pitch_deg: -40.0 }),
            // Second click on the same spot: expected rejection
            (150, ScriptAction::Pointer { place: true, pitch_deg: -40.0 }),
            (200, ScriptAction::Pointer { place: false, pitch_deg: -35.0 }),
            (300, ScriptAction::ToggleMode),
            (310, ScriptAction::Gadget { pitch_deg: -10.0 }),
            (320, ScriptAction::ToggleMode),
        ];
        Self { segments, actions }
    }

    /// Intent for a tick; past the last segment the script stands idle at
    /// the last facing.
    pub fn frame_at(&self, tick: u64) -> InputFrame {
        for seg in &self.segments {
            if tick < seg.until {
                return seg.frame;
            }
        }
        let yaw = self.segments.last().map(|s| s.frame.yaw_deg).unwrap_or(0.0);
        InputFrame {
            yaw_deg: yaw,
            ..InputFrame::default()
        }
    }

    pub fn actions_at(&self, tick: u64) -> impl Iterator<Item = &ScriptAction> {
        self.actions
            .iter()
            .filter(move |(t, _)| *t == tick)
            .map(|(_, a)| a)
    }
}

/// Facing direction with a pitch applied, for pointer/gadget rays.
pub fn aim_direction(yaw_deg: f32, pitch_deg: f32) -> Vec3 {
    let yaw = yaw_deg.to_radians();
    let pitch = pitch_deg.to_radians();
    Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
}

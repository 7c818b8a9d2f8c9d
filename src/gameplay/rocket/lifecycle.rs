use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;

use crate::core::components::{EngineState, Rocket, Surface};
use crate::core::config::GameConfig;
use crate::core::level::progression::{PendingSceneChange, SceneChange};

/// Lifecycle of one rocket. Starts `Alive`; `Dying` and `Transcending` are
/// terminal until the scene change despawns the entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RocketPhase {
    #[default]
    Alive,
    Dying,
    Transcending,
}

/// Category of a single contact, derived from the touched entity's tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Friendly,
    Finish,
    Hostile,
}

impl ContactOutcome {
    /// Untagged geometry is lethal; unknown is treated the same as hostile
    /// rather than as an error.
    pub fn classify(surface: Option<&Surface>) -> Self {
        match surface {
            Some(Surface::Friendly) => ContactOutcome::Friendly,
            Some(Surface::Finish) => ContactOutcome::Finish,
            Some(Surface::Hostile) | None => ContactOutcome::Hostile,
        }
    }
}

/// One-shot audio/particle feedback triggered by a phase transition.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackCue {
    Success,
    Death,
}

/// Result of a contact while alive: the next phase plus its side effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub next: RocketPhase,
    pub cue: FeedbackCue,
    pub change: SceneChange,
}

/// The whole state machine. Pure so it can be exercised without an `App`:
/// terminal phases ignore every contact, friendly contact is inert, finish
/// completes the level, anything else kills.
pub fn evaluate_contact(phase: RocketPhase, outcome: ContactOutcome) -> Option<Transition> {
    if phase != RocketPhase::Alive {
        return None;
    }
    match outcome {
        ContactOutcome::Friendly => None,
        ContactOutcome::Finish => Some(Transition {
            next: RocketPhase::Transcending,
            cue: FeedbackCue::Success,
            change: SceneChange::Advance,
        }),
        ContactOutcome::Hostile => Some(Transition {
            next: RocketPhase::Dying,
            cue: FeedbackCue::Death,
            change: SceneChange::Reload,
        }),
    }
}

/// Debug escape hatch: while disabled, contacts are ignored in every phase.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CollisionGate {
    pub enabled: bool,
}

impl Default for CollisionGate {
    fn default() -> Self {
        Self { enabled: true }
    }
}

pub fn rocket_contact_response(
    mut ev_collisions: EventReader<CollisionEvent>,
    gate: Res<CollisionGate>,
    cfg: Res<GameConfig>,
    mut q_rocket: Query<(&mut RocketPhase, &mut EngineState), With<Rocket>>,
    q_surface: Query<&Surface>,
    mut ev_cue: EventWriter<FeedbackCue>,
    mut commands: Commands,
) {
    for ev in ev_collisions.read() {
        let CollisionEvent::Started(a, b, _) = *ev else {
            continue;
        };
        if !gate.enabled {
            continue;
        }
        let (rocket_entity, other) = if q_rocket.contains(a) {
            (a, b)
        } else if q_rocket.contains(b) {
            (b, a)
        } else {
            continue;
        };
        let Ok((mut phase, mut engine)) = q_rocket.get_mut(rocket_entity) else {
            continue;
        };
        let outcome = ContactOutcome::classify(q_surface.get(other).ok());
        let Some(transition) = evaluate_contact(*phase, outcome) else {
            continue;
        };
        info!(
            target: "rocket",
            "contact {:?}: {:?} -> {:?}",
            outcome,
            *phase,
            transition.next
        );
        *phase = transition.next;
        engine.running = false;
        ev_cue.write(transition.cue);
        commands.insert_resource(PendingSceneChange::after_seconds(
            transition.change,
            cfg.rocket.scene_transition_delay,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alive_transitions_cover_every_outcome() {
        assert_eq!(
            evaluate_contact(RocketPhase::Alive, ContactOutcome::Friendly),
            None
        );
        let finish = evaluate_contact(RocketPhase::Alive, ContactOutcome::Finish).unwrap();
        assert_eq!(finish.next, RocketPhase::Transcending);
        assert_eq!(finish.cue, FeedbackCue::Success);
        assert_eq!(finish.change, SceneChange::Advance);
        let crash = evaluate_contact(RocketPhase::Alive, ContactOutcome::Hostile).unwrap();
        assert_eq!(crash.next, RocketPhase::Dying);
        assert_eq!(crash.cue, FeedbackCue::Death);
        assert_eq!(crash.change, SceneChange::Reload);
    }

    #[test]
    fn terminal_phases_ignore_contacts() {
        for phase in [RocketPhase::Dying, RocketPhase::Transcending] {
            for outcome in [
                ContactOutcome::Friendly,
                ContactOutcome::Finish,
                ContactOutcome::Hostile,
            ] {
                assert_eq!(evaluate_contact(phase, outcome), None);
            }
        }
    }

    #[test]
    fn untagged_geometry_is_hostile() {
        assert_eq!(ContactOutcome::classify(None), ContactOutcome::Hostile);
        assert_eq!(
            ContactOutcome::classify(Some(&Surface::Finish)),
            ContactOutcome::Finish
        );
    }
}

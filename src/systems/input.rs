use std::collections::HashMap;

use bevy_ecs::{
    event::EventWriter,
    resource::Resource,
    system::{NonSendMut, Res},
};
use sdl2::{event::Event, keyboard::Keycode, EventPump};

use crate::events::{GameCommand, GameEvent};

/// Maps keys to commands. The mouse is always bound to `Flap`.
#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let key_bindings = HashMap::from([
            (Keycode::Space, GameCommand::Flap),
            (Keycode::Up, GameCommand::Flap),
            (Keycode::W, GameCommand::Flap),
            (Keycode::Escape, GameCommand::Exit),
        ]);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn command_for(&self, key: Keycode) -> Option<GameCommand> {
        self.key_bindings.get(&key).copied()
    }
}

/// Translates a single SDL event into a command. Events we don't care about yield `None`.
pub fn process_event(bindings: &Bindings, event: &Event) -> Option<GameCommand> {
    match event {
        Event::Quit { .. } => Some(GameCommand::Exit),
        Event::MouseButtonDown { .. } => Some(GameCommand::Flap),
        Event::KeyDown {
            keycode: Some(key),
            repeat: false,
            ..
        } => bindings.command_for(*key),
        _ => None,
    }
}

pub fn input_system(bindings: Res<Bindings>, mut writer: EventWriter<GameEvent>, mut pump: NonSendMut<EventPump>) {
    for event in pump.poll_iter() {
        if let Some(command) = process_event(&bindings, &event) {
            writer.write(GameEvent::Command(command));
        }
    }
}

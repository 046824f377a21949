use bevy_ecs::event::Event;

/// A high-level intent produced by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    /// Close the game immediately.
    Exit,
    /// Mouse click (or a bound key): starts the game, or makes the dot jump.
    Flap,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
    /// The dot hit a pipe or left the screen.
    DotDied,
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}

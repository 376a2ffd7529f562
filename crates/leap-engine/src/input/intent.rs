use crate::api::types::EntityId;

/// Desired horizontal motion for the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalIntent {
    Left,
    Right,
    #[default]
    None,
}

/// A velocity command from the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Horizontal(HorizontalIntent),
    Jump,
}

/// Commands queued for the next step.
/// The host pushes; the world drains them before running physics.
pub struct IntentQueue {
    commands: Vec<(EntityId, Intent)>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, target: EntityId, intent: Intent) {
        self.commands.push((target, intent));
    }

    /// Drain all pending commands in push order.
    pub fn drain(&mut self) -> Vec<(EntityId, Intent)> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl Default for IntentQueue {
    fn default() -> Self {
        Self::new()
    }
}

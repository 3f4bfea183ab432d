use crate::monitor::core::{init, transition, Effect};
use crate::monitor::main::Monitor;
use std::sync::Arc;

impl Monitor {
    pub fn run(&self) -> Result<(), Arc<dyn std::error::Error + Send + Sync>> {
        let (mut current_state, effects) = init();

        self.spawn_effects(effects);

        loop {
            let event = match self.event_receiver.lock().unwrap().recv() {
                Ok(event) => event,
                Err(e) => return Err(Arc::new(e)),
            };

            let _ = self
                .logger
                .info(&format!("Processing event: {}", event.to_display_string()));

            let (new_state, new_effects) = transition(current_state, event);
            current_state = new_state;

            self.render(&current_state)?;

            self.spawn_effects(new_effects);
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let event_sender = self.event_sender.clone();
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.run_effect(effect, event_sender));
        }
    }
}

//! User-driven transitions: connect, disconnect, teardown.

use huddle_common::{AttemptId, Event, SessionError, SessionPhase};
use tracing::{debug, info, warn};

use super::SessionController;

impl SessionController {
    /// Start a connect attempt from `Idle` or `Failed`.
    ///
    /// Callbacks are registered before the connect command goes out, since
    /// the runtime may start delivering as soon as the session activates.
    pub fn connect(&mut self) -> Result<(), SessionError> {
        let phase = self.state.phase;
        if !phase.accepts_connect() {
            warn!(%phase, "Connect rejected");
            return Err(SessionError::ConnectRejected { phase });
        }

        let attempt = AttemptId::new();
        info!(
            attempt = %attempt,
            room_id = %self.config.room_id,
            user_id = %self.config.user_id,
            "Connecting"
        );

        self.torn_down = false;
        self.registry.register_lifecycle();
        self.clear_peers();
        self.state.attempt = Some(attempt);
        self.set_phase(SessionPhase::Connecting);
        self.commands
            .connect(&self.config.room_id, &self.config.user_id);
        Ok(())
    }

    /// Leave the session and return to `Idle`.
    ///
    /// Always issues the disconnect command, whatever the phase; from `Idle`
    /// nothing else changes.
    pub fn disconnect(&mut self) {
        let from = self.state.phase;
        info!(phase = %from, attempt = self.attempt_label(), "Disconnecting");

        if from == SessionPhase::Connected {
            self.set_phase(SessionPhase::Disconnecting);
            self.state.rearmed = true;
        }
        self.commands.disconnect();
        self.clear_peers();
        self.set_phase(SessionPhase::Idle);
    }

    /// Perform whatever the connect control currently offers.
    /// Pressing a disabled control does nothing.
    pub fn press(&mut self) -> Result<(), SessionError> {
        let control = self.control();
        if !control.is_enabled() {
            debug!(?control, "Control disabled, press ignored");
            return Ok(());
        }
        if control.connects() {
            self.connect()
        } else {
            self.disconnect();
            Ok(())
        }
    }

    /// Final cleanup when the owner goes away. Disconnects unconditionally,
    /// even if no connect was ever issued. Registrations are kept, so a
    /// later connect does not issue them again.
    pub fn teardown(&mut self) {
        info!(phase = %self.state.phase, "Tearing down session");
        self.commands.disconnect();
        self.clear_peers();
        self.set_phase(SessionPhase::Idle);
        self.torn_down = true;
        self.bus.publish(Event::Shutdown);
    }

    pub(super) fn attempt_label(&self) -> &str {
        self.state
            .attempt
            .as_ref()
            .map(AttemptId::as_str)
            .unwrap_or("-")
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        if !self.torn_down {
            self.teardown();
        }
    }
}

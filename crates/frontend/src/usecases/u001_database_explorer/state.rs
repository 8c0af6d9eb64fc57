//! Connection lifecycle of the explorer view.

/// Состояние подключения к источнику данных
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    ConnectionLost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionEvent {
    /// User submitted a valid connection form or an Excel file
    Submitted,
    /// The backend accepted the data source
    Succeeded,
    /// All attempts failed or the reply classified as a failure
    Failed,
    /// Periodic health poll result
    HealthReported(bool),
}

impl ConnectionStatus {
    /// Pure transition function. Writes from user actions and health polls
    /// are not reconciled: whichever event arrives last decides.
    pub fn on(self, event: ConnectionEvent) -> ConnectionStatus {
        use ConnectionEvent::*;
        use ConnectionStatus::*;

        match (self, event) {
            (_, Submitted) => Connecting,
            (_, Succeeded) => Connected,
            (Connecting, Failed) => Disconnected,
            (Connected, HealthReported(false)) => ConnectionLost,
            (ConnectionLost, HealthReported(true)) => Connected,
            (state, _) => state,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "Disconnected",
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::ConnectionLost => "Connection lost",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConnectionEvent::*;
    use super::ConnectionStatus::*;
    use super::*;

    #[test]
    fn test_happy_path() {
        let s = Disconnected.on(Submitted);
        assert_eq!(s, Connecting);
        let s = s.on(Succeeded);
        assert_eq!(s, Connected);
    }

    #[test]
    fn test_failed_connect_returns_to_disconnected() {
        assert_eq!(Disconnected.on(Submitted).on(Failed), Disconnected);
    }

    #[test]
    fn test_failed_outside_connecting_is_ignored() {
        assert_eq!(Connected.on(Failed), Connected);
        assert_eq!(ConnectionLost.on(Failed), ConnectionLost);
    }

    #[test]
    fn test_health_loss_and_recovery() {
        let lost = Connected.on(HealthReported(false));
        assert_eq!(lost, ConnectionLost);
        assert_eq!(lost.on(HealthReported(false)), ConnectionLost);
        assert_eq!(lost.on(HealthReported(true)), Connected);
    }

    #[test]
    fn test_health_does_not_connect_a_disconnected_view() {
        assert_eq!(Disconnected.on(HealthReported(true)), Disconnected);
        assert_eq!(Disconnected.on(HealthReported(false)), Disconnected);
        assert_eq!(Connecting.on(HealthReported(false)), Connecting);
    }

    #[test]
    fn test_reconnect_from_any_state() {
        for s in [Disconnected, Connecting, Connected, ConnectionLost] {
            assert_eq!(s.on(Submitted), Connecting);
        }
    }
}

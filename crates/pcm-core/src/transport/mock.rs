//! Mock vehicle transport for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::traits::{TimeoutScenario, TransportError, VehicleTransport};
use crate::protocol::Message;

/// Mock transport for unit testing verification logic.
pub struct MockTransport {
    /// Queued responses to return on receive.
    response_queue: Arc<Mutex<VecDeque<Message>>>,
    /// Captured sends.
    send_log: Arc<Mutex<Vec<Message>>>,
    /// Recorded timeout scenario changes.
    timeout_log: Arc<Mutex<Vec<TimeoutScenario>>>,
    /// Number of times the queue was flushed.
    clear_count: Arc<Mutex<u32>>,
    /// Whether the device is "connected".
    connected: Arc<Mutex<bool>>,
    /// When set, sends fail without being captured.
    refuse_sends: Arc<Mutex<bool>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            response_queue: Arc::new(Mutex::new(VecDeque::new())),
            send_log: Arc::new(Mutex::new(Vec::new())),
            timeout_log: Arc::new(Mutex::new(Vec::new())),
            clear_count: Arc::new(Mutex::new(0)),
            connected: Arc::new(Mutex::new(true)),
            refuse_sends: Arc::new(Mutex::new(false)),
        }
    }

    /// Queue a response to be returned on a later receive.
    pub fn queue_response(&self, message: Message) {
        self.response_queue.lock().unwrap().push_back(message);
    }

    /// Queue raw bytes as a response.
    pub fn queue_response_bytes(&self, bytes: &[u8]) {
        self.queue_response(Message::from(bytes));
    }

    /// Get all captured sends.
    pub fn get_sends(&self) -> Vec<Message> {
        self.send_log.lock().unwrap().clone()
    }

    /// Clear captured sends.
    pub fn clear_sends(&self) {
        self.send_log.lock().unwrap().clear();
    }

    /// Get the timeout scenarios selected so far.
    pub fn get_timeouts(&self) -> Vec<TimeoutScenario> {
        self.timeout_log.lock().unwrap().clone()
    }

    /// How many times the receive queue was flushed.
    pub fn get_clear_count(&self) -> u32 {
        *self.clear_count.lock().unwrap()
    }

    /// Simulate device disconnect.
    pub fn disconnect(&self) {
        *self.connected.lock().unwrap() = false;
    }

    /// Simulate device reconnect.
    pub fn reconnect(&self) {
        *self.connected.lock().unwrap() = true;
    }

    /// Make subsequent sends fail.
    pub fn refuse_sends(&self, refuse: bool) {
        *self.refuse_sends.lock().unwrap() = refuse;
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleTransport for MockTransport {
    fn send(&self, message: &Message) -> Result<(), TransportError> {
        if !*self.connected.lock().unwrap() {
            return Err(TransportError::Disconnected);
        }
        if *self.refuse_sends.lock().unwrap() {
            return Err(TransportError::SendFailed("refused by mock".into()));
        }
        self.send_log.lock().unwrap().push(message.clone());
        Ok(())
    }

    fn receive(&self) -> Result<Message, TransportError> {
        if !*self.connected.lock().unwrap() {
            return Err(TransportError::Disconnected);
        }
        self.response_queue
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(TransportError::Timeout { timeout_ms: 500 })
    }

    fn set_timeout(&self, scenario: TimeoutScenario) -> Result<(), TransportError> {
        self.timeout_log.lock().unwrap().push(scenario);
        Ok(())
    }

    fn clear_queue(&self) {
        // Queued responses stay put so tests can stage a whole
        // exchange up front; only the flush itself is recorded.
        *self.clear_count.lock().unwrap() += 1;
    }

    fn is_connected(&self) -> bool {
        *self.connected.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_response_queue() {
        let mock = MockTransport::new();
        mock.queue_response_bytes(&[0x6C, 0x01]);
        mock.queue_response_bytes(&[0x6C, 0x02]);

        assert_eq!(mock.receive().unwrap().as_bytes(), &[0x6C, 0x01]);
        assert_eq!(mock.receive().unwrap().as_bytes(), &[0x6C, 0x02]);

        // Queue is empty now
        assert!(matches!(
            mock.receive(),
            Err(TransportError::Timeout { .. })
        ));
    }

    #[test]
    fn test_mock_send_capture() {
        let mock = MockTransport::new();
        mock.send(&Message::from(&b"hello"[..])).unwrap();
        mock.send(&Message::from(&b"world"[..])).unwrap();

        let sends = mock.get_sends();
        assert_eq!(sends.len(), 2);
        assert_eq!(sends[0].as_bytes(), b"hello");
        assert_eq!(sends[1].as_bytes(), b"world");
    }

    #[test]
    fn test_mock_disconnect() {
        let mock = MockTransport::new();
        assert!(mock.is_connected());

        mock.disconnect();
        assert!(!mock.is_connected());
        assert!(mock.send(&Message::new(vec![0x00])).is_err());
        assert!(mock.receive().is_err());
    }

    #[test]
    fn test_mock_timeout_log() {
        let mock = MockTransport::new();
        mock.set_timeout(TimeoutScenario::ReadCrc).unwrap();
        mock.set_timeout(TimeoutScenario::Maximum).unwrap();
        assert_eq!(
            mock.get_timeouts(),
            vec![TimeoutScenario::ReadCrc, TimeoutScenario::Maximum]
        );
    }
}

use crate::prelude::{AlertSink, LowConfidenceAlert, RigError, RigResult};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Hands alerts to whoever owns the receiving end (the dashboard turns them
/// into `POST /buzzer` calls). A dropped receiver is a delivery failure.
#[derive(Debug, Clone)]
pub struct ChannelAlertSink {
    sender: UnboundedSender<LowConfidenceAlert>,
}

impl ChannelAlertSink {
    pub fn channel() -> (Self, UnboundedReceiver<LowConfidenceAlert>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl AlertSink for ChannelAlertSink {
    fn notify(&mut self, alert: LowConfidenceAlert) -> RigResult<()> {
        self.sender
            .send(alert)
            .map_err(|_| RigError::AlertDelivery("alert receiver closed".into()))
    }
}

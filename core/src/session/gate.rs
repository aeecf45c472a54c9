use crate::prelude::MeasurementKind;

/// Tracks which measurement kinds have a request outstanding, allowing at
/// most one per kind.
#[derive(Debug, Clone, Default)]
pub struct RequestGate {
    pending: [bool; 3],
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `kind` as in flight. Returns `false` if it already was.
    pub fn try_begin(&mut self, kind: MeasurementKind) -> bool {
        let slot = &mut self.pending[kind.index()];
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    pub fn finish(&mut self, kind: MeasurementKind) {
        self.pending[kind.index()] = false;
    }

    pub fn is_pending(&self, kind: MeasurementKind) -> bool {
        self.pending[kind.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_request_per_kind() {
        let mut gate = RequestGate::new();
        assert!(gate.try_begin(MeasurementKind::Distance));
        assert!(!gate.try_begin(MeasurementKind::Distance));
        assert!(gate.try_begin(MeasurementKind::Shape));
        assert!(gate.is_pending(MeasurementKind::Distance));
        assert!(!gate.is_pending(MeasurementKind::Material));

        gate.finish(MeasurementKind::Distance);
        assert!(!gate.is_pending(MeasurementKind::Distance));
        assert!(gate.try_begin(MeasurementKind::Distance));
    }
}

use std::collections::VecDeque;

/// Number of points kept by the live distance chart.
pub const CHART_CAPACITY: usize = 10;

/// Fixed-capacity FIFO of optional samples feeding the chart.
///
/// Starts pre-filled with `None` so the chart has a stable x-axis from the
/// first frame; every push evicts the oldest point once full.
#[derive(Debug, Clone)]
pub struct RingBufferSeries {
    values: VecDeque<Option<f64>>,
    capacity: usize,
}

impl RingBufferSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: std::iter::repeat(None).take(capacity).collect(),
            capacity,
        }
    }

    pub fn push(&mut self, value: Option<f64>) {
        self.values.push_back(value);
        while self.values.len() > self.capacity {
            self.values.pop_front();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy of the series in insertion order, oldest first.
    pub fn snapshot(&self) -> Vec<Option<f64>> {
        self.values.iter().copied().collect()
    }

    pub fn present_values(&self) -> Vec<f64> {
        self.values.iter().flatten().copied().collect()
    }
}

impl Default for RingBufferSeries {
    fn default() -> Self {
        Self::with_capacity(CHART_CAPACITY)
    }
}

//! IoT sensor readings and the live sliding window

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::ChartDomain;

/// Maximum number of readings kept for the live charts
pub const SENSOR_WINDOW_SIZE: usize = 10;

/// A timestamped tuple of environmental measurements
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorReading {
    pub timestamp: String,
    pub temperature: f64,
    pub humidity: f64,
    pub moisture: f64,
    pub ph: f64,
}

impl SensorReading {
    pub fn value(&self, metric: SensorMetric) -> f64 {
        match metric {
            SensorMetric::Temperature => self.temperature,
            SensorMetric::Humidity => self.humidity,
            SensorMetric::Moisture => self.moisture,
            SensorMetric::Ph => self.ph,
        }
    }
}

/// Response body of `GET /api/v1/sensors`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensorsResponse {
    #[serde(default)]
    pub data: Vec<SensorReading>,
}

/// Fabricate a plausible reading for demo mode
pub fn simulate_reading<R: Rng + ?Sized>(rng: &mut R, timestamp: impl Into<String>) -> SensorReading {
    SensorReading {
        timestamp: timestamp.into(),
        temperature: 25.0 + rng.gen::<f64>() * 5.0,
        humidity: 55.0 + rng.gen::<f64>() * 10.0,
        moisture: 40.0 + rng.gen::<f64>() * 20.0,
        ph: 6.0 + rng.gen::<f64>(),
    }
}

/// Most recent sensor readings, oldest first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorWindow {
    readings: VecDeque<SensorReading>,
    capacity: usize,
}

impl Default for SensorWindow {
    fn default() -> Self {
        Self::new(SENSOR_WINDOW_SIZE)
    }
}

impl SensorWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            readings: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a reading, dropping the oldest ones beyond capacity
    pub fn push(&mut self, reading: SensorReading) {
        self.readings.push_back(reading);
        while self.readings.len() > self.capacity {
            self.readings.pop_front();
        }
    }

    /// Replace the window with the tail of a fetched batch
    pub fn replace(&mut self, batch: Vec<SensorReading>) {
        let skip = batch.len().saturating_sub(self.capacity);
        self.readings = batch.into_iter().skip(skip).collect();
    }

    pub fn clear(&mut self) {
        self.readings.clear();
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &SensorReading> {
        self.readings.iter()
    }

    pub fn latest(&self) -> Option<&SensorReading> {
        self.readings.back()
    }

    pub fn to_vec(&self) -> Vec<SensorReading> {
        self.readings.iter().cloned().collect()
    }
}

/// A charted sensor measurement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SensorMetric {
    Temperature,
    Humidity,
    Moisture,
    Ph,
}

impl SensorMetric {
    pub const ALL: [SensorMetric; 4] = [
        SensorMetric::Temperature,
        SensorMetric::Humidity,
        SensorMetric::Moisture,
        SensorMetric::Ph,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SensorMetric::Temperature => "🌡️ Temperature (°C)",
            SensorMetric::Humidity => "💦 Humidity (%)",
            SensorMetric::Moisture => "🌾 Soil Moisture (%)",
            SensorMetric::Ph => "⚗️ Soil pH",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            SensorMetric::Temperature => "°C",
            SensorMetric::Humidity | SensorMetric::Moisture => "%",
            SensorMetric::Ph => "",
        }
    }

    /// Line colour
    pub fn stroke(&self) -> &'static str {
        match self {
            SensorMetric::Temperature => "#ef4444",
            SensorMetric::Humidity => "#3b82f6",
            SensorMetric::Moisture => "#22c55e",
            SensorMetric::Ph => "#a855f7",
        }
    }

    /// Fixed y-axis range of the metric's chart
    pub fn domain(&self) -> ChartDomain {
        match self {
            SensorMetric::Temperature => ChartDomain::new(20.0, 40.0),
            SensorMetric::Humidity => ChartDomain::new(40.0, 80.0),
            SensorMetric::Moisture => ChartDomain::new(20.0, 80.0),
            SensorMetric::Ph => ChartDomain::new(5.0, 8.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reading(n: usize) -> SensorReading {
        SensorReading {
            timestamp: format!("t{}", n),
            temperature: 25.0,
            humidity: 60.0,
            moisture: 45.0,
            ph: 6.5,
        }
    }

    #[test]
    fn test_window_keeps_last_ten() {
        let mut window = SensorWindow::default();
        for n in 0..25 {
            window.push(reading(n));
        }
        assert_eq!(window.len(), SENSOR_WINDOW_SIZE);
        assert_eq!(window.iter().next().unwrap().timestamp, "t15");
        assert_eq!(window.latest().unwrap().timestamp, "t24");
    }

    #[test]
    fn test_replace_keeps_tail_of_batch() {
        let mut window = SensorWindow::default();
        window.push(reading(99));
        window.replace((0..14).map(reading).collect());
        assert_eq!(window.len(), 10);
        assert_eq!(window.iter().next().unwrap().timestamp, "t4");

        window.replace(vec![reading(1)]);
        assert_eq!(window.to_vec(), vec![reading(1)]);
    }

    #[test]
    fn test_simulated_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let r = simulate_reading(&mut rng, "12:00:00");
            assert!((25.0..30.0).contains(&r.temperature));
            assert!((55.0..65.0).contains(&r.humidity));
            assert!((40.0..60.0).contains(&r.moisture));
            assert!((6.0..7.0).contains(&r.ph));
        }
    }

    #[test]
    fn test_simulated_readings_fit_chart_domains() {
        let mut rng = StdRng::seed_from_u64(11);
        let r = simulate_reading(&mut rng, "12:00:05");
        for metric in SensorMetric::ALL {
            let domain = metric.domain();
            let v = r.value(metric);
            assert!(v >= domain.min && v <= domain.max, "{:?} out of domain", metric);
        }
    }

    #[test]
    fn test_missing_data_field_is_empty() {
        let response: SensorsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());
    }

    proptest! {
        #[test]
        fn prop_window_never_exceeds_capacity(pushes in 0usize..40, batch in 0usize..40) {
            let mut window = SensorWindow::default();
            for n in 0..pushes {
                window.push(reading(n));
                prop_assert!(window.len() <= SENSOR_WINDOW_SIZE);
            }
            prop_assert_eq!(window.len(), pushes.min(SENSOR_WINDOW_SIZE));

            window.replace((0..batch).map(reading).collect());
            prop_assert_eq!(window.len(), batch.min(SENSOR_WINDOW_SIZE));
            if batch > 0 {
                let latest = format!("t{}", batch - 1);
                prop_assert_eq!(&window.latest().unwrap().timestamp, &latest);
            }
        }

        #[test]
        fn prop_simulated_within_ranges(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let r = simulate_reading(&mut rng, "00:00:00");
            prop_assert!((25.0..30.0).contains(&r.temperature));
            prop_assert!((55.0..65.0).contains(&r.humidity));
            prop_assert!((40.0..60.0).contains(&r.moisture));
            prop_assert!((6.0..7.0).contains(&r.ph));
        }
    }
}

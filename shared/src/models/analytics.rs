//! Demo analytics series: yield trends, cost breakdown and crop health index

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Months covered by the yield trend
pub const ANALYTICS_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Farms compared on the analytics page
pub const ANALYTICS_FARMS: [&str; 3] = ["Green Valley", "Sunrise Agro", "EcoHarvest"];

/// Yield of one farm in one month (tons / hectare)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmYield {
    pub farm: String,
    pub tons_per_hectare: f64,
}

/// Yields of all farms for one month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YieldPoint {
    pub month: String,
    pub yields: Vec<FarmYield>,
}

impl YieldPoint {
    pub fn yield_of(&self, farm: &str) -> Option<f64> {
        self.yields
            .iter()
            .find(|y| y.farm == farm)
            .map(|y| y.tons_per_hectare)
    }
}

/// Operating cost split of one farm (₹)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostBreakdown {
    pub name: String,
    pub operations: f64,
    pub maintenance: f64,
    pub water: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.operations + self.maintenance + self.water
    }
}

/// AI crop health index of one farm (0-100)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthIndex {
    pub name: String,
    pub health: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsSnapshot {
    pub yields: Vec<YieldPoint>,
    pub costs: Vec<CostBreakdown>,
    pub health: Vec<HealthIndex>,
}

/// Base and spread of the uniform yield draw for a farm
fn yield_range(farm_index: usize) -> (f64, f64) {
    match farm_index {
        0 => (25.0, 10.0),
        1 => (20.0, 12.0),
        _ => (18.0, 15.0),
    }
}

impl AnalyticsSnapshot {
    /// Draw a fresh set of demo series
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let yields = ANALYTICS_MONTHS
            .iter()
            .map(|month| YieldPoint {
                month: month.to_string(),
                yields: ANALYTICS_FARMS
                    .iter()
                    .enumerate()
                    .map(|(i, farm)| {
                        let (base, spread) = yield_range(i);
                        FarmYield {
                            farm: farm.to_string(),
                            tons_per_hectare: base + rng.gen::<f64>() * spread,
                        }
                    })
                    .collect(),
            })
            .collect();

        let costs = ANALYTICS_FARMS
            .iter()
            .map(|farm| CostBreakdown {
                name: farm.to_string(),
                operations: 4000.0 + rng.gen::<f64>() * 2000.0,
                maintenance: 2000.0 + rng.gen::<f64>() * 1500.0,
                water: 1000.0 + rng.gen::<f64>() * 500.0,
            })
            .collect();

        let health = ANALYTICS_FARMS
            .iter()
            .map(|farm| HealthIndex {
                name: farm.to_string(),
                health: 70.0 + rng.gen::<f64>() * 25.0,
            })
            .collect();

        Self {
            yields,
            costs,
            health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_snapshot_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let snapshot = AnalyticsSnapshot::generate(&mut rng);
        assert_eq!(snapshot.yields.len(), 6);
        assert_eq!(snapshot.yields[0].month, "Jan");
        assert!(snapshot.yields.iter().all(|p| p.yields.len() == 3));
        assert_eq!(snapshot.costs.len(), 3);
        assert_eq!(snapshot.health.len(), 3);
    }

    #[test]
    fn test_snapshot_ranges() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let snapshot = AnalyticsSnapshot::generate(&mut rng);
            for point in &snapshot.yields {
                let gv = point.yield_of("Green Valley").unwrap();
                let sa = point.yield_of("Sunrise Agro").unwrap();
                let eh = point.yield_of("EcoHarvest").unwrap();
                assert!((25.0..35.0).contains(&gv));
                assert!((20.0..32.0).contains(&sa));
                assert!((18.0..33.0).contains(&eh));
            }
            for cost in &snapshot.costs {
                assert!((4000.0..6000.0).contains(&cost.operations));
                assert!((2000.0..3500.0).contains(&cost.maintenance));
                assert!((1000.0..1500.0).contains(&cost.water));
                assert!((7000.0..11000.0).contains(&cost.total()));
            }
            for h in &snapshot.health {
                assert!((70.0..95.0).contains(&h.health));
            }
        }
    }
}

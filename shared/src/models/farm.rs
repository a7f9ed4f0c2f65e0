//! Farm models and the static demo farm list

use serde::{Deserialize, Serialize};

/// Farm summary shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Farm {
    pub id: u32,
    pub name: String,
    pub location: String,
}

/// Farm with its latest environmental readings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmDetails {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
    pub ph: f64,
    pub crop_health: String,
}

impl FarmDetails {
    pub fn summary(&self) -> Farm {
        Farm {
            id: self.id,
            name: self.name.clone(),
            location: self.location.clone(),
        }
    }
}

/// The fixed demo farms, ordered by id
pub fn demo_farms() -> Vec<FarmDetails> {
    vec![
        FarmDetails {
            id: 1,
            name: "Green Valley Farm".to_string(),
            location: "Mysuru, Karnataka".to_string(),
            temperature: 28.0,
            humidity: 65.0,
            soil_moisture: 54.0,
            ph: 6.8,
            crop_health: "Healthy 🌿".to_string(),
        },
        FarmDetails {
            id: 2,
            name: "Sunrise Agro Fields".to_string(),
            location: "Nagpur, Maharashtra".to_string(),
            temperature: 34.0,
            humidity: 48.0,
            soil_moisture: 32.0,
            ph: 6.5,
            crop_health: "Needs Irrigation 💧".to_string(),
        },
        FarmDetails {
            id: 3,
            name: "EcoHarvest Plantation".to_string(),
            location: "Coimbatore, Tamil Nadu".to_string(),
            temperature: 26.0,
            humidity: 72.0,
            soil_moisture: 68.0,
            ph: 7.2,
            crop_health: "Optimal Condition ✅".to_string(),
        },
    ]
}

/// Dashboard summaries of the demo farms
pub fn farm_summaries() -> Vec<Farm> {
    demo_farms().iter().map(FarmDetails::summary).collect()
}

/// Look up a demo farm by id
pub fn find_farm(id: u32) -> Option<FarmDetails> {
    demo_farms().into_iter().find(|f| f.id == id)
}

/// Look up a demo farm by a raw path segment.
///
/// Anything that is not a plain decimal id resolves to `None`.
pub fn find_farm_by_key(key: &str) -> Option<FarmDetails> {
    key.parse::<u32>().ok().and_then(find_farm)
}

//! City catalog offered by the dashboard location picker

use serde::Serialize;

/// A selectable city with its coordinates
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct City {
    pub name: &'static str,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Approximate metro population, display only
    pub population: &'static str,
}

const CITIES: [City; 8] = [
    City { name: "Mumbai", latitude: 19.0760, longitude: 72.8777, population: "20M" },
    City { name: "Delhi", latitude: 28.7041, longitude: 77.1025, population: "32M" },
    City { name: "Bangalore", latitude: 12.9716, longitude: 77.5946, population: "12M" },
    City { name: "Chennai", latitude: 13.0827, longitude: 80.2707, population: "11M" },
    City { name: "Kolkata", latitude: 22.5726, longitude: 88.3639, population: "15M" },
    City { name: "Hyderabad", latitude: 17.3850, longitude: 78.4867, population: "10M" },
    City { name: "Pune", latitude: 18.5204, longitude: 73.8567, population: "7M" },
    City { name: "Ahmedabad", latitude: 23.0225, longitude: 72.5714, population: "8M" },
];

impl City {
    /// All cities in picker order
    #[must_use]
    pub fn all() -> &'static [City] {
        &CITIES
    }

    /// Look up a city by name, ignoring case and surrounding whitespace
    #[must_use]
    pub fn find(name: &str) -> Option<&'static City> {
        let name = name.trim();
        CITIES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let names: Vec<&str> = City::all().iter().map(|c| c.name).collect();
        assert_eq!(names.first(), Some(&"Mumbai"));
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let city = City::find("  dElHi ").unwrap();
        assert_eq!(city.name, "Delhi");
        assert_eq!(city.format_coordinates(), "28.7041, 77.1025");
        assert!(City::find("Atlantis").is_none());
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    red: u8,
    green: u8,
    blue: u8,
    population: u32,
    percentage: f64,
}

impl Swatch {
    pub fn new((red, green, blue): (u8, u8, u8), population: u32, percentage: f64) -> Swatch {
        Self {
            red,
            green,
            blue,
            population,
            percentage,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// The swatch color as a lowercase 24-bit hex string, e.g. `#0a141e`.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// How many samples this swatch's cluster holds.
    pub fn population(self) -> u32 {
        self.population
    }

    /// This cluster's share of all samples, in percent.
    pub fn percentage(self) -> f64 {
        self.percentage
    }
}

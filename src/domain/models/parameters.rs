#[cfg(test)]
#[path = "parameters_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;

pub const DEFAULT_MODEL: &str = "text-davinci-003";

/// Every temperature a user can pick. 0.4 is intentionally not offered.
pub const TEMPERATURES: [f64; 10] = [0.0, 0.1, 0.2, 0.3, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

pub fn temperature_labels() -> Vec<String> {
    return TEMPERATURES
        .iter()
        .map(|temperature| return temperature.to_string())
        .collect();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemperaturePreset {
    Logical,
    Balanced,
    Creative,
}

impl TemperaturePreset {
    pub const ALL: [TemperaturePreset; 3] = [
        TemperaturePreset::Logical,
        TemperaturePreset::Balanced,
        TemperaturePreset::Creative,
    ];

    pub fn value(&self) -> f64 {
        match self {
            TemperaturePreset::Logical => return 0.0,
            TemperaturePreset::Balanced => return 0.5,
            TemperaturePreset::Creative => return 1.0,
        }
    }

    pub fn label(&self) -> String {
        let name = match self {
            TemperaturePreset::Logical => "Logical",
            TemperaturePreset::Balanced => "Balanced",
            TemperaturePreset::Creative => "Creative",
        };

        return format!("{} - {name}", self.value());
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    pub model: String,
    pub temperature: f64,
}

impl Default for Parameters {
    fn default() -> Parameters {
        return Parameters {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
        };
    }
}

impl Parameters {
    /// Builds parameters from raw config values. An empty model falls back to
    /// the default one.
    pub fn parse(model: &str, temperature: &str) -> Result<Parameters> {
        let mut parameters = Parameters::default();
        if !model.is_empty() {
            parameters.select_model(model);
        }
        if !temperature.is_empty() {
            parameters.select_temperature(parse_temperature(temperature)?)?;
        }

        return Ok(parameters);
    }

    pub fn select_model(&mut self, id: &str) {
        self.model = id.to_string();
    }

    pub fn select_temperature(&mut self, value: f64) -> Result<()> {
        let Some(idx) = temperature_index(value) else {
            bail!(format!(
                "{value} is not a valid temperature. Possible values are: {}",
                temperature_labels().join(", ")
            ));
        };

        self.temperature = TEMPERATURES[idx];
        return Ok(());
    }

    pub fn apply_preset(&mut self, preset: TemperaturePreset) {
        self.temperature = preset.value();
    }
}

pub fn parse_temperature(text: &str) -> Result<f64> {
    let Ok(value) = text.trim().parse::<f64>() else {
        bail!(format!("'{text}' is not a number"));
    };

    return Ok(value);
}

pub fn temperature_index(value: f64) -> Option<usize> {
    return TEMPERATURES
        .iter()
        .position(|temperature| return (temperature - value).abs() < f64::EPSILON);
}

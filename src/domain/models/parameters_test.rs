use anyhow::Result;

use super::temperature_index;
use super::temperature_labels;
use super::Parameters;
use super::TemperaturePreset;
use super::DEFAULT_MODEL;

#[test]
fn it_has_defaults() {
    let parameters = Parameters::default();
    assert_eq!(parameters.model, DEFAULT_MODEL);
    assert_eq!(parameters.temperature, 0.0);
}

#[test]
fn it_applies_presets_exactly() {
    let mut parameters = Parameters::default();

    parameters.apply_preset(TemperaturePreset::Balanced);
    assert_eq!(parameters.temperature, 0.5);

    parameters.apply_preset(TemperaturePreset::Creative);
    assert_eq!(parameters.temperature, 1.0);

    parameters.apply_preset(TemperaturePreset::Logical);
    assert_eq!(parameters.temperature, 0.0);
}

#[test]
fn it_labels_presets() {
    let labels = TemperaturePreset::ALL
        .iter()
        .map(|preset| return preset.label())
        .collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec!["0 - Logical", "0.5 - Balanced", "1 - Creative"]
    );
}

#[test]
fn it_selects_listed_temperatures() -> Result<()> {
    let mut parameters = Parameters::default();
    parameters.select_temperature(0.7)?;
    assert_eq!(parameters.temperature, 0.7);

    return Ok(());
}

#[test]
fn it_rejects_unlisted_temperatures() {
    let mut parameters = Parameters::default();
    assert!(parameters.select_temperature(0.4).is_err());
    assert!(parameters.select_temperature(1.5).is_err());
    assert_eq!(parameters.temperature, 0.0);
}

#[test]
fn it_selects_any_model() {
    let mut parameters = Parameters::default();
    parameters.select_model("gpt-3.5-turbo");
    assert_eq!(parameters.model, "gpt-3.5-turbo");
}

#[test]
fn it_parses_config_values() -> Result<()> {
    let parameters = Parameters::parse("gpt-3.5-turbo", "0.9")?;
    assert_eq!(parameters.model, "gpt-3.5-turbo");
    assert_eq!(parameters.temperature, 0.9);

    let parameters = Parameters::parse("", "")?;
    assert_eq!(parameters, Parameters::default());

    assert!(Parameters::parse("", "warm").is_err());

    return Ok(());
}

#[test]
fn it_lists_temperature_labels() {
    assert_eq!(
        temperature_labels(),
        vec!["0", "0.1", "0.2", "0.3", "0.5", "0.6", "0.7", "0.8", "0.9", "1"]
    );
    assert_eq!(temperature_index(0.5), Some(4));
    assert_eq!(temperature_index(0.4), None);
}

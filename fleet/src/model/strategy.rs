use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_index(index: i64) -> Option<RiskLevel> {
        match index {
            0 => Some(RiskLevel::Low),
            1 => Some(RiskLevel::Medium),
            2 => Some(RiskLevel::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Delayed,
    Immediate,
    Scheduled,
}

impl Strategy {
    pub fn from_index(index: i64) -> Option<Strategy> {
        match index {
            0 => Some(Strategy::Delayed),
            1 => Some(Strategy::Immediate),
            2 => Some(Strategy::Scheduled),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Delayed => "Delayed",
            Strategy::Immediate => "Immediate",
            Strategy::Scheduled => "Scheduled",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RiskAssessment {
    pub vehicle_id: String,
    pub risk_level: Option<i64>,
    pub recommended_strategy: Option<i64>,
    pub cost: Option<f64>,
    pub fuel: Option<f64>,
}

impl RiskAssessment {
    pub fn risk(&self) -> Option<RiskLevel> {
        self.risk_level.and_then(RiskLevel::from_index)
    }

    pub fn strategy(&self) -> Option<Strategy> {
        self.recommended_strategy.and_then(Strategy::from_index)
    }
}

pub type Prediction = BTreeMap<String, Value>;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrategyRecommendation {
    pub vehicle_id: Option<String>,
    pub recommended_strategy: Option<i64>,
    pub generated_at: Option<String>,
    pub predictions: Option<BTreeMap<String, Option<Prediction>>>,
}

impl StrategyRecommendation {
    pub fn strategy(&self) -> Option<Strategy> {
        self.recommended_strategy.and_then(Strategy::from_index)
    }
}

fn metric_unit(key: &str) -> &'static str {
    match key {
        "predicted_maintenance_cost" => "$",
        "predicted_speed" => "km/h",
        "predicted_fuel_efficiency" => "km/l",
        _ => "",
    }
}

/// `predicted_fuel_efficiency` -> `Predicted Fuel Efficiency`
pub fn format_metric_key(key: &str) -> String {
    key.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Arrays are reduced to their first element.
pub fn format_metric_value(key: &str, value: &Value) -> String {
    let value = match value {
        Value::Array(values) => values.first().unwrap_or(&Value::Null),
        value => value,
    };
    if key == "risk_level" {
        return value
            .as_i64()
            .and_then(RiskLevel::from_index)
            .map(|risk| risk.label().to_string())
            .unwrap_or_else(|| "Unknown".to_string());
    }
    let unit = metric_unit(key);
    match value {
        Value::Null => "N/A".to_string(),
        Value::Number(number) => match number.as_f64() {
            Some(number) => format!("{:.2} {}", number, unit).trim_end().to_string(),
            None => "N/A".to_string(),
        },
        Value::String(text) => format!("{} {}", text, unit).trim_end().to_string(),
        other => format!("{} {}", other, unit).trim_end().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metric_keys_are_title_cased() {
        assert_eq!(
            format_metric_key("predicted_fuel_efficiency"),
            "Predicted Fuel Efficiency"
        );
        assert_eq!(format_metric_key("risk_level"), "Risk Level");
    }

    #[test]
    fn numbers_get_two_decimals_and_unit() {
        assert_eq!(
            format_metric_value("predicted_speed", &json!(42.123)),
            "42.12 km/h"
        );
        assert_eq!(
            format_metric_value("predicted_maintenance_cost", &json!([310.5, 1.0])),
            "310.50 $"
        );
        assert_eq!(format_metric_value("something_else", &json!(1)), "1.00");
    }

    #[test]
    fn risk_level_is_labelled() {
        assert_eq!(format_metric_value("risk_level", &json!([2])), "High");
        assert_eq!(format_metric_value("risk_level", &json!(7)), "Unknown");
        assert_eq!(format_metric_value("risk_level", &json!(null)), "Unknown");
    }

    #[test]
    fn missing_values_are_not_available() {
        assert_eq!(format_metric_value("predicted_speed", &json!(null)), "N/A");
        assert_eq!(format_metric_value("predicted_speed", &json!([])), "N/A");
    }

    #[test]
    fn decodes_recommendation_with_empty_prediction() {
        // Given
        let json = r#"{
            "recommendedStrategy": 2,
            "generatedAt": "2024-03-01T10:00:00Z",
            "predictions": {"0": {"predicted_speed": [40.0]}, "1": null}
        }"#;

        // When
        let recommendation: StrategyRecommendation = serde_json::from_str(json).unwrap();

        // Then
        assert_eq!(recommendation.strategy(), Some(Strategy::Scheduled));
        let predictions = recommendation.predictions.unwrap();
        assert!(predictions["0"].is_some());
        assert!(predictions["1"].is_none());
    }
}

use crate::api::HttpClient;
use crate::model::{
    format_metric_key, format_metric_value, RiskAssessment, RiskLevel, Strategy,
    StrategyRecommendation,
};
use anyhow::Context;

const TOP_RISK_COUNT: usize = 3;

struct ProsCons {
    pros: [&'static str; 2],
    cons: [&'static str; 2],
}

fn pros_cons(strategy: Strategy) -> ProsCons {
    match strategy {
        Strategy::Delayed => ProsCons {
            pros: [
                "Allows flexibility in scheduling",
                "May reduce immediate maintenance costs",
            ],
            cons: [
                "Higher risk of failure",
                "Can lead to expensive repairs later",
            ],
        },
        Strategy::Immediate => ProsCons {
            pros: [
                "Improves safety and reliability",
                "Prevents unexpected breakdowns",
            ],
            cons: [
                "Immediate cost and downtime",
                "May be unnecessary if no symptoms",
            ],
        },
        Strategy::Scheduled => ProsCons {
            pros: [
                "Balances cost and safety",
                "Planned maintenance avoids surprises",
            ],
            cons: ["Requires careful scheduling", "May miss urgent issues"],
        },
    }
}

fn strategy_name(strategy: Option<Strategy>) -> &'static str {
    strategy.map(|strategy| strategy.name()).unwrap_or("Unknown")
}

fn two_decimals(value: Option<f64>, prefix: &str, suffix: &str) -> String {
    value
        .map(|value| format!("{}{:.2}{}", prefix, value, suffix))
        .unwrap_or_else(|| "N/A".to_string())
}

/// High risk vehicles only, at most three, in server order.
pub fn top_risk_vehicles(assessments: &[RiskAssessment]) -> Vec<&RiskAssessment> {
    assessments
        .iter()
        .filter(|assessment| assessment.risk() == Some(RiskLevel::High))
        .take(TOP_RISK_COUNT)
        .collect()
}

pub fn format_top_risk(assessments: &[RiskAssessment]) -> Vec<String> {
    let mut out = vec!["Top Vehicles at Risk".to_string()];
    let vehicles = top_risk_vehicles(assessments);
    if vehicles.is_empty() {
        out.push("No high-risk vehicles found.".to_string());
    }
    for vehicle in vehicles {
        out.push(format!("Vehicle ID: {}", vehicle.vehicle_id));
        out.push(format!(
            "  Risk: {} • Strategy: {}",
            vehicle.risk().map(|risk| risk.label()).unwrap_or("Unknown"),
            strategy_name(vehicle.strategy())
        ));
        out.push(format!("  Cost: {}", two_decimals(vehicle.cost, "$", "")));
        out.push(format!(
            "  Fuel Efficiency: {}",
            two_decimals(vehicle.fuel, "", " km/l")
        ));
    }
    out
}

pub async fn top_risk(api: &HttpClient) -> anyhow::Result<Vec<String>> {
    let assessments = api
        .top_risk()
        .await
        .context("Error fetching top-risk vehicles")?;
    Ok(format_top_risk(&assessments))
}

pub fn format_recommendation(recommendation: &StrategyRecommendation) -> Vec<String> {
    let name = strategy_name(recommendation.strategy());
    let mut out = vec![
        "Strategy Recommendation For Your Next Maintenance".to_string(),
        format!("Recommended Strategy: {}", name),
        format!(
            "Based on the latest vehicle health and maintenance trends, we recommend {} maintenance.",
            name
        ),
        format!(
            "Generated on: {}",
            recommendation.generated_at.as_deref().unwrap_or("N/A")
        ),
    ];

    let predictions = match &recommendation.predictions {
        Some(predictions) => predictions,
        None => return out,
    };
    for (position, (key, prediction)) in predictions.iter().enumerate() {
        let strategy = key
            .parse::<i64>()
            .ok()
            .and_then(Strategy::from_index)
            .or_else(|| Strategy::from_index(position as i64));
        out.push(String::new());
        out.push(format!("{} Strategy", strategy_name(strategy)));
        match prediction {
            Some(prediction) => {
                out.push("  Predicted Metrics:".to_string());
                for (metric, value) in prediction {
                    out.push(format!(
                        "    {}: {}",
                        format_metric_key(metric),
                        format_metric_value(metric, value)
                    ));
                }
            }
            None => out.push("  No prediction data available for this strategy.".to_string()),
        }
        if let Some(strategy) = strategy {
            let ProsCons { pros, cons } = pros_cons(strategy);
            out.push(format!("  Pros: {}", pros.join("; ")));
            out.push(format!("  Cons: {}", cons.join("; ")));
        }
    }
    out
}

pub async fn strategy(api: &HttpClient, vehicle_id: &str) -> anyhow::Result<Vec<String>> {
    let recommendation = api
        .latest_strategy(vehicle_id)
        .await
        .context("No recommendation available.")?;
    Ok(format_recommendation(&recommendation))
}

//! Output formatting module

use serde::Serialize;
use shipcost_app::quote_service::Quote;
use shipcost_domain::model::{CostBreakdown, Route, VehicleTariff};
use shipcost_domain::service::{summarize, FleetEvaluation, SelectionOutcome, SelectionSummary};
use shipcost_types::{OutputFormat, Result};

/// Money with thousands separators and two decimals, e.g. `5,438.85`
pub fn format_money(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

pub fn breakdown_line(cb: &CostBreakdown, currency: &str) -> String {
    format!(
        "{} | CHW: {:.2} kg | Base: {c}{} | Fuel: {c}{} | Handling: {c}{} | Oversize: {c}{} | TOTAL: {c}{}",
        cb.vehicle_name,
        cb.chargeable_weight_kg,
        format_money(cb.base_cost),
        format_money(cb.fuel_surcharge),
        format_money(cb.handling_fee),
        format_money(cb.oversize_fee),
        format_money(cb.total),
        c = currency,
    )
}

pub fn vehicle_lines(fleet: &[VehicleTariff]) -> Vec<String> {
    fleet
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{}. {}", i + 1, v.name))
        .collect()
}

pub fn route_lines(routes: &[Route]) -> Vec<String> {
    routes.iter().map(Route::to_string).collect()
}

/// Lines describing one shipment's fleet scan, in the menu layout
pub fn evaluation_lines(eval: &FleetEvaluation, currency: &str) -> Vec<String> {
    let mut lines = Vec::new();
    match (&eval.outcome, &eval.route) {
        (SelectionOutcome::RouteNotFound { shipment_id, route_id }, _) => {
            lines.push(format!(
                "Shipment {} references unknown route {}",
                shipment_id, route_id
            ));
        }
        (outcome, Some(route)) => {
            lines.push(format!(
                "Shipment {} route {} ({:?} km)",
                eval.shipment_id, route.route_id, route.distance_km
            ));
            for option in &eval.options {
                lines.push(format!("  {}", breakdown_line(option, currency)));
            }
            match outcome.best() {
                Some(best) => lines.push(format!(
                    " => Best: {} at {}{}",
                    best.vehicle_name,
                    currency,
                    format_money(best.total)
                )),
                None => lines.push(" => No suitable vehicle".to_string()),
            }
        }
        (_, None) => {}
    }
    lines
}

pub fn summary_line(summary: &SelectionSummary) -> String {
    format!(
        "{} shipments: {} priced, {} unknown route, {} without a suitable vehicle",
        summary.total, summary.priced, summary.route_not_found, summary.no_feasible_vehicle
    )
}

pub fn output_vehicles(format: OutputFormat, fleet: &[VehicleTariff]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(fleet)?);
    } else {
        for line in vehicle_lines(fleet) {
            println!("{}", line);
        }
    }
    Ok(())
}

pub fn output_routes(format: OutputFormat, routes: &[Route]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(routes)?);
    } else {
        for line in route_lines(routes) {
            println!("{}", line);
        }
    }
    Ok(())
}

pub fn output_quote(format: OutputFormat, quote: &Quote, currency: &str) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(quote)?);
    } else {
        println!("{}", breakdown_line(&quote.breakdown, currency));
    }
    Ok(())
}

#[derive(Serialize)]
struct BestReport<'a> {
    summary: SelectionSummary,
    shipments: &'a [FleetEvaluation],
}

/// `{"summary": {...}, "shipments": [...]}` document for `best --format json`
pub fn best_report_json(evaluations: &[FleetEvaluation]) -> Result<String> {
    let report = BestReport {
        summary: summarize(evaluations),
        shipments: evaluations,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn output_best(format: OutputFormat, evaluations: &[FleetEvaluation], currency: &str) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", best_report_json(evaluations)?);
    } else {
        let summary = summarize(evaluations);
        for eval in evaluations {
            for line in evaluation_lines(eval, currency) {
                println!("{}", line);
            }
        }
        println!();
        println!("{}", summary_line(&summary));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipcost_domain::model::{Dimensions, Shipment};
    use shipcost_domain::service::{evaluate_fleet, evaluate_shipments};

    fn bike() -> VehicleTariff {
        VehicleTariff {
            name: "Bike".to_string(),
            capacity_kg: 30.0,
            rate_per_kg_per_km: 0.8,
            fuel_surcharge_fraction: 0.05,
            handling_fee: 50.0,
            oversize_threshold_cm: 60.0,
            oversize_fee: 200.0,
            min_charge: 100.0,
        }
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(500.0), "500.00");
        assert_eq!(format_money(1619.264), "1,619.26");
        assert_eq!(format_money(39314.72), "39,314.72");
        assert_eq!(format_money(1234567.891), "1,234,567.89");
        assert_eq!(format_money(-2500.5), "-2,500.50");
    }

    #[test]
    fn test_breakdown_line() {
        let cb = CostBreakdown::new("Van", 14.4, 1290.24, 129.024, 200.0, 0.0);
        assert_eq!(
            breakdown_line(&cb, "₹"),
            "Van | CHW: 14.40 kg | Base: ₹1,290.24 | Fuel: ₹129.02 | Handling: ₹200.00 | Oversize: ₹0.00 | TOTAL: ₹1,619.26"
        );
    }

    #[test]
    fn test_evaluation_lines() {
        let fleet = vec![bike()];
        let routes = vec![Route::new("R002", "Vijayawada", "Vizianagaram", 398.0)];

        let light = Shipment::new("S2", 2.0, Dimensions::new(20.0, 15.0, 10.0), "R002");
        let lines = evaluation_lines(&evaluate_fleet(&light, &routes, &fleet), "₹");
        assert_eq!(lines[0], "Shipment S2 route R002 (398.0 km)");
        assert!(lines[1].starts_with("  Bike | CHW: 2.00 kg"));
        assert_eq!(lines[2], " => Best: Bike at ₹718.64");

        let heavy = Shipment::new("S3", 800.0, Dimensions::default(), "R002");
        let lines = evaluation_lines(&evaluate_fleet(&heavy, &routes, &fleet), "₹");
        assert_eq!(lines.last().unwrap(), " => No suitable vehicle");

        let lost = Shipment::new("S4", 1.0, Dimensions::default(), "R999");
        let lines = evaluation_lines(&evaluate_fleet(&lost, &routes, &fleet), "₹");
        assert_eq!(lines, ["Shipment S4 references unknown route R999"]);
    }

    #[test]
    fn test_best_report_json_shape() {
        let routes = vec![Route::new("R002", "Vijayawada", "Vizianagaram", 398.0)];
        let shipments = vec![
            Shipment::new("S2", 2.0, Dimensions::new(20.0, 15.0, 10.0), "R002"),
            Shipment::new("S3", 800.0, Dimensions::default(), "R002"),
            Shipment::new("S4", 1.0, Dimensions::default(), "R999"),
        ];
        let evals = evaluate_shipments(&shipments, &routes, &[bike()]);

        let json: serde_json::Value = serde_json::from_str(&best_report_json(&evals).unwrap()).unwrap();
        assert_eq!(json["summary"]["total"], 3);
        assert_eq!(json["summary"]["priced"], 1);
        assert_eq!(json["summary"]["route_not_found"], 1);
        assert_eq!(json["summary"]["no_feasible_vehicle"], 1);

        let shipments = json["shipments"].as_array().unwrap();
        assert_eq!(shipments[0]["outcome"]["status"], "best");
        assert_eq!(shipments[0]["outcome"]["vehicle_name"], "Bike");
        assert_eq!(shipments[0]["route"]["distance_km"], 398.0);
        assert_eq!(shipments[1]["outcome"]["status"], "no_feasible_vehicle");
        assert_eq!(shipments[1]["rejections"][0]["CapacityExceeded"]["vehicle"], "Bike");
        assert_eq!(shipments[2]["outcome"]["status"], "route_not_found");
        assert_eq!(shipments[2]["outcome"]["route_id"], "R999");
        assert!(shipments[2]["route"].is_null());
    }
}

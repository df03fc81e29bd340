//! Excel export functionality

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use shipcost_domain::model::CostBreakdown;
use shipcost_domain::service::{summarize, FleetEvaluation, SelectionOutcome};
use shipcost_types::{Error, Result};
use std::path::Path;

fn xlsx_err(e: rust_xlsxwriter::XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export fleet evaluations to an Excel file
pub fn export_to_excel(evaluations: &[FleetEvaluation], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, evaluations)?;

    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, evaluations)?;

    workbook.save(output_path).map_err(xlsx_err)?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, evaluations: &[FleetEvaluation]) -> Result<()> {
    sheet.set_name("Summary").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let summary = summarize(evaluations);

    sheet
        .write_string_with_format(0, 0, "Shipment Cost Report", &header_format)
        .map_err(xlsx_err)?;

    let rows = [
        ("Shipments:", summary.total),
        ("Priced:", summary.priced),
        ("Route not found:", summary.route_not_found),
        ("No suitable vehicle:", summary.no_feasible_vehicle),
    ];
    for (offset, (label, count)) in rows.iter().enumerate() {
        let row = 2 + offset as u32;
        sheet.write_string(row, 0, *label).map_err(xlsx_err)?;
        sheet.write_number(row, 1, *count as f64).map_err(xlsx_err)?;
    }

    sheet.set_column_width(0, 22).map_err(xlsx_err)?;

    Ok(())
}

/// One line of the Details sheet
#[derive(Debug, PartialEq)]
struct DetailRow<'a> {
    shipment_id: &'a str,
    route_id: &'a str,
    distance_km: Option<f64>,
    option: Option<&'a CostBreakdown>,
    is_best: bool,
    note: Option<&'static str>,
}

impl<'a> DetailRow<'a> {
    fn note(shipment_id: &'a str, route_id: &'a str, note: &'static str) -> Self {
        Self {
            shipment_id,
            route_id,
            distance_km: None,
            option: None,
            is_best: false,
            note: Some(note),
        }
    }
}

/// Flatten evaluations into sheet rows: every feasible option, or a single
/// note row when the shipment could not be priced.
fn detail_rows(evaluations: &[FleetEvaluation]) -> Vec<DetailRow<'_>> {
    let mut rows = Vec::new();
    for eval in evaluations {
        let route_id = eval.route.as_ref().map(|r| r.route_id.as_str());
        match &eval.outcome {
            SelectionOutcome::RouteNotFound { route_id, .. } => {
                rows.push(DetailRow::note(&eval.shipment_id, route_id, "Unknown route"));
            }
            SelectionOutcome::NoFeasibleVehicle { .. } => {
                rows.push(DetailRow::note(
                    &eval.shipment_id,
                    route_id.unwrap_or_default(),
                    "No suitable vehicle",
                ));
            }
            SelectionOutcome::Best(_) => {
                let best = eval.best_index();
                for (idx, option) in eval.options.iter().enumerate() {
                    rows.push(DetailRow {
                        shipment_id: &eval.shipment_id,
                        route_id: route_id.unwrap_or_default(),
                        distance_km: eval.route.as_ref().map(|r| r.distance_km),
                        option: Some(option),
                        is_best: best == Some(idx),
                        note: None,
                    });
                }
            }
        }
    }
    rows
}

fn write_details_sheet(sheet: &mut Worksheet, evaluations: &[FleetEvaluation]) -> Result<()> {
    sheet.set_name("Details").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let money_format = Format::new().set_num_format("#,##0.00");

    let headers = [
        "Shipment",
        "Route",
        "Distance (km)",
        "Vehicle",
        "Chargeable (kg)",
        "Base",
        "Fuel",
        "Handling",
        "Oversize",
        "Total",
        "Best",
        "Note",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    for (idx, detail) in detail_rows(evaluations).iter().enumerate() {
        let row = 1 + idx as u32;
        sheet.write_string(row, 0, detail.shipment_id).map_err(xlsx_err)?;
        sheet.write_string(row, 1, detail.route_id).map_err(xlsx_err)?;
        if let Some(distance_km) = detail.distance_km {
            sheet.write_number(row, 2, distance_km).map_err(xlsx_err)?;
        }
        if let Some(option) = detail.option {
            sheet.write_string(row, 3, &option.vehicle_name).map_err(xlsx_err)?;
            sheet
                .write_number(row, 4, option.chargeable_weight_kg)
                .map_err(xlsx_err)?;
            let amounts = [
                option.base_cost,
                option.fuel_surcharge,
                option.handling_fee,
                option.oversize_fee,
                option.total,
            ];
            for (i, amount) in amounts.iter().enumerate() {
                sheet
                    .write_number_with_format(row, 5 + i as u16, *amount, &money_format)
                    .map_err(xlsx_err)?;
            }
        }
        if detail.is_best {
            sheet.write_string(row, 10, "Yes").map_err(xlsx_err)?;
        }
        if let Some(note) = detail.note {
            sheet.write_string(row, 11, note).map_err(xlsx_err)?;
        }
    }

    sheet.set_column_width(3, 12).map_err(xlsx_err)?;
    sheet.set_column_width(11, 22).map_err(xlsx_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipcost_domain::model::{Dimensions, Route, Shipment, VehicleTariff};
    use shipcost_domain::service::evaluate_shipments;

    fn van() -> VehicleTariff {
        VehicleTariff {
            name: "Van".to_string(),
            capacity_kg: 1500.0,
            rate_per_kg_per_km: 0.2,
            fuel_surcharge_fraction: 0.1,
            handling_fee: 200.0,
            oversize_threshold_cm: 200.0,
            oversize_fee: 1000.0,
            min_charge: 800.0,
        }
    }

    fn evaluations(fleet: &[VehicleTariff]) -> Vec<FleetEvaluation> {
        let routes = vec![Route::new("R001", "Vijayawada", "Srikakulam", 448.0)];
        let shipments = vec![
            Shipment::new("S1", 14.0, Dimensions::new(10.0, 10.0, 10.0), "R001"),
            Shipment::new("S2", 5.0, Dimensions::default(), "R999"),
        ];
        evaluate_shipments(&shipments, &routes, fleet)
    }

    #[test]
    fn test_only_first_of_identical_options_is_flagged() {
        let evals = evaluations(&[van(), van()]);
        let rows = detail_rows(&evals);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].option, rows[1].option);
        assert!(rows[0].is_best);
        assert!(!rows[1].is_best);
        assert_eq!(rows[0].distance_km, Some(448.0));
    }

    #[test]
    fn test_unpriced_shipment_gets_note_row() {
        let evals = evaluations(&[van()]);
        let rows = detail_rows(&evals);

        let unknown = rows.last().unwrap();
        assert_eq!(unknown.shipment_id, "S2");
        assert_eq!(unknown.route_id, "R999");
        assert_eq!(unknown.note, Some("Unknown route"));
        assert!(unknown.option.is_none());
        assert!(!unknown.is_best);
    }
}

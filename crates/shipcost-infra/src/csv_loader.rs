//! CSV loaders for routes, fleet tariffs and shipments
//!
//! Every file starts with a header row. Blank lines are ignored and fields are
//! trimmed. Rows with too few columns are skipped with a warning.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use shipcost_domain::model::{Dimensions, Route, Shipment, VehicleTariff};
use shipcost_types::LoaderError;
use tracing::{info, warn};

const ROUTE_COLUMNS: usize = 4;
const FLEET_COLUMNS: usize = 8;
const SHIPMENT_COLUMNS: usize = 6;

/// Load routes from `routeId,source,destination,distanceKm`.
///
/// An unreadable distance is taken as 0 km. A repeated route id replaces the
/// earlier row but keeps its position.
pub fn load_routes(path: &Path) -> Result<Vec<Route>, LoaderError> {
    let routes = parse_routes(File::open(path)?, &file_label(path))?;
    info!(path = %path.display(), count = routes.len(), "loaded routes");
    Ok(routes)
}

pub fn parse_routes<R: Read>(reader: R, file: &str) -> Result<Vec<Route>, LoaderError> {
    let mut routes: Vec<Route> = Vec::new();
    for (row_num, record) in records(reader) {
        let record = record?;
        if record.len() < ROUTE_COLUMNS {
            warn!(file, row = row_num, "skipping route row with {} columns", record.len());
            continue;
        }
        let distance_km = record[3].parse::<f64>().unwrap_or_else(|_| {
            warn!(file, row = row_num, value = &record[3], "unreadable distance, using 0 km");
            0.0
        });
        let route = Route::new(&record[0], &record[1], &record[2], distance_km);
        match routes.iter_mut().find(|r| r.route_id == route.route_id) {
            Some(existing) => *existing = route,
            None => routes.push(route),
        }
    }
    Ok(routes)
}

/// Load tariffs from
/// `vehicleType,capacityKg,ratePerKgPerKm,fuelPct,handling,oversizeThresholdCm,oversizeFee,minCharge`
pub fn load_fleet(path: &Path) -> Result<Vec<VehicleTariff>, LoaderError> {
    let fleet = parse_fleet(File::open(path)?, &file_label(path))?;
    info!(path = %path.display(), count = fleet.len(), "loaded fleet");
    Ok(fleet)
}

pub fn parse_fleet<R: Read>(reader: R, file: &str) -> Result<Vec<VehicleTariff>, LoaderError> {
    let mut fleet = Vec::new();
    for (row_num, record) in records(reader) {
        let record = record?;
        if record.len() < FLEET_COLUMNS {
            warn!(file, row = row_num, "skipping fleet row with {} columns", record.len());
            continue;
        }
        let num = |idx: usize, column: &str| parse_f64(&record[idx], file, row_num, column);
        fleet.push(VehicleTariff {
            name: record[0].to_string(),
            capacity_kg: num(1, "capacityKg")?,
            rate_per_kg_per_km: num(2, "ratePerKgPerKm")?,
            fuel_surcharge_fraction: num(3, "fuelPct")?,
            handling_fee: num(4, "handling")?,
            oversize_threshold_cm: num(5, "oversizeThresholdCm")?,
            oversize_fee: num(6, "oversizeFee")?,
            min_charge: num(7, "minCharge")?,
        });
    }
    Ok(fleet)
}

/// Load shipments from `shipmentId,actualKg,lengthCm,widthCm,heightCm,routeId`
pub fn load_shipments(path: &Path) -> Result<Vec<Shipment>, LoaderError> {
    let shipments = parse_shipments(File::open(path)?, &file_label(path))?;
    info!(path = %path.display(), count = shipments.len(), "loaded shipments");
    Ok(shipments)
}

pub fn parse_shipments<R: Read>(reader: R, file: &str) -> Result<Vec<Shipment>, LoaderError> {
    let mut shipments = Vec::new();
    for (row_num, record) in records(reader) {
        let record = record?;
        if record.len() < SHIPMENT_COLUMNS {
            warn!(file, row = row_num, "skipping shipment row with {} columns", record.len());
            continue;
        }
        let num = |idx: usize, column: &str| parse_f64(&record[idx], file, row_num, column);
        let dimensions = Dimensions::new(num(2, "lengthCm")?, num(3, "widthCm")?, num(4, "heightCm")?);
        shipments.push(Shipment::new(
            &record[0],
            num(1, "actualKg")?,
            dimensions,
            &record[5],
        ));
    }
    Ok(shipments)
}

/// Data records paired with their 1-based line number (header is line 1)
fn records<R: Read>(reader: R) -> impl Iterator<Item = (usize, csv::Result<csv::StringRecord>)> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader.into_records().map(|result| {
        let line = result
            .as_ref()
            .ok()
            .and_then(|r| r.position())
            .map(|p| p.line() as usize)
            .unwrap_or(0);
        (line, result)
    })
}

fn parse_f64(value: &str, file: &str, row: usize, column: &str) -> Result<f64, LoaderError> {
    value.parse::<f64>().map_err(|_| LoaderError::InvalidNumber {
        file: file.to_string(),
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

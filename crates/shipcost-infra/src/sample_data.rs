//! Sample input files written on first run

use std::fs;
use std::io;

use tracing::info;

use crate::{is_toml, DataFiles};

const ROUTES_CSV: &str = "\
routeId,source,destination,distanceKm
R001,Vijayawada,Srikakulam,448
R002,Vijayawada,Vizianagaram,398
R003,Vijayawada,Visakhapatnam,361
R004,Vijayawada,Anakapalli,314
R005,Vijayawada,Parvathipuram Manyam,488
R006,Vijayawada,Alluri Sitharama Raju,252
R007,Vijayawada,Bapatla,84
R008,Vijayawada,Dr. B.R. Ambedkar Konaseema (Amalapuram),182
R009,Vijayawada,Kakinada,216
R010,Vijayawada,Eluru,60
R011,Vijayawada,Guntur,40
R012,Vijayawada,Rajamundry,159
R013,Vijayawada,Krishna (Machilipatnam),67
R014,Vijayawada,Palnadu (Narasaraopet),96
R015,Vijayawada,Prakasam (Ongole),155
R016,Vijayawada,Sri Potti Sriramulu Nellore (Nellore),279
R017,Vijayawada,West Godavari (Bhimavaram),138
R018,Vijayawada,Ananthapuramu (Anantapur),482
R019,Vijayawada,Annamayya (Rayachoti),436
R020,Vijayawada,Chittoor,483
R021,Vijayawada,YSR Kadapa (Kadapa),387
R022,Vijayawada,Kurnool,348
R023,Vijayawada,Nandyal,330
R024,Vijayawada,Sri Sathya Sai (Puttaparthi area),522
R025,Vijayawada,Tirupati,417
R026,Vijayawada,Hyderabad,277
R027,Vijayawada,Bengaluru,663
R028,Vijayawada,Chennai,455
R029,Vijayawada,Mumbai,1025
R030,Vijayawada,New Delhi,1985
R031,Vijayawada,Kolkata,1215
R032,Vijayawada,Pune,842
R033,Vijayawada,Ahmedabad,1471
R034,Vijayawada,Bhubaneswar,774
R035,Vijayawada,Thiruvananthapuram,1181
R036,Vijayawada,Kochi,1094
";

const FLEET_CSV: &str = "\
vehicleType,capacityKg,ratePerKgPerKm,fuelPct,handling,oversizeThresholdCm,oversizeFee,minCharge
Truck,10000,0.12,0.12,500,250,2500,5000
Van,1500,0.20,0.10,200,180,1000,800
Bike,30,0.80,0.05,50,60,200,100
";

const FLEET_TOML: &str = r#"[[vehicles]]
name = "Truck"
capacity_kg = 10000.0
rate_per_kg_per_km = 0.12
fuel_surcharge_fraction = 0.12
handling_fee = 500.0
oversize_threshold_cm = 250.0
oversize_fee = 2500.0
min_charge = 5000.0

[[vehicles]]
name = "Van"
capacity_kg = 1500.0
rate_per_kg_per_km = 0.2
fuel_surcharge_fraction = 0.1
handling_fee = 200.0
oversize_threshold_cm = 180.0
oversize_fee = 1000.0
min_charge = 800.0

[[vehicles]]
name = "Bike"
capacity_kg = 30.0
rate_per_kg_per_km = 0.8
fuel_surcharge_fraction = 0.05
handling_fee = 50.0
oversize_threshold_cm = 60.0
oversize_fee = 200.0
min_charge = 100.0
"#;

const SHIPMENTS_CSV: &str = "\
shipmentId,actualKg,lengthCm,widthCm,heightCm,routeId
S1,14,60,40,30,R001
S2,2,20,15,10,R002
S3,800,200,120,150,R003
";

/// Write all sample files unless every one of them already exists.
///
/// When any file is missing all three are rewritten, so a partial set is
/// replaced as a whole. Returns whether anything was written.
pub fn create_samples_if_missing(files: &DataFiles) -> io::Result<bool> {
    if files.all_exist() {
        return Ok(false);
    }
    write_samples(files)?;
    Ok(true)
}

/// Write all sample files, overwriting existing ones
pub fn write_samples(files: &DataFiles) -> io::Result<()> {
    for path in [&files.routes, &files.fleet, &files.shipments] {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&files.routes, ROUTES_CSV)?;
    let fleet = if is_toml(&files.fleet) { FLEET_TOML } else { FLEET_CSV };
    fs::write(&files.fleet, fleet)?;
    fs::write(&files.shipments, SHIPMENTS_CSV)?;
    info!(
        routes = %files.routes.display(),
        fleet = %files.fleet.display(),
        shipments = %files.shipments.display(),
        "wrote sample data"
    );
    Ok(())
}

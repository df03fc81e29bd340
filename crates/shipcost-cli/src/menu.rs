//! Interactive menu session
//!
//! Reads one line at a time. End of input leaves the loop like choosing Exit.

use std::io::{BufRead, Write};

use shipcost_app::quote_service::QuoteService;
use shipcost_domain::model::Dimensions;
use shipcost_types::{Error, Result};

use crate::output::{breakdown_line, evaluation_lines, route_lines, vehicle_lines};

pub struct Menu<'a, R, W> {
    service: &'a QuoteService,
    currency: &'a str,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(service: &'a QuoteService, currency: &'a str, input: R, out: W) -> Self {
        Self {
            service,
            currency,
            input,
            out,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "1. List Vehicles")?;
            writeln!(self.out, "2. List Routes")?;
            writeln!(self.out, "3. Calculate Cost")?;
            writeln!(self.out, "4. Load Shipments and Show Best Options")?;
            writeln!(self.out, "5. Exit")?;
            let Some(line) = self.prompt("Enter choice: ")? else {
                return Ok(());
            };
            let Ok(choice) = line.parse::<i64>() else {
                writeln!(self.out, "Invalid input")?;
                continue;
            };
            match choice {
                1 => self.list_vehicles()?,
                2 => self.list_routes()?,
                3 => {
                    if !self.calculate_cost()? {
                        return Ok(());
                    }
                }
                4 => self.show_best_options()?,
                5 => {
                    writeln!(self.out, "Exiting")?;
                    return Ok(());
                }
                _ => writeln!(self.out, "Invalid choice")?,
            }
        }
    }

    /// Print `label`, then read a trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn list_vehicles(&mut self) -> Result<()> {
        for line in vehicle_lines(self.service.catalog().fleet()) {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    fn list_routes(&mut self) -> Result<()> {
        for line in route_lines(self.service.catalog().routes()) {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    /// Returns false when input ran out mid-dialog
    fn calculate_cost(&mut self) -> Result<bool> {
        let service = self.service;
        let catalog = service.catalog();
        if catalog.is_empty() {
            writeln!(self.out, "Fleet or routes not loaded")?;
            return Ok(true);
        }

        writeln!(self.out, "Select Vehicle:")?;
        self.list_vehicles()?;
        let Some(line) = self.prompt("Enter number: ")? else {
            return Ok(false);
        };
        let Ok(number) = line.parse::<i64>() else {
            writeln!(self.out, "Invalid")?;
            return Ok(true);
        };
        if number < 1 || number > catalog.fleet().len() as i64 {
            writeln!(self.out, "Invalid vehicle")?;
            return Ok(true);
        }

        let Some(route_id) = self.prompt("Enter Route ID: ")? else {
            return Ok(false);
        };
        if catalog.route(&route_id).is_err() {
            writeln!(self.out, "Invalid route")?;
            return Ok(true);
        }

        let mut values = [0.0; 4];
        let labels = [
            "Enter actual weight (kg): ",
            "Enter length (cm): ",
            "Enter width (cm): ",
            "Enter height (cm): ",
        ];
        for (value, label) in values.iter_mut().zip(labels) {
            let Some(line) = self.prompt(label)? else {
                return Ok(false);
            };
            match parse_number(&line) {
                Ok(v) => *value = v,
                Err(e) => {
                    writeln!(self.out, "Error: {}", e)?;
                    return Ok(true);
                }
            }
        }

        let [actual, length, width, height] = values;
        let dimensions = Dimensions::new(length, width, height);
        match service.quote(&number.to_string(), &route_id, actual, dimensions) {
            Ok(quote) => writeln!(self.out, "{}", breakdown_line(&quote.breakdown, self.currency))?,
            Err(Error::Cost(e)) => writeln!(self.out, "Error: {}", e)?,
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    fn show_best_options(&mut self) -> Result<()> {
        let evaluations = match self.service.best_options() {
            Ok(evaluations) => evaluations,
            Err(e) => {
                writeln!(self.out, "Error reading shipments: {}", e)?;
                return Ok(());
            }
        };
        for eval in &evaluations {
            for line in evaluation_lines(eval, self.currency) {
                writeln!(self.out, "{}", line)?;
            }
        }
        Ok(())
    }
}

fn parse_number(value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| Error::InvalidInput(format!("not a number: {:?}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipcost_app::config::Config;
    use std::io::Cursor;
    use tempfile::{tempdir, TempDir};

    fn sample_service() -> (TempDir, QuoteService) {
        let dir = tempdir().unwrap();
        let config = Config {
            data_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        let service = QuoteService::open(&config).unwrap();
        (dir, service)
    }

    fn run(service: &QuoteService, input: &str) -> String {
        let mut out = Vec::new();
        Menu::new(service, "₹", Cursor::new(input), &mut out).run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_and_exit() {
        let (_dir, service) = sample_service();
        let out = run(&service, "1\n2\n5\n");
        assert!(out.contains("1. Truck\n2. Van\n3. Bike\n"));
        assert!(out.contains("R001: Vijayawada -> Srikakulam (448.0 km)"));
        assert!(out.ends_with("Exiting\n"));
    }

    #[test]
    fn test_invalid_inputs_reprompt() {
        let (_dir, service) = sample_service();
        let out = run(&service, "abc\n9\n");
        assert!(out.contains("Invalid input"));
        assert!(out.contains("Invalid choice"));
        assert!(!out.contains("Exiting"));
    }

    #[test]
    fn test_calculate_cost_dialog() {
        let (_dir, service) = sample_service();
        let out = run(&service, "3\n1\nR001\n14\n10\n10\n10\n5\n");
        assert!(out.contains("Truck | CHW: 14.00 kg | Base: ₹4,409.68"));
        assert!(out.contains("TOTAL: ₹5,438.85"));
    }

    #[test]
    fn test_calculate_cost_rejections() {
        let (_dir, service) = sample_service();
        let out = run(&service, "3\n7\n3\n1\nR999\n3\n3\nR001\n31\n1\n1\n1\n3\n2\nR001\nheavy\n5\n");
        assert!(out.contains("Invalid vehicle"));
        assert!(out.contains("Invalid route"));
        assert!(out.contains("Error: Bike cannot carry 31.0 kg (capacity 30.0 kg)."));
        assert!(out.contains("Error: Invalid input: not a number: \"heavy\""));
    }

    #[test]
    fn test_end_of_input_mid_dialog_ends_session() {
        let (_dir, service) = sample_service();
        for input in ["3\n", "3\n1\n", "3\n1\nR001\n", "3\n1\nR001\n14\n10\n"] {
            let out = run(&service, input);
            assert!(!out.contains("Exiting"), "input {:?}", input);
            assert!(!out.contains("TOTAL"), "input {:?}", input);
            assert_eq!(out.matches("Enter choice: ").count(), 1, "input {:?}", input);
        }
    }

    #[test]
    fn test_best_options() {
        let (_dir, service) = sample_service();
        let out = run(&service, "4\n5\n");
        assert!(out.contains("Shipment S1 route R001 (448.0 km)"));
        assert!(out.contains(" => Best: Van at ₹1,619.26"));
        assert!(out.contains(" => Best: Bike at ₹718.64"));
        assert!(out.contains(" => Best: Truck at ₹39,314.72"));
    }

    #[test]
    fn test_best_options_missing_file() {
        let (dir, service) = sample_service();
        std::fs::remove_file(dir.path().join("shipments.csv")).unwrap();
        let out = run(&service, "4\n5\n");
        assert!(out.contains("Error reading shipments: File not found"));
    }
}

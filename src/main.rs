use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use directories::ProjectDirs;
use log::info;
use tabled::settings::object::Rows;
use tabled::settings::{Alignment, Modify, Panel, Style};
use tabled::Table;

use emon_sensors::{CurrentPowerSensor, ScalarSensor, NOMINAL_VOLTAGE};

use crate::table_types::Reading;

mod table_types;

const POLL_PERIOD: Duration = Duration::from_millis(2000);

// Canned reading scripts standing in for the acquisition hardware. The
// zeros exercise the "no reading" sentinel.
const TEMPERATURE_READINGS: &[f32] = &[21.4, 21.9, 0.0, 20.8, 22.3, 21.1];
const AMPERE_READINGS: &[f64] = &[4.2, 3.7, 0.0, 5.1, 4.8, 6.0];

fn main() -> Result<(), String> {
    if let Err(e) = setup_logger() {
        return Err(e.to_string());
    }

    info!("deriving power at a nominal {} V", NOMINAL_VOLTAGE);

    let mut temperature = ScalarSensor::default();
    let mut mains = CurrentPowerSensor::default();

    let mut step = 0;
    loop {
        temperature.current = TEMPERATURE_READINGS[step % TEMPERATURE_READINGS.len()];
        temperature.update_minmax();

        mains.ampere_current = AMPERE_READINGS[step % AMPERE_READINGS.len()];
        mains.update_minmax();

        print_readings(&temperature, &mains);
        step += 1;
        std::thread::sleep(POLL_PERIOD);
    }
}

fn setup_logger() -> Result<(), fern::InitError> {
    let log_dir = ProjectDirs::from("", "", "emon-sensors")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&log_dir)?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(fern::log_file(log_dir.join("emon-sensors.log"))?)
        .apply()?;
    Ok(())
}

fn print_readings(temperature: &ScalarSensor, mains: &CurrentPowerSensor) {
    let readings = vec![
        Reading {
            label: "Temperature",
            unit: "°C",
            current: temperature.current as f64,
            min: temperature.min as f64,
            max: temperature.max as f64,
        },
        Reading {
            label: "Mains current",
            unit: "A",
            current: mains.ampere_current,
            min: mains.ampere_min,
            max: mains.ampere_max,
        },
        Reading {
            label: "Mains power",
            unit: "W",
            current: mains.watts_current,
            min: mains.watts_min,
            max: mains.watts_max,
        },
    ];
    let table = Table::builder(&readings)
        .index()
        .build()
        .with(Panel::header("Readings"))
        .with(Style::sharp())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();
    info!("{}", table);
}

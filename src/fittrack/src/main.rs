#[macro_use]
extern crate log;

use clap::{Parser, Subcommand};
use fittrack_algos::Workout;
use fittrack_types::SensorPacket;

#[derive(Parser)]
pub struct FittrackCli {
    #[clap(subcommand)]
    pub subcommand: FittrackCommand,
}

#[derive(Subcommand)]
pub enum FittrackCommand {
    ///
    /// Print summaries for the built-in sample packets
    ///
    Demo,
    ///
    /// Compute one summary from a workout code and its sensor values
    ///
    Report {
        code: String,
        #[arg(required = true)]
        values: Vec<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = FittrackCli::parse();

    match cli.subcommand {
        FittrackCommand::Demo => {
            for packet in sample_packets() {
                print_summary(&packet)?;
            }

            Ok(())
        }
        FittrackCommand::Report { code, values } => print_summary(&SensorPacket::new(code, values)),
    }
}

fn sample_packets() -> Vec<SensorPacket> {
    vec![
        SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn print_summary(packet: &SensorPacket) -> anyhow::Result<()> {
    let workout = Workout::decode(packet)?;
    debug!("decoded packet {:?} into {:?}", packet, workout);

    println!("{}", workout.summary());
    Ok(())
}

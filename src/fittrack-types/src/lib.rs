mod error;
pub use error::TrainingError;

mod packet;
pub use packet::SensorPacket;

mod workout;
pub use workout::WorkoutType;

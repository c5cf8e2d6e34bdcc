mod power_report;

pub use power_report::{NewPowerReport, PowerReport};

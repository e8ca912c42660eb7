use clap::ValueEnum;
use resistor_codec::BandRole;

pub mod commands;
pub mod utils;

// Re-export the codec for external use
pub use resistor_codec;

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleArg {
    Digit,
    Multiplier,
    Tolerance,
    #[value(alias = "tempco")]
    TempCo,
}

impl From<RoleArg> for BandRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Digit => BandRole::Digit,
            RoleArg::Multiplier => BandRole::Multiplier,
            RoleArg::Tolerance => BandRole::Tolerance,
            RoleArg::TempCo => BandRole::TempCo,
        }
    }
}

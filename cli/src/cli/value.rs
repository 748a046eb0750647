mod color_choice;
mod log_level;

pub(crate) use color_choice::ColorChoice;
pub(crate) use log_level::LogLevel;

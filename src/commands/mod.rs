pub mod generate;
pub mod series;

pub use generate::GenerateCommand;
pub use series::SeriesCommand;

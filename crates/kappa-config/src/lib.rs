pub mod chart;
pub mod kappa;
pub mod logging;
pub mod types;
pub mod window;

pub use chart::ChartConfig;
pub use kappa::KappaConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use types::{GapPolicy, TailPolicy, WindowSpan};
pub use window::WindowSection;

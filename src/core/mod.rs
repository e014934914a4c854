pub mod aggregator;
pub mod logic;
pub mod parser;
pub mod source;

pub use aggregator::{DEFAULT_IN_CUTOFF_HOUR, DailyAggregator, aggregate};
pub use parser::{ParseReport, SkippedLine, parse_line, parse_lines};

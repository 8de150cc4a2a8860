mod output;

pub use output::OutputError;
pub use output::OutputManager;

mod run;

pub use run::RunError;
pub use run::RunManager;

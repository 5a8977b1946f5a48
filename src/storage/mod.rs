mod export;
mod persistence;

pub use export::{append_result_csv, write_results_csv, CSV_HEADER};
pub use persistence::{load_survey, save_survey};

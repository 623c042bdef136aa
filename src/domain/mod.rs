mod build;

pub use build::{FINISHED_STATUS, TranslationBuild};

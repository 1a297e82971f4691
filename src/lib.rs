pub mod batch;
pub mod case;
pub mod cli;
pub mod config;
pub mod error;

pub use case::{
    camel_case, convert, kebab_case, snake_case, untitle, upper_camel_case, upper_kebab_case,
    upper_snake_case, words, Case, Transform, Words,
};
pub use config::Config;
pub use error::CaseError;

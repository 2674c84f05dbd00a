#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod matcher;
pub mod ngram;
pub mod operations;
pub mod output;
pub mod resolver;
pub mod source;

pub use config::{Config, FuzzyConfig, QueryConfig};
pub use error::{QueryError, ResolverError};
pub use matcher::{FuzzyMatcher, MatchEngine, SubstringMatcher};
pub use ngram::NgramIndex;
pub use operations::{list_operation, list_targets, resolve_operation};
pub use output::{
    ListResult, OutputFormat, OutputFormatter, ResolveResult, TargetKind, VersionResult,
};
pub use resolver::{resolve, resolve_with, select_target, Resolution, Strategy};
pub use source::{parse_query_output, BazelQuery};

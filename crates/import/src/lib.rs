pub mod config;
pub mod convert;
pub mod csv;
pub mod excel;
pub mod extract;
pub mod header;
pub mod load;
pub mod match_engine;
pub mod profile;
pub mod profiles;
pub mod table;

pub use config::{ConfigError, ConvertConfig};
pub use convert::{convert_file, convert_table, write_canonical_csv, Conversion, ConvertError};
pub use header::{locate_excel_header, locate_header};
pub use load::{load_table, LoadError, LoadResult};
pub use match_engine::{detect, detect_in, match_profile};
pub use profile::{Profile, ProfileMatch, Signature};
pub use profiles::{profile_by_name, PROFILES};
pub use table::{RawTable, ResolvedTable};

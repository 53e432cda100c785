#[allow(clippy::module_inception)]
mod speed_profile;
pub mod speed_profile_ops;
mod speed_profile_row;
mod speed_profile_table;
mod table_source;

pub use speed_profile::SpeedProfile;
pub use speed_profile_row::SpeedProfileRow;
pub use speed_profile_table::SpeedProfileTable;
pub use table_source::TableSource;

// Building blocks
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod input;
pub mod skeleton;
pub mod toast;

// Dashboard chrome
pub mod company_card;
pub mod header;
pub mod sidebar;
pub mod stat_card;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use company_card::*;
pub use data_table::*;
pub use header::*;
pub use input::*;
pub use sidebar::*;
pub use skeleton::*;
pub use stat_card::*;
pub use toast::*;

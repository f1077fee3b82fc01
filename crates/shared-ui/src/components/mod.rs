// Layout and display
pub mod alert;
pub mod badge;
pub mod card;
pub mod detail_list;
pub mod page_header;
pub mod skeleton;

// Forms and navigation
pub mod button;
pub mod input;
pub mod pagination;
pub mod textarea;

pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use detail_list::*;
pub use input::*;
pub use page_header::*;
pub use pagination::*;
pub use skeleton::*;
pub use textarea::*;

pub mod add_player;
pub mod navbar;
pub mod page;
pub mod player_card;
pub mod role_column;

pub use add_player::AddPlayerForm;
pub use navbar::Navbar;
pub use page::Page;
pub use player_card::PlayerCard;
pub use role_column::{RoleColumns, RoleColumn};
